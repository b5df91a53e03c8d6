//! Watchlist domain — tracked symbols and their day change.

pub mod client;
pub mod wire;

pub use wire::WatchEntry;
