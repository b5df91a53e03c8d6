//! Strategy domain — performance rankings and subscriptions.

pub mod client;
pub mod wire;

pub use wire::Rank;
