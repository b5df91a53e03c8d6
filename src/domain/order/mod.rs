//! Order domain — tickets, receipts, working and historical orders, deals.

pub mod client;
pub mod wire;

pub use wire::{Deal, Order, OrderReceipt, OrderTicket};
