//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching service replies
//! - `convert.rs` — Conversions with validation, where reply and domain shapes differ
//! - `client.rs` — Sub-client exposing the domain's operations

pub mod account;
pub mod order;
pub mod quote;
pub mod strategy;
pub mod watchlist;
