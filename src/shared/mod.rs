//! Shared utilities used across all domain modules.

pub mod serde_util;
