//! Network constants for the iitrader SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://50.18.230.41:5691";
