//! Retry policies for HTTP requests.

use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone)]
pub enum RetryPolicy {
    /// Single attempt, no reattempt on failure. Every built-in endpoint
    /// method uses this.
    None,
    /// Bounded reattempts on transport failures and 5xx replies, with a
    /// fixed delay between attempts.
    Transient,
    /// Caller-provided attempt count and delay.
    Custom(RetryConfig),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::None
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, the initial request included.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::transient()
    }
}

impl RetryConfig {
    /// The configuration applied by [`RetryPolicy::Transient`].
    pub fn transient() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_millis(200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_default_is_none() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
    }

    #[test]
    fn test_transient_config() {
        let config = RetryConfig::transient();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.delay, Duration::from_millis(200));
    }
}
