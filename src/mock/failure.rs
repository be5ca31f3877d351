//! Failure Injection for the Mock Server
//!
//! Supports configurable failure injection for testing error paths.

use std::collections::HashMap;

use zbx_protocol::ApiError;

/// Failure configuration for a method
#[derive(Debug, Clone)]
pub struct FailureConfig {
    /// Error object to return
    pub error: ApiError,
    /// Number of times to fail before succeeding (None = always fail)
    pub fail_count: Option<u32>,
}

impl FailureConfig {
    /// Create a config that returns the given error object.
    pub fn error(code: i64, message: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            error: ApiError::new(code, message, data),
            fail_count: None,
        }
    }

    /// Set the number of times to fail before succeeding.
    pub fn with_fail_count(mut self, count: u32) -> Self {
        self.fail_count = Some(count);
        self
    }
}

/// Failure injector for the mock server
#[derive(Debug, Default)]
pub struct FailureInjector {
    /// Per-method failure configs
    configs: HashMap<String, FailureConfig>,
    /// Call counts per method (for fail_count tracking)
    call_counts: HashMap<String, u32>,
}

impl FailureInjector {
    /// Create a new failure injector
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a failure for a method
    pub fn inject(&mut self, method: &str, config: FailureConfig) {
        self.configs.insert(method.to_string(), config);
        self.call_counts.insert(method.to_string(), 0);
    }

    /// Inject an error object for a method
    pub fn inject_error(
        &mut self,
        method: &str,
        code: i64,
        message: impl Into<String>,
        data: impl Into<String>,
    ) {
        self.inject(method, FailureConfig::error(code, message, data));
    }

    /// Clear all failure injections
    pub fn clear(&mut self) {
        self.configs.clear();
        self.call_counts.clear();
    }

    /// Clear failure injection for a specific method
    pub fn clear_method(&mut self, method: &str) {
        self.configs.remove(method);
        self.call_counts.remove(method);
    }

    /// Check if a failure should occur for a method.
    /// Returns the error object to report if one should occur, None otherwise.
    pub fn check(&mut self, method: &str) -> Option<ApiError> {
        let config = self.configs.get(method)?;
        let count = self.call_counts.entry(method.to_string()).or_insert(0);
        *count += 1;

        // Check if we should still fail based on fail_count
        if let Some(fail_limit) = config.fail_count {
            if *count > fail_limit {
                return None; // Exceeded fail count, succeed now
            }
        }

        Some(config.error.clone())
    }
}
