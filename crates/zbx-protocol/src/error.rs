//! Wire error object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error object embedded in response envelopes.
///
/// A zero code means the call succeeded; the object may then be absent from
/// the wire entirely. On failure the `data` field carries the server's
/// detail string and is the primary display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Numeric error code; 0 means no error.
    #[serde(default)]
    pub code: i64,

    /// Short error message, e.g. "Invalid params".
    #[serde(default)]
    pub message: String,

    /// Detail string, e.g. "Login name or password is incorrect.".
    #[serde(default)]
    pub data: String,
}

impl ApiError {
    /// Create a populated error object.
    pub fn new(code: i64, message: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: data.into(),
        }
    }

    /// True when the code is zero, i.e. the call succeeded.
    pub fn is_zero(&self) -> bool {
        self.code == 0
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}", self.data)
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let error = ApiError::default();
        assert!(error.is_zero());
        assert_eq!(error.code, 0);
    }

    #[test]
    fn test_display_prefers_data() {
        let error = ApiError::new(-32602, "Invalid params", "Login name or password is incorrect.");
        assert_eq!(error.to_string(), "Login name or password is incorrect.");
    }

    #[test]
    fn test_display_falls_back_to_message() {
        let error = ApiError::new(-32603, "Internal error", "");
        assert_eq!(error.to_string(), "Internal error");
    }

    #[test]
    fn test_partial_object_parses_with_defaults() {
        let error: ApiError = serde_json::from_str(r#"{"code":-32600}"#).unwrap();
        assert_eq!(error.code, -32600);
        assert!(error.message.is_empty());
        assert!(error.data.is_empty());
    }
}
