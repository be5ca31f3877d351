//! RPC response types.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::JSONRPC_VERSION;

/// RPC response envelope.
///
/// `result`'s concrete shape depends on the method that was called, so it
/// stays an opaque value here; callers narrow it only after checking the
/// error object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version echoed by the server.
    #[serde(default)]
    pub jsonrpc: String,

    /// Server error object; a zero code means the call succeeded.
    #[serde(default, skip_serializing_if = "ApiError::is_zero")]
    pub error: ApiError,

    /// Opaque result value; Null when the call failed.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub result: serde_json::Value,

    /// Request id echoed by the server.
    #[serde(default)]
    pub id: i64,
}

impl RpcResponse {
    /// Parse a fully buffered response body.
    ///
    /// The server may chunk large result sets without reporting a content
    /// length, so the transport buffers the complete body before this runs.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// True when the server reported a non-zero error code.
    pub fn is_err(&self) -> bool {
        !self.error.is_zero()
    }

    /// Create a successful response.
    pub fn success(result: serde_json::Value, id: i64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            error: ApiError::default(),
            result,
            id,
        }
    }

    /// Create an error response.
    pub fn error(error: ApiError, id: i64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            error,
            result: serde_json::Value::Null,
            id,
        }
    }
}
