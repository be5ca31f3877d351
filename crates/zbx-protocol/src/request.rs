//! RPC request types.

use serde::{Deserialize, Serialize};

use crate::JSONRPC_VERSION;

/// RPC request envelope.
///
/// Every management call posts a single JSON request of this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,

    /// Fully qualified method name, e.g. "host.get".
    pub method: String,

    /// Method-specific parameters; opaque to the envelope.
    #[serde(default)]
    pub params: serde_json::Value,

    /// Session auth token.
    ///
    /// Zabbix 2.0: the "user.login" method must be called without the
    /// "auth" field, so `None` does not serialize at all. Authenticated
    /// calls carry `Some(token)`, even when the token is still empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,

    /// Request id, unique and strictly increasing within a session.
    pub id: i64,
}

impl RpcRequest {
    /// Build the envelope for one outgoing call.
    pub fn new(
        method: impl Into<String>,
        params: serde_json::Value,
        auth: Option<String>,
        id: i64,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            auth,
            id,
        }
    }

    /// Serialize the envelope to wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
