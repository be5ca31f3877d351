//! Zabbix Protocol Types
//!
//! Defines the JSON-RPC 2.0 envelope for client↔server communication,
//! the wire error object, and the typed record shapes returned by the
//! resource call families.

pub mod error;
pub mod records;
pub mod request;
pub mod response;

pub use error::ApiError;
pub use records::{Graph, GraphItem, HistoryItem, Host};
pub use request::RpcRequest;
pub use response::RpcResponse;

/// Protocol version string carried in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Content type the server expects on every HTTP request.
pub const CONTENT_TYPE: &str = "application/json-rpc";

/// Method name for session login.
/// MUST be sent without an `auth` field (Zabbix 2.0+ requirement).
pub const METHOD_LOGIN: &str = "user.login";

/// Method name for session logout.
pub const METHOD_LOGOUT: &str = "user.logout";

/// Method name for the API version query.
pub const METHOD_VERSION: &str = "APIInfo.version";
