//! Zabbix API Client
//!
//! This crate implements a blocking client for the Zabbix JSON-RPC
//! management API: session login/logout, version query, and the
//! per-resource call families (user.*, host.*, graph.*, history.*).
//!
//! One [`Session`] issues one request at a time; the request id sequence
//! and the auth token obtained from login are owned by the session, so
//! independent sessions can run side by side without shared state.

pub mod client;
pub mod mock;

pub use client::{
    ApiResult, ClientConfig, Error, HttpTransport, MockTransport, Session, Transport,
    TransportError,
};
pub use mock::MockServer;
pub use zbx_protocol::{
    ApiError, Graph, GraphItem, HistoryItem, Host, RpcRequest, RpcResponse,
};
