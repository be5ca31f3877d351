//! Transport Layer for the API Client
//!
//! Abstracts the HTTP connection for testability. Provides:
//! - Transport trait: interface for one request/response exchange
//! - MockTransport: in-process mock server for unit tests
//! - HttpTransport: real blocking HTTP connection for production

use std::io;
use std::time::Duration;

use zbx_protocol::{RpcRequest, CONTENT_TYPE};

use crate::mock::MockServer;

/// Transport trait for request/response exchange.
///
/// One call posts one fully encoded request body and returns the complete
/// response body. Bodies are buffered whole: the server may chunk large
/// result sets without reporting a content length, so implementations must
/// not trust any length header.
pub trait Transport: Send + Sync {
    /// Post an encoded request to the endpoint and return the response body.
    fn call(&self, url: &str, body: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// Transport errors
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client transport configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Connection timeout in seconds
    pub connect_timeout_seconds: u64,
    /// Whole-exchange timeout in seconds (connect through last body byte)
    pub request_timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 30,
            request_timeout_seconds: 300,
        }
    }
}

/// Blocking HTTP transport for production use.
///
/// Posts the encoded envelope to the session URL with the
/// `application/json-rpc` content type. Authentication travels inside the
/// JSON body, never at the HTTP layer. Each call is a single exchange; the
/// body is read to completion on every path so the connection is released.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with default configuration.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a transport with custom timeouts.
    pub fn with_config(config: ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn call(&self, url: &str, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(body.to_vec())
            .send()?;

        // Buffer the whole body before returning; content length is not
        // reliable for chunked result sets.
        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}

/// Mock transport for testing - connects directly to a MockServer in-process
pub struct MockTransport {
    server: MockServer,
}

impl MockTransport {
    /// Create a mock transport with a fresh mock server.
    pub fn new() -> Self {
        Self {
            server: MockServer::new(),
        }
    }

    /// Create a mock transport backed by an existing server handle.
    pub fn with_server(server: MockServer) -> Self {
        Self { server }
    }

    /// Get the underlying mock server for test configuration.
    pub fn server(&self) -> &MockServer {
        &self.server
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn call(&self, _url: &str, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        let request: RpcRequest = serde_json::from_slice(body)?;
        let response = self.server.handle_request(&request);
        Ok(serde_json::to_vec(&response)?)
    }
}
