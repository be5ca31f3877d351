//! API Session
//!
//! Owns the connection identity (url, credentials), the auth token obtained
//! from login, and the request id sequence. Every call funnels through
//! [`Session::request`], the single choke-point that assigns ids and
//! attaches the token.

use serde_json::{json, Value};

use zbx_protocol::{
    ApiError, RpcRequest, RpcResponse, METHOD_LOGIN, METHOD_LOGOUT, METHOD_VERSION,
};

use super::transport::{ClientConfig, HttpTransport, Transport, TransportError};

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The connection could not be established or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The request parameters could not be serialized; no call was made.
    #[error("request encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not valid JSON, or the result did not match the
    /// expected shape.
    #[error("response decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The server reported a non-zero error code.
    #[error("{0}")]
    Api(#[from] ApiError),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, Error>;

/// Blocking API session.
///
/// One session holds one auth token and one id sequence. Methods take
/// `&mut self`, so a session can never have two requests in flight;
/// response-to-request correlation by id is trivial. Separate sessions
/// share nothing and may run concurrently.
pub struct Session {
    url: String,
    user: String,
    password: String,
    /// Session auth token; empty until login succeeds.
    auth: String,
    /// Next request id; advances exactly once per call.
    id: i64,
    transport: Box<dyn Transport>,
}

impl Session {
    /// Create a session against the given endpoint using the blocking HTTP
    /// transport with default configuration.
    pub fn new(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> ApiResult<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(url, user, password, Box::new(transport)))
    }

    /// Create a session with custom transport timeouts.
    pub fn with_config(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> ApiResult<Self> {
        let transport = HttpTransport::with_config(config)?;
        Ok(Self::with_transport(url, user, password, Box::new(transport)))
    }

    /// Create a session over a caller-supplied transport.
    pub fn with_transport(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
            auth: String::new(),
            id: 0,
            transport,
        }
    }

    /// Current auth token; empty before login and after logout.
    pub fn auth(&self) -> &str {
        &self.auth
    }

    /// Issue one call through the session.
    ///
    /// Assigns the next request id and attaches the current auth token,
    /// which may still be empty before login. The id advances exactly once
    /// per call, success or failure, so outgoing ids are gapless in call
    /// order.
    pub fn request(&mut self, method: &str, params: Value) -> ApiResult<RpcResponse> {
        let auth = Some(self.auth.clone());
        self.request_with_auth(method, params, auth)
    }

    fn request_with_auth(
        &mut self,
        method: &str,
        params: Value,
        auth: Option<String>,
    ) -> ApiResult<RpcResponse> {
        let id = self.id;
        self.id += 1;

        let request = RpcRequest::new(method, params, auth, id);
        let encoded = request.encode().map_err(Error::Encode)?;

        tracing::debug!(method, id, "issuing api request");
        let body = self.transport.call(&self.url, &encoded)?;

        let response = RpcResponse::decode(&body).map_err(Error::Decode)?;
        if response.is_err() {
            tracing::warn!(method, id, code = response.error.code, "server reported an error");
        }

        Ok(response)
    }

    /// Log in with the session credentials and store the returned token.
    ///
    /// The outgoing envelope carries no `auth` field at all, as the server
    /// requires for `user.login`. On failure the stored token is left
    /// untouched.
    pub fn login(&mut self) -> ApiResult<()> {
        let params = json!({
            "user": self.user,
            "password": self.password,
        });
        let response = self.request_with_auth(METHOD_LOGIN, params, None)?;

        if response.is_err() {
            return Err(Error::Api(response.error));
        }

        self.auth = serde_json::from_value(response.result).map_err(Error::Decode)?;
        Ok(())
    }

    /// Log out and clear the stored token.
    ///
    /// The server invalidates the token on success, so the session drops it
    /// rather than keep presenting a dead credential. A failed logout
    /// leaves the token in place.
    pub fn logout(&mut self) -> ApiResult<()> {
        let response = self.request(METHOD_LOGOUT, json!({}))?;

        if response.is_err() {
            return Err(Error::Api(response.error));
        }

        self.auth.clear();
        Ok(())
    }

    /// Query the server's API version.
    ///
    /// Conventionally requires no authentication, but travels the normal
    /// request path like every other call.
    pub fn version(&mut self) -> ApiResult<String> {
        let response = self.request(METHOD_VERSION, json!({}))?;

        if response.is_err() {
            return Err(Error::Api(response.error));
        }

        serde_json::from_value(response.result).map_err(Error::Decode)
    }
}
