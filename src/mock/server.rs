//! Mock Server
//!
//! Configurable fake of the management endpoint, handled entirely
//! in-process from decoded request envelopes.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use zbx_protocol::{
    ApiError, RpcRequest, RpcResponse, METHOD_LOGIN, METHOD_LOGOUT, METHOD_VERSION,
};

use super::failure::{FailureConfig, FailureInjector};

fn invalid_credentials() -> ApiError {
    ApiError::new(-32602, "Invalid params", "Login name or password is incorrect.")
}

fn not_authorised() -> ApiError {
    ApiError::new(-32602, "Invalid params", "Not authorised.")
}

/// Configurable mock server for testing.
///
/// Cloning yields another handle onto the same shared state, so tests can
/// keep configuring and inspecting the server after a transport built from
/// it has been moved into a session.
#[derive(Clone)]
pub struct MockServer {
    /// Mutable state (wrapped for interior mutability)
    state: Arc<Mutex<ServerState>>,
    /// Failure injector
    failures: Arc<Mutex<FailureInjector>>,
}

#[derive(Default)]
struct ServerState {
    /// Accepted credential pairs, user → password
    credentials: HashMap<String, String>,
    /// Tokens issued by login and not yet revoked
    tokens: HashSet<String>,
    /// Scripted result payloads keyed by method name
    results: HashMap<String, Value>,
    /// Version string reported by APIInfo.version
    version: String,
    /// Token sequence counter
    token_seq: u64,
    /// Every request handled so far, in arrival order
    requests: Vec<RpcRequest>,
}

impl MockServer {
    /// Create a mock server with no credentials and an empty script table.
    pub fn new() -> Self {
        let state = ServerState {
            version: "7.0.0".to_string(),
            ..ServerState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            failures: Arc::new(Mutex::new(FailureInjector::new())),
        }
    }

    // === Public API for test configuration ===

    /// Accept a credential pair for login.
    pub fn set_credentials(&self, user: &str, password: &str) {
        let mut state = self.state.lock().unwrap();
        state.credentials.insert(user.to_string(), password.to_string());
    }

    /// Set the version string returned by APIInfo.version.
    pub fn set_version(&self, version: &str) {
        let mut state = self.state.lock().unwrap();
        state.version = version.to_string();
    }

    /// Script the result payload returned for a method.
    pub fn set_result(&self, method: &str, result: Value) {
        let mut state = self.state.lock().unwrap();
        state.results.insert(method.to_string(), result);
    }

    /// Issue a token directly (for tests that skip login).
    pub fn issue_token(&self, token: &str) {
        let mut state = self.state.lock().unwrap();
        state.tokens.insert(token.to_string());
    }

    /// Inject an error for a method.
    pub fn inject_error(&self, method: &str, code: i64, message: &str, data: &str) {
        let mut failures = self.failures.lock().unwrap();
        failures.inject_error(method, code, message, data);
    }

    /// Inject a failure configuration for a method.
    pub fn inject_failure(&self, method: &str, config: FailureConfig) {
        let mut failures = self.failures.lock().unwrap();
        failures.inject(method, config);
    }

    /// Clear all failure injections.
    pub fn clear_failures(&self) {
        let mut failures = self.failures.lock().unwrap();
        failures.clear();
    }

    /// All requests handled so far, in arrival order.
    pub fn requests(&self) -> Vec<RpcRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// The last request handled, if any.
    pub fn last_request(&self) -> Option<RpcRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    // === Request handling ===

    /// Handle one decoded request and produce the response envelope.
    pub fn handle_request(&self, request: &RpcRequest) -> RpcResponse {
        self.state.lock().unwrap().requests.push(request.clone());

        if let Some(error) = self.failures.lock().unwrap().check(&request.method) {
            return RpcResponse::error(error, request.id);
        }

        match request.method.as_str() {
            METHOD_LOGIN => self.handle_login(request),
            METHOD_LOGOUT => self.handle_logout(request),
            METHOD_VERSION => self.handle_version(request),
            _ => self.handle_data_call(request),
        }
    }

    fn handle_login(&self, request: &RpcRequest) -> RpcResponse {
        let mut state = self.state.lock().unwrap();
        let user = request.params.get("user").and_then(Value::as_str).unwrap_or("");
        let password = request.params.get("password").and_then(Value::as_str).unwrap_or("");

        let accepted = state
            .credentials
            .get(user)
            .map(|expected| expected == password)
            .unwrap_or(false);

        if accepted {
            state.token_seq += 1;
            let token = format!("mocktoken{:08x}", state.token_seq);
            state.tokens.insert(token.clone());
            RpcResponse::success(json!(token), request.id)
        } else {
            RpcResponse::error(invalid_credentials(), request.id)
        }
    }

    fn handle_logout(&self, request: &RpcRequest) -> RpcResponse {
        let mut state = self.state.lock().unwrap();
        let revoked = request
            .auth
            .as_deref()
            .map(|token| state.tokens.remove(token))
            .unwrap_or(false);

        if revoked {
            RpcResponse::success(json!(true), request.id)
        } else {
            RpcResponse::error(not_authorised(), request.id)
        }
    }

    fn handle_version(&self, request: &RpcRequest) -> RpcResponse {
        let state = self.state.lock().unwrap();
        RpcResponse::success(json!(state.version), request.id)
    }

    /// Every non-session method: requires a valid token, then returns the
    /// scripted result (empty list when nothing is scripted).
    fn handle_data_call(&self, request: &RpcRequest) -> RpcResponse {
        let state = self.state.lock().unwrap();
        let authorised = request
            .auth
            .as_deref()
            .map(|token| state.tokens.contains(token))
            .unwrap_or(false);

        if !authorised {
            return RpcResponse::error(not_authorised(), request.id);
        }

        let result = state
            .results
            .get(&request.method)
            .cloned()
            .unwrap_or_else(|| json!([]));
        RpcResponse::success(result, request.id)
    }
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}
