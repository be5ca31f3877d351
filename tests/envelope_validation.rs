//! RPC Envelope Validation Tests
//!
//! Wire-shape tests for the JSON-RPC request/response envelopes: auth field
//! presence rules, raw-JSON parse behavior, and the encode/decode round
//! trip through a stub echo transport.

use serde_json::json;
use zbx_api::{
    MockServer, MockTransport, RpcRequest, RpcResponse, Session, Transport, TransportError,
};

// =============================================================================
// Test 1: auth field presence rules
// =============================================================================

#[test]
fn test_login_envelope_never_contains_auth_key() {
    let server = MockServer::new();
    server.set_credentials("Admin", "zabbix");
    let mut session = Session::with_transport(
        "http://localhost/api_jsonrpc.php",
        "Admin",
        "zabbix",
        Box::new(MockTransport::with_server(server.clone())),
    );

    session.login().unwrap();

    let login_request = server.requests()[0].clone();
    assert_eq!(login_request.method, "user.login");
    assert!(login_request.auth.is_none(), "login must omit the auth field");

    let encoded = String::from_utf8(login_request.encode().unwrap()).unwrap();
    assert!(!encoded.contains("\"auth\""), "serialized login envelope must not contain an auth key");
}

#[test]
fn test_relogin_still_omits_auth_key() {
    let server = MockServer::new();
    server.set_credentials("Admin", "zabbix");
    let mut session = Session::with_transport(
        "http://localhost/api_jsonrpc.php",
        "Admin",
        "zabbix",
        Box::new(MockTransport::with_server(server.clone())),
    );

    // A second login while already holding a token must also omit auth
    session.login().unwrap();
    session.login().unwrap();

    for request in server.requests() {
        assert!(request.auth.is_none(), "every login envelope must omit auth");
    }
}

#[test]
fn test_other_calls_carry_current_token_even_when_empty() {
    let server = MockServer::new();
    let mut session = Session::with_transport(
        "http://localhost/api_jsonrpc.php",
        "Admin",
        "zabbix",
        Box::new(MockTransport::with_server(server.clone())),
    );

    // No login yet: the token is empty but the field is still present
    let _ = session.version();
    let request = server.last_request().unwrap();
    assert_eq!(request.auth.as_deref(), Some(""), "pre-login calls carry an empty token");
}

// =============================================================================
// Test 2: round trip through a stub echo transport
// =============================================================================

/// Echoes the decoded request's method and params back as the result.
struct EchoTransport;

impl Transport for EchoTransport {
    fn call(&self, _url: &str, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        let request: RpcRequest = serde_json::from_slice(body)?;
        let response = RpcResponse::success(
            json!({"method": request.method, "params": request.params}),
            request.id,
        );
        Ok(serde_json::to_vec(&response)?)
    }
}

#[test]
fn test_round_trip_preserves_method_and_params() {
    let mut session = Session::with_transport(
        "http://localhost/api_jsonrpc.php",
        "Admin",
        "zabbix",
        Box::new(EchoTransport),
    );

    let params = json!({"hostids": ["10084", "10085"], "output": "extend"});
    let response = session.request("host.get", params.clone()).unwrap();

    assert_eq!(response.result["method"], json!("host.get"));
    assert_eq!(response.result["params"], params);
    assert_eq!(response.id, 0, "response echoes the request id");
}

// =============================================================================
// Test 3: raw-JSON parse behavior
// =============================================================================

#[test]
fn test_request_missing_method_fails() {
    let json_str = r#"{"jsonrpc":"2.0","params":{},"id":0}"#;
    let result: Result<RpcRequest, _> = serde_json::from_str(json_str);

    assert!(result.is_err(), "request without method should fail to parse");
}

#[test]
fn test_request_id_string_instead_of_int_fails() {
    let json_str = r#"{"jsonrpc":"2.0","method":"host.get","params":{},"auth":"t","id":"0"}"#;
    let result: Result<RpcRequest, _> = serde_json::from_str(json_str);

    assert!(result.is_err(), "string id should fail");
}

#[test]
fn test_request_missing_params_uses_default() {
    let json_str = r#"{"jsonrpc":"2.0","method":"APIInfo.version","id":2}"#;
    let request: RpcRequest = serde_json::from_str(json_str).unwrap();

    assert!(request.params.is_null(), "missing params should default to null");
}

#[test]
fn test_response_with_extra_fields_parses() {
    let json_str = r#"{
        "jsonrpc": "2.0",
        "result": ["a"],
        "id": 1,
        "debug": {"elapsed": 0.01}
    }"#;

    let response = RpcResponse::decode(json_str.as_bytes()).unwrap();
    assert!(!response.is_err(), "unknown fields must be ignored");
    assert_eq!(response.result, json!(["a"]));
}

#[test]
fn test_zero_value_envelope_is_constructible() {
    let response = RpcResponse::default();

    assert!(!response.is_err());
    assert!(response.result.is_null());
    assert_eq!(response.id, 0);
}

// =============================================================================
// Test 4: error object shape
// =============================================================================

#[test]
fn test_error_object_data_surfaces_in_display() {
    let json_str = r#"{
        "jsonrpc": "2.0",
        "error": {"code": -32602, "message": "Invalid params", "data": "Login name or password is incorrect."},
        "id": 0
    }"#;

    let response = RpcResponse::decode(json_str.as_bytes()).unwrap();
    assert_eq!(
        response.error.to_string(),
        "Login name or password is incorrect.",
        "the data string is the primary display text"
    );
}

#[test]
fn test_error_object_with_missing_data_parses() {
    let json_str = r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"Internal error"},"id":0}"#;
    let response = RpcResponse::decode(json_str.as_bytes()).unwrap();

    assert!(response.is_err());
    assert_eq!(response.error.code, -32603);
    assert!(response.error.data.is_empty());
}
