use super::*;
use crate::storage::MemoryStorage;
use serde_json::json;

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("http://h/api", "/auth/me"), "http://h/api/auth/me");
    assert_eq!(endpoint_url("http://h/api/", "auth/me"), "http://h/api/auth/me");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn message_reads_body_message() {
    let err = ApiError::Status { status: 401, body: json!({ "message": "Invalid credentials" }) };
    assert_eq!(err.message(), Some("Invalid credentials"));
    assert_eq!(err.status(), Some(401));
}

#[test]
fn message_absent_for_empty_or_missing_field() {
    let empty = ApiError::Status { status: 500, body: json!({ "message": "" }) };
    assert_eq!(empty.message(), None);
    let null = ApiError::Status { status: 502, body: Value::Null };
    assert_eq!(null.message(), None);
    assert_eq!(ApiError::Timeout.message(), None);
    assert_eq!(ApiError::Request("boom".into()).status(), None);
}

#[test]
fn decode_body_empty_is_null() {
    let value: Value = decode_body(b"").unwrap();
    assert_eq!(value, Value::Null);
}

#[test]
fn decode_body_bad_json_is_parse_error() {
    let err = decode_body::<Value>(b"{oops").unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[test]
fn transport_trims_base_url() {
    let config = ClientConfig { base_url: "http://h:1/api/".into(), ..ClientConfig::default() };
    let transport = HttpTransport::new(&config, Arc::new(MemoryStorage::new())).unwrap();
    assert_eq!(transport.base_url(), "http://h:1/api");
    assert_eq!(transport.url("/auth/login"), "http://h:1/api/auth/login");
}

#[test]
fn bearer_token_reads_storage() {
    let storage = Arc::new(MemoryStorage::with_token("abc123"));
    let transport = HttpTransport::new(&ClientConfig::default(), storage.clone()).unwrap();
    assert_eq!(transport.bearer_token().as_deref(), Some("abc123"));

    storage.remove(TOKEN_KEY).unwrap();
    assert_eq!(transport.bearer_token(), None);
}

#[test]
fn bearer_token_ignores_empty_value() {
    let storage = Arc::new(MemoryStorage::with_token(""));
    let transport = HttpTransport::new(&ClientConfig::default(), storage).unwrap();
    assert_eq!(transport.bearer_token(), None);
}
