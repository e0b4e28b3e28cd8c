use super::*;
use serde_json::{Value, json};

#[test]
fn user_profile_reads_username_and_email() {
    let user = UserProfile::from(json!({ "username": "alice", "email": "alice@example.com", "id": 7 }));
    assert_eq!(user.username(), Some("alice"));
    assert_eq!(user.email(), Some("alice@example.com"));
}

#[test]
fn user_profile_non_string_username_is_none() {
    let user = UserProfile::from(json!({ "username": 42 }));
    assert_eq!(user.username(), None);
    assert_eq!(user.email(), None);
}

#[test]
fn user_profile_keeps_unknown_fields() {
    let raw = json!({ "username": "alice", "roles": ["x"], "nested": { "a": 1 } });
    let user: UserProfile = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

#[test]
fn user_profile_presence_requires_object() {
    assert!(UserProfile::from(json!({ "username": "alice" })).is_present());
    assert!(UserProfile::from(json!({})).is_present());
    assert!(!UserProfile::from(Value::Null).is_present());
    assert!(!UserProfile::from(json!("alice")).is_present());
}

#[test]
fn login_response_deserializes() {
    let body = json!({ "token": "abc123", "user": { "username": "alice" } });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.user.username(), Some("alice"));
}

#[test]
fn login_response_missing_token_is_error() {
    let body = json!({ "user": { "username": "alice" } });
    assert!(serde_json::from_value::<LoginResponse>(body).is_err());
}

#[test]
fn credentials_serialize_field_names() {
    let creds = Credentials { username: "alice".into(), password: "secret".into() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        json!({ "username": "alice", "password": "secret" })
    );
}
