use super::*;
use crate::storage::MemoryStorage;

#[test]
fn endpoint_paths_match_auth_service() {
    assert_eq!(LOGIN_PATH, "/auth/login");
    assert_eq!(REGISTER_PATH, "/auth/register");
    assert_eq!(PROFILE_PATH, "/auth/me");
}

#[tokio::test]
async fn get_profile_against_closed_port_is_request_error() {
    // Port 9 (discard) on loopback is closed in test environments.
    let config = ClientConfig { base_url: "http://127.0.0.1:9".into(), ..ClientConfig::default() };
    let api = HttpAuthApi::new(&config, Arc::new(MemoryStorage::with_token("abc123"))).unwrap();
    let err = api.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_) | ApiError::Timeout), "unexpected error: {err:?}");
}
