use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
    assert_eq!(cfg.state_dir, PathBuf::from(DEFAULT_STATE_DIR));
}

#[test]
fn from_lookup_reads_all_values() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("AUTH_BASE_URL", "https://auth.example.com/api/"),
        ("AUTH_REQUEST_TIMEOUT_SECS", "5"),
        ("AUTH_CONNECT_TIMEOUT_SECS", " 2 "),
        ("AUTH_STATE_DIR", "/tmp/authflow"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://auth.example.com/api");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: 2 });
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(5));
    assert_eq!(cfg.state_dir, PathBuf::from("/tmp/authflow"));
}

#[test]
fn from_lookup_rejects_non_http_base_url() {
    let err = ClientConfig::from_lookup(lookup_from(&[("AUTH_BASE_URL", "ftp://nope")])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("AUTH_BASE_URL")));
}

#[test]
fn from_lookup_rejects_bad_timeout() {
    let err = ClientConfig::from_lookup(lookup_from(&[("AUTH_REQUEST_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("AUTH_REQUEST_TIMEOUT_SECS")));
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = ClientConfig::from_lookup(lookup_from(&[("AUTH_CONNECT_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("greater than zero")));
}

#[test]
fn from_lookup_blank_state_dir_falls_back() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("AUTH_STATE_DIR", "  ")])).unwrap();
    assert_eq!(cfg.state_dir, PathBuf::from(DEFAULT_STATE_DIR));
}

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url(" http://h:1/// ").unwrap(), "http://h:1");
}

#[test]
fn with_base_url_overrides_and_validates() {
    let cfg = ClientConfig::default().with_base_url("https://other/api/").unwrap();
    assert_eq!(cfg.base_url, "https://other/api");
    assert!(ClientConfig::default().with_base_url("other").is_err());
}
