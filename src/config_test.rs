use super::*;

#[test]
fn from_parts_defaults_when_unset() {
    let cfg = ClientConfig::from_parts(None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.storage_key, "user_detail");
}

#[test]
fn from_parts_treats_blank_as_unset() {
    let cfg = ClientConfig::from_parts(Some("   ")).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn from_parts_trims_trailing_slashes() {
    let cfg = ClientConfig::from_parts(Some("https://api.example.test//")).unwrap();
    assert_eq!(cfg.backend_url, "https://api.example.test");
}

#[test]
fn from_parts_rejects_non_http_scheme() {
    assert_eq!(
        ClientConfig::from_parts(Some("ftp://example.test")),
        Err(ConfigError::InvalidBackendUrl("ftp://example.test".to_owned()))
    );
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ClientConfig::from_parts(Some("http://localhost:3000/")).unwrap();
    assert_eq!(cfg.endpoint("/users/signin"), "http://localhost:3000/users/signin");
    assert_eq!(cfg.endpoint("users/verify"), "http://localhost:3000/users/verify");
}

#[test]
fn from_build_env_always_yields_http_url() {
    let cfg = ClientConfig::from_build_env();
    assert!(cfg.backend_url.starts_with("http"));
    assert!(!cfg.backend_url.ends_with('/'));
}
