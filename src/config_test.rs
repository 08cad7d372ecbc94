use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_backend_is_set() {
    let cfg = Config::from_lookup(lookup(&[("BACKEND_URL", "http://api.internal:8000")])).unwrap();
    assert_eq!(cfg.backend_url, "http://api.internal:8000");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts {
            request_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            connect_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            upload_secs: DEFAULT_UPSTREAM_UPLOAD_TIMEOUT_SECS,
        }
    );
}

#[test]
fn overrides_are_parsed() {
    let cfg = Config::from_lookup(lookup(&[
        ("BACKEND_URL", "https://api.example.test/"),
        ("PORT", "8080"),
        ("UPSTREAM_TIMEOUT_SECS", "600"),
        ("UPSTREAM_CONNECT_TIMEOUT_SECS", " 3 "),
        ("UPSTREAM_UPLOAD_TIMEOUT_SECS", "900"),
    ]))
    .unwrap();
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 600, connect_secs: 3, upload_secs: 900 });
}

#[test]
fn missing_backend_is_an_error() {
    assert_eq!(Config::from_lookup(lookup(&[])), Err(ConfigError::Missing { var: "BACKEND_URL" }));
    assert_eq!(
        Config::from_lookup(lookup(&[("BACKEND_URL", "   ")])),
        Err(ConfigError::Missing { var: "BACKEND_URL" })
    );
}

#[test]
fn backend_without_http_scheme_is_rejected() {
    assert_eq!(
        Config::from_lookup(lookup(&[("BACKEND_URL", "api.internal:8000")])),
        Err(ConfigError::BackendScheme("api.internal:8000".to_owned()))
    );
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        Config::from_lookup(lookup(&[("BACKEND_URL", "http://x"), ("PORT", "eighty")])),
        Err(ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() })
    );
}

#[test]
fn empty_optional_values_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup(&[("BACKEND_URL", "http://x"), ("PORT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn default_upload_bound_is_longer_than_request_bound() {
    let cfg = Config::from_lookup(lookup(&[("BACKEND_URL", "http://x")])).unwrap();
    assert!(cfg.timeouts.upload_secs >= 300);
    assert!(cfg.timeouts.upload_secs > cfg.timeouts.request_secs);
}
