use super::*;

#[test]
fn missing_fields_take_defaults() {
    let cfg: IonConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.auth_cfg, DEFAULT_AUTH_CFG);
    assert!(cfg.credentials.is_empty());
    assert_eq!(cfg.timeout(), None);
}

#[test]
fn load_reads_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ion.json");
    std::fs::write(
        &path,
        r#"{"base_url": "http://localhost:9000", "auth_cfg": "abc1234",
            "timeout_secs": 7, "credentials": {"abc1234": "tok"}}"#,
    )
    .unwrap();

    let cfg = IonConfig::load(&path).unwrap();
    assert_eq!(cfg.base_url, "http://localhost:9000");
    assert_eq!(cfg.timeout(), Some(Duration::from_secs(7)));
    assert_eq!(cfg.credentials.get("abc1234").map(String::as_str), Some("tok"));
}

#[test]
fn load_reports_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ion.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = IonConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("parse config"));
}

#[test]
fn overrides_replace_url_and_store_token_under_auth_cfg() {
    let mut cfg = IonConfig {
        auth_cfg: "mine".to_string(),
        ..IonConfig::default()
    };
    cfg.apply_overrides(
        Some(" http://127.0.0.1:8080/ ".to_string()),
        Some(" tok ".to_string()),
    );
    assert_eq!(cfg.base_url, "http://127.0.0.1:8080");
    assert_eq!(cfg.credentials.get("mine").map(String::as_str), Some("tok"));
}

#[test]
fn blank_overrides_are_ignored() {
    let mut cfg = IonConfig::default();
    cfg.apply_overrides(Some("  ".to_string()), Some(String::new()));
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert!(cfg.credentials.is_empty());
}
