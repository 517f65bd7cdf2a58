use super::*;

#[test]
fn missing_external_url_falls_back_to_placeholder() {
    let cfg = AppConfig::new(None, None, None, None, None);
    assert_eq!(cfg.external_api_url, PLACEHOLDER_EXTERNAL_URL);

    let cfg = AppConfig::new(None, None, None, Some("   ".to_string()), None);
    assert_eq!(cfg.external_api_url, PLACEHOLDER_EXTERNAL_URL);
}

#[test]
fn configured_external_url_is_kept() {
    let cfg = AppConfig::new(
        None,
        None,
        None,
        Some("https://api.test/ping".to_string()),
        None,
    );
    assert_eq!(cfg.external_api_url, "https://api.test/ping");
}

#[test]
fn api_url_placeholder_is_used_when_unset() {
    let cfg = AppConfig::new(None, None, None, None, None);
    assert_eq!(cfg.api_url_or_placeholder(), PLACEHOLDER_API_URL);

    let cfg = AppConfig::new(None, None, Some("https://x/y".to_string()), None, None);
    assert_eq!(cfg.api_url_or_placeholder(), "https://x/y");
}

#[test]
fn login_is_email_only() {
    let cfg = AppConfig::default();
    assert!(cfg.auth.login_with.email);
    assert!(!cfg.auth.login_with.phone);
    assert!(!cfg.auth.login_with.username);
}

#[test]
fn endpoint_is_derived_from_pool_region() {
    let cfg = AppConfig::new(
        Some("ap-northeast-1_AbCdEf".to_string()),
        Some("client".to_string()),
        None,
        None,
        None,
    );
    assert_eq!(cfg.auth.region(), Some("ap-northeast-1"));
    assert_eq!(
        cfg.auth.endpoint_url().expect("endpoint"),
        "https://cognito-idp.ap-northeast-1.amazonaws.com/"
    );
}

#[test]
fn endpoint_override_wins_and_bad_pool_id_errors() {
    let cfg = AppConfig::new(
        Some("nounderscore".to_string()),
        None,
        None,
        None,
        Some("http://127.0.0.1:9229/".to_string()),
    );
    assert_eq!(
        cfg.auth.endpoint_url().expect("endpoint"),
        "http://127.0.0.1:9229/"
    );

    let cfg = AppConfig::new(Some("nounderscore".to_string()), None, None, None, None);
    assert!(cfg.auth.endpoint_url().is_err());
}

#[test]
fn effective_json_reports_missing_ids_as_null() {
    let cfg = AppConfig::default();
    let v = cfg.auth.effective_json();
    assert!(v["userPoolId"].is_null());
    assert!(v["userPoolClientId"].is_null());
    assert_eq!(v["loginWith"]["email"], serde_json::json!(true));
    assert!(v.get("endpoint").is_none());
}

#[test]
fn require_ids_mention_the_env_var() {
    let cfg = AppConfig::default();
    let err = cfg.auth.require_pool_id().unwrap_err();
    assert!(format!("{:#}", err).contains("COG_USER_POOL_ID"));
    let err = cfg.auth.require_client_id().unwrap_err();
    assert!(format!("{:#}", err).contains("COG_USER_POOL_CLIENT_ID"));
}

#[test]
fn endpoint_without_pool_id_names_the_setting() {
    let cfg = AppConfig::new(None, Some("client".to_string()), None, None, None);
    let err = cfg.auth.endpoint_url().unwrap_err();
    assert!(format!("{:#}", err).contains("COG_USER_POOL_ID"));
}
