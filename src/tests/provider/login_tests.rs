use super::*;
use crate::model::{AppConfig, LoginWith};

#[test]
fn email_only_login_rejects_usernames() {
    let cfg = AuthConfig::default();
    assert!(check_login_identifier(&cfg, "alice@example.com").is_ok());
    assert!(check_login_identifier(&cfg, "  alice@example.com ").is_ok());
    assert!(check_login_identifier(&cfg, "alice").is_err());
    assert!(check_login_identifier(&cfg, "@example.com").is_err());
    assert!(check_login_identifier(&cfg, "").is_err());
}

#[test]
fn username_login_accepts_plain_identifiers() {
    let cfg = AuthConfig {
        login_with: LoginWith {
            email: true,
            phone: false,
            username: true,
        },
        ..AuthConfig::default()
    };
    assert!(check_login_identifier(&cfg, "alice").is_ok());
}

#[test]
fn provider_requires_client_id_and_region() {
    let cfg = AppConfig::new(Some("us-east-1_abc".to_string()), None, None, None, None);
    assert!(CognitoProvider::new(cfg.auth).is_err());

    let cfg = AppConfig::new(
        Some("us-east-1_abc".to_string()),
        Some("client".to_string()),
        None,
        None,
        None,
    );
    let provider = CognitoProvider::new(cfg.auth).expect("provider");
    assert_eq!(
        provider.endpoint(),
        "https://cognito-idp.us-east-1.amazonaws.com/"
    );
    assert!(!provider.is_signed_in());
}
