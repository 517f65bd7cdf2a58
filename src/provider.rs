use anyhow::{Context, Result};

use crate::model::{AuthConfig, AuthSession, FetchOptions, SessionTokens};

mod events;
pub use self::events::{AuthEvent, log_auth_event};

mod http_client;

mod types;
use self::types::*;

mod cognito;

/// Client side of the hosted identity service.
///
/// Implementations hold tokens in memory only.
pub trait SessionProvider: Send {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<()>;

    /// Cached tokens unless a refresh is forced or the access token expired.
    fn fetch_session(&mut self, opts: FetchOptions) -> Result<AuthSession>;

    fn sign_out(&mut self);
}

pub struct CognitoProvider {
    config: AuthConfig,
    endpoint: String,
    client: reqwest::blocking::Client,
    state: Option<SignedIn>,
}

#[derive(Clone, Debug)]
struct SignedIn {
    tokens: SessionTokens,
    refresh_token: Option<String>,
}

impl CognitoProvider {
    pub fn new(config: AuthConfig) -> Result<Self> {
        config.require_client_id()?;
        let endpoint = config.endpoint_url()?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("session-inspector/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            config,
            endpoint,
            client,
            state: None,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.is_some()
    }
}

/// Rejects identifiers the configured login methods do not allow.
pub fn check_login_identifier(config: &AuthConfig, identifier: &str) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        anyhow::bail!("email is required");
    }
    let lw = config.login_with;
    let looks_like_email = identifier
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
    if lw.email && !lw.phone && !lw.username && !looks_like_email {
        anyhow::bail!("sign-in is restricted to email addresses (got {:?})", identifier);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/provider/login_tests.rs"]
mod tests;
