use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Used when no default external-call URL is configured.
pub const PLACEHOLDER_EXTERNAL_URL: &str =
    "https://u28w6vrktk.execute-api.us-east-1.amazonaws.com/dev/?key1=hoge&key2=huga&key3=hge";

/// Shown in the cURL snippet when no API URL is configured.
pub const PLACEHOLDER_API_URL: &str = "https://your-api.example.com/dev/hello";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub auth: AuthConfig,

    /// Target of the generated cURL snippet.
    pub api_url: Option<String>,

    /// Initial value of the external-call URL field.
    pub external_api_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub user_pool_id: Option<String>,
    pub user_pool_client_id: Option<String>,
    pub login_with: LoginWith,

    /// Overrides the regional identity endpoint (local emulators, tests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginWith {
    pub email: bool,
    pub phone: bool,
    pub username: bool,
}

impl Default for LoginWith {
    fn default() -> Self {
        Self {
            email: true,
            phone: false,
            username: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None, None, None, None, None)
    }
}

impl AppConfig {
    pub fn new(
        user_pool_id: Option<String>,
        user_pool_client_id: Option<String>,
        api_url: Option<String>,
        external_api_url: Option<String>,
        endpoint: Option<String>,
    ) -> Self {
        Self {
            auth: AuthConfig {
                user_pool_id: non_empty(user_pool_id),
                user_pool_client_id: non_empty(user_pool_client_id),
                login_with: LoginWith::default(),
                endpoint: non_empty(endpoint),
            },
            api_url: non_empty(api_url),
            external_api_url: non_empty(external_api_url)
                .unwrap_or_else(|| PLACEHOLDER_EXTERNAL_URL.to_string()),
        }
    }

    pub fn api_url_or_placeholder(&self) -> &str {
        self.api_url.as_deref().unwrap_or(PLACEHOLDER_API_URL)
    }
}

impl AuthConfig {
    pub fn require_pool_id(&self) -> Result<&str> {
        self.user_pool_id
            .as_deref()
            .context("no user pool id configured (pass --user-pool-id or set COG_USER_POOL_ID)")
    }

    pub fn require_client_id(&self) -> Result<&str> {
        self.user_pool_client_id.as_deref().context(
            "no user pool client id configured (pass --client-id or set COG_USER_POOL_CLIENT_ID)",
        )
    }

    /// Region prefix of a pool id such as `us-east-1_AbCdEf`.
    pub fn region(&self) -> Option<&str> {
        let pool = self.user_pool_id.as_deref()?;
        let (region, rest) = pool.split_once('_')?;
        if region.is_empty() || rest.is_empty() {
            return None;
        }
        Some(region)
    }

    pub fn endpoint_url(&self) -> Result<String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let pool = self.require_pool_id()?;
        let region = self.region().with_context(|| {
            format!(
                "cannot derive region from user pool id {:?} (expected <region>_<id>)",
                pool
            )
        })?;
        Ok(format!("https://cognito-idp.{}.amazonaws.com/", region))
    }

    /// JSON shown in the auth settings view. Endpoint overrides are omitted.
    pub fn effective_json(&self) -> serde_json::Value {
        serde_json::json!({
            "userPoolId": self.user_pool_id,
            "userPoolClientId": self.user_pool_client_id,
            "loginWith": self.login_with,
        })
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
