//! Wire types for the identity service's JSON 1.1 API.

use std::collections::BTreeMap;

pub(super) const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub(super) const TARGET_INITIATE_AUTH: &str = "AWSCognitoIdentityProviderService.InitiateAuth";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(super) enum AuthFlow {
    UserPasswordAuth,
    RefreshTokenAuth,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct InitiateAuthRequest<'a> {
    pub(super) auth_flow: AuthFlow,
    pub(super) client_id: &'a str,
    pub(super) auth_parameters: BTreeMap<&'static str, &'a str>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct InitiateAuthResponse {
    #[serde(default)]
    pub(super) authentication_result: Option<AuthenticationResult>,
    #[serde(default)]
    pub(super) challenge_name: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct AuthenticationResult {
    pub(super) access_token: String,
    #[serde(default)]
    pub(super) id_token: Option<String>,
    #[serde(default)]
    pub(super) refresh_token: Option<String>,
    #[serde(default)]
    pub(super) expires_in: Option<i64>,
}

/// Error body returned with 4xx/5xx statuses.
#[derive(Debug, Default, serde::Deserialize)]
pub(super) struct ServiceError {
    #[serde(default, rename = "__type")]
    pub(super) kind: Option<String>,
    #[serde(default, alias = "Message")]
    pub(super) message: Option<String>,
}

impl ServiceError {
    /// `com.amazonaws...#NotAuthorizedException` -> `NotAuthorizedException`.
    pub(super) fn short_kind(&self) -> Option<&str> {
        let kind = self.kind.as_deref()?;
        Some(kind.rsplit('#').next().unwrap_or(kind))
    }

    pub(super) fn describe(&self, status: reqwest::StatusCode) -> String {
        match (self.short_kind(), self.message.as_deref()) {
            (Some(kind), Some(msg)) => format!("{}: {}", kind, msg),
            (Some(kind), None) => kind.to_string(),
            (None, Some(msg)) => msg.to_string(),
            (None, None) => format!("identity service returned {}", status),
        }
    }
}
