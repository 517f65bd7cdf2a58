use super::*;

impl CognitoProvider {
    pub(super) fn initiate_auth(
        &self,
        flow: AuthFlow,
        params: &[(&'static str, &str)],
    ) -> Result<AuthenticationResult> {
        let client_id = self.config.require_client_id()?;
        let req = InitiateAuthRequest {
            auth_flow: flow,
            client_id,
            auth_parameters: params.iter().copied().collect(),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .header("X-Amz-Target", TARGET_INITIATE_AUTH)
            .json(&req)
            .send()
            .context("initiate auth")?;

        let out: InitiateAuthResponse = self
            .ensure_ok(resp, "initiate auth")?
            .json()
            .context("parse initiate auth response")?;

        if let Some(result) = out.authentication_result {
            return Ok(result);
        }
        match out.challenge_name {
            Some(challenge) => anyhow::bail!(
                "sign-in requires challenge {} which is not supported here",
                challenge
            ),
            None => anyhow::bail!("identity service returned no authentication result"),
        }
    }

    fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        let err: ServiceError = serde_json::from_str(&body).unwrap_or_default();
        anyhow::bail!("{} failed: {}", label, err.describe(status))
    }
}
