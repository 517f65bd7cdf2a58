use anyhow::{Context, Result};

/// One manually triggered GET against an arbitrary URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExternalCall {
    pub url: String,
    pub bearer: String,
}

impl ExternalCall {
    pub fn new(url: impl Into<String>, bearer: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            bearer: bearer.into(),
        }
    }

    /// `Authorization` value, or `None` when the token field is blank.
    pub fn authorization(&self) -> Option<String> {
        let token = self.bearer.trim();
        (!token.is_empty()).then(|| format!("Bearer {}", token))
    }

    /// Never fails: transport errors come back as an `ERROR:` line.
    pub fn run(&self, client: &reqwest::blocking::Client) -> String {
        match self.send(client) {
            Ok((status, body)) => render_response(status, &body),
            Err(err) => render_error(&err),
        }
    }

    fn send(&self, client: &reqwest::blocking::Client) -> Result<(reqwest::StatusCode, String)> {
        let mut req = client.get(self.url.trim());
        if let Some(auth) = self.authorization() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        tracing::debug!(url = %self.url, bearer = self.authorization().is_some(), "external call");

        let resp = req.send().context("send request")?;
        let status = resp.status();
        let body = resp.text().context("read response body")?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "external call finished");
        Ok((status, body))
    }
}

pub fn build_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("session-inspector/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("build reqwest client")
}

pub fn status_line(status: reqwest::StatusCode) -> String {
    format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
    .trim_end()
    .to_string()
}

/// Status line, then the body pretty-printed when it is JSON.
pub fn render_response(status: reqwest::StatusCode, body: &str) -> String {
    let body = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(v) => serde_json::to_string_pretty(&v).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    };
    format!("{}\n{}", status_line(status), body)
}

pub fn render_error(err: &anyhow::Error) -> String {
    format!("ERROR: {:#}", err)
}

#[cfg(test)]
#[path = "tests/external_call_tests.rs"]
mod tests;
