use super::*;

use crate::token;

impl SessionProvider for CognitoProvider {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<()> {
        let email = email.trim();
        let attempt = check_login_identifier(&self.config, email).and_then(|()| {
            self.initiate_auth(
                AuthFlow::UserPasswordAuth,
                &[("USERNAME", email), ("PASSWORD", password)],
            )
        });

        match attempt {
            Ok(result) => {
                tracing::debug!(expires_in = ?result.expires_in, "sign-in succeeded");
                self.state = Some(SignedIn {
                    tokens: SessionTokens {
                        access_token: result.access_token,
                        id_token: result.id_token,
                    },
                    refresh_token: result.refresh_token,
                });
                log_auth_event(AuthEvent::SignedIn, None);
                Ok(())
            }
            Err(err) => {
                log_auth_event(AuthEvent::SignInFailure, Some(&format!("{:#}", err)));
                Err(err.context(format!("sign in as {}", email)))
            }
        }
    }

    fn fetch_session(&mut self, opts: FetchOptions) -> Result<AuthSession> {
        let Some(state) = &self.state else {
            return Ok(AuthSession::default());
        };

        if !opts.force_refresh && !access_token_expired(&state.tokens.access_token) {
            return Ok(AuthSession {
                tokens: Some(state.tokens.clone()),
            });
        }

        let refresh_token = state
            .refresh_token
            .clone()
            .context("no refresh token held for this session (sign in again)")?;

        match self.initiate_auth(
            AuthFlow::RefreshTokenAuth,
            &[("REFRESH_TOKEN", refresh_token.as_str())],
        ) {
            Ok(result) => {
                let tokens = SessionTokens {
                    access_token: result.access_token,
                    id_token: result.id_token.or_else(|| state.tokens.id_token.clone()),
                };
                // The refresh flow only returns a new refresh token when rotation is on.
                let refresh_token = result.refresh_token.or(Some(refresh_token));
                self.state = Some(SignedIn {
                    tokens: tokens.clone(),
                    refresh_token,
                });
                log_auth_event(AuthEvent::TokenRefresh, None);
                Ok(AuthSession {
                    tokens: Some(tokens),
                })
            }
            Err(err) => {
                log_auth_event(AuthEvent::TokenRefreshFailure, Some(&format!("{:#}", err)));
                Err(err.context("refresh session"))
            }
        }
    }

    fn sign_out(&mut self) {
        if self.state.take().is_some() {
            log_auth_event(AuthEvent::SignedOut, None);
        }
    }
}

fn access_token_expired(access_token: &str) -> bool {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    token::claims(access_token)
        .as_ref()
        .and_then(token::expiry)
        .is_some_and(|exp| exp <= now)
}
