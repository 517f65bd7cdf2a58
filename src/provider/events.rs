#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignInFailure,
    TokenRefresh,
    TokenRefreshFailure,
    SignedOut,
}

impl AuthEvent {
    pub fn name(self) -> &'static str {
        match self {
            AuthEvent::SignedIn => "signedIn",
            AuthEvent::SignInFailure => "signIn_failure",
            AuthEvent::TokenRefresh => "tokenRefresh",
            AuthEvent::TokenRefreshFailure => "tokenRefresh_failure",
            AuthEvent::SignedOut => "signedOut",
        }
    }

    fn is_failure(self) -> bool {
        matches!(self, AuthEvent::SignInFailure | AuthEvent::TokenRefreshFailure)
    }
}

pub fn log_auth_event(event: AuthEvent, message: Option<&str>) {
    let detail = message.unwrap_or("");
    if event.is_failure() {
        tracing::warn!(target: "auth", event = event.name(), detail, "auth event");
    } else {
        tracing::info!(target: "auth", event = event.name(), detail, "auth event");
    }
}
