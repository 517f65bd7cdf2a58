use serde::Serialize;

/// Access/identity token pair for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub id_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthSession {
    /// `None` when nobody is signed in.
    pub tokens: Option<SessionTokens>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub force_refresh: bool,
}

impl FetchOptions {
    pub fn forced(force_refresh: bool) -> Self {
        Self { force_refresh }
    }
}
