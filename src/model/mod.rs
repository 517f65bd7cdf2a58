mod config;
mod session;

pub use self::config::{
    AppConfig, AuthConfig, LoginWith, PLACEHOLDER_API_URL, PLACEHOLDER_EXTERNAL_URL,
};
pub use self::session::{AuthSession, FetchOptions, SessionTokens};
