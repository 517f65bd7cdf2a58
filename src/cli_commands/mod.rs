use clap::Subcommand;

pub(crate) mod config;
pub(crate) mod session;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Decode a token's header and claims (no signature check)
    Decode(session::DecodeArgs),

    /// Sign in and print the current session tokens
    Session(session::SessionArgs),

    /// GET a URL with an optional bearer token and print the response
    Call(session::CallArgs),

    /// Show the effective auth settings
    Config(config::ShowConfigArgs),
}
