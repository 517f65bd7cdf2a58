use clap::Args;

#[derive(Args)]
pub(crate) struct DecodeArgs {
    /// Token to decode (reads stdin when omitted)
    pub(crate) token: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct SessionArgs {
    /// Email registered in the user pool
    #[arg(long)]
    pub(crate) email: String,
    /// Password (prompted for when omitted)
    #[arg(long, env = "COG_PASSWORD", hide_env_values = true)]
    pub(crate) password: Option<String>,
    /// Refresh tokens after sign-in (forceRefresh)
    #[arg(long)]
    pub(crate) force: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CallArgs {
    /// URL to call (defaults to --external-url)
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Bearer token; no Authorization header is sent when empty
    #[arg(long, default_value = "")]
    pub(crate) token: String,
}
