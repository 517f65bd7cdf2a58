use clap::Args;

use session_inspector::model::AppConfig;

/// Identity and endpoint settings shared by every command.
#[derive(Args, Debug)]
pub(crate) struct ConfigArgs {
    /// User pool id, e.g. us-east-1_AbCdEf
    #[arg(long, env = "COG_USER_POOL_ID", global = true)]
    pub(crate) user_pool_id: Option<String>,
    /// User pool app client id
    #[arg(long = "client-id", env = "COG_USER_POOL_CLIENT_ID", global = true)]
    pub(crate) user_pool_client_id: Option<String>,
    /// API URL used in the generated cURL command
    #[arg(long, env = "API_URL", global = true)]
    pub(crate) api_url: Option<String>,
    /// Default URL for external calls
    #[arg(long, env = "EXTERNAL_API_URL", global = true)]
    pub(crate) external_url: Option<String>,
    /// Identity endpoint override (local emulators)
    #[arg(long, env = "COG_ENDPOINT", global = true)]
    pub(crate) idp_endpoint: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn into_config(self) -> AppConfig {
        AppConfig::new(
            self.user_pool_id,
            self.user_pool_client_id,
            self.api_url,
            self.external_url,
            self.idp_endpoint,
        )
    }
}

#[derive(Args)]
pub(crate) struct ShowConfigArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
