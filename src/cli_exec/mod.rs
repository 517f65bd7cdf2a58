use anyhow::{Context, Result};

use session_inspector::model::AppConfig;

use crate::Commands;

mod call;
mod config;
mod decode;
mod prompt;
mod session;

pub(super) fn handle_command(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Decode(args) => decode::handle_decode_command(args),
        Commands::Session(args) => session::handle_session_command(args, config),
        Commands::Call(args) => call::handle_call_command(args, config),
        Commands::Config(args) => config::handle_config_command(args, config),
    }
}
