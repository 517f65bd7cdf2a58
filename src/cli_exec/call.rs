use session_inspector::external_call::{self, ExternalCall};

use super::*;
use crate::cli_commands::session::CallArgs;

pub(super) fn handle_call_command(args: CallArgs, config: &AppConfig) -> Result<()> {
    let url = args
        .url
        .unwrap_or_else(|| config.external_api_url.clone());
    let client = external_call::build_client()?;
    let out = ExternalCall::new(url, args.token).run(&client);
    if out.starts_with("ERROR:") {
        // main prints the error
        anyhow::bail!(out);
    }
    println!("{}", out);
    Ok(())
}
