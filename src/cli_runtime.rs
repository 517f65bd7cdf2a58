use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use session_inspector::logging::{LogSink, default_log_path, init_logging};
use session_inspector::tui::TuiRunOptions;

use crate::Commands;
use crate::cli_commands::config::ConfigArgs;

#[derive(Parser)]
#[command(name = "session-inspector")]
#[command(
    about = "Sign in to a hosted user pool, inspect session tokens, and call APIs with them",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Log file for the TUI (defaults to a file in the temp dir)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Prefill the TUI sign-in email
    #[arg(long)]
    email: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.into_config();

    match cli.command {
        None => {
            let path = cli.log_file.unwrap_or_else(default_log_path);
            init_logging(&LogSink::File(path))?;
            session_inspector::tui::run_with_options(TuiRunOptions {
                config,
                email: cli.email,
            })?;
        }
        Some(command) => {
            if cli.log_file.is_some() || cli.email.is_some() {
                anyhow::bail!(
                    "`--log-file` and `--email` are only supported when running the TUI (no subcommand)"
                );
            }
            init_logging(&LogSink::Stderr)?;
            crate::cli_exec::handle_command(command, &config)?
        }
    }

    Ok(())
}
