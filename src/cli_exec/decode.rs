use std::io::Read;

use session_inspector::session::{countdown, expires_at_display, now_unix_ms};
use session_inspector::token::{self, Inspection};

use super::*;
use crate::cli_commands::session::DecodeArgs;

pub(super) fn handle_decode_command(args: DecodeArgs) -> Result<()> {
    let raw = match args.token {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read token from stdin")?;
            buf
        }
    };

    let Inspection::Decoded(parts) = token::inspect(&raw) else {
        anyhow::bail!("malformed token (expected base64url JSON header and payload segments)");
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&parts).context("serialize decoded token")?
        );
        return Ok(());
    }

    println!("header:");
    println!("{}", token::pretty_json(Some(&parts.header)));
    println!("claims:");
    println!("{}", token::pretty_json(Some(&parts.payload)));
    if let Some(exp) = token::expiry(&parts.payload) {
        let at = expires_at_display(exp).unwrap_or_else(|| exp.to_string());
        println!("expires: {} (remaining {})", at, countdown(exp, now_unix_ms()));
    }
    Ok(())
}
