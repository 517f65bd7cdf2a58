use session_inspector::model::FetchOptions;
use session_inspector::provider::{CognitoProvider, SessionProvider};
use session_inspector::session::{countdown, curl_snippet, expires_at_display, now_unix_ms};
use session_inspector::token;

use super::*;
use crate::cli_commands::session::SessionArgs;

pub(super) fn handle_session_command(args: SessionArgs, config: &AppConfig) -> Result<()> {
    let mut provider = CognitoProvider::new(config.auth.clone())?;

    let password = match args.password {
        Some(p) => p,
        None => prompt::read_secret("Password: ")?,
    };
    provider.sign_in(&args.email, &password)?;

    let session = provider.fetch_session(FetchOptions::forced(args.force))?;
    let tokens = session
        .tokens
        .context("identity service returned no tokens")?;
    provider.sign_out();

    let access_claims = token::claims(&tokens.access_token);
    let id_claims = tokens.id_token.as_deref().and_then(token::claims);
    let exp = access_claims.as_ref().and_then(token::expiry);
    let curl = curl_snippet(&tokens.access_token, config.api_url_or_placeholder());

    if args.json {
        let out = serde_json::json!({
            "access_token": tokens.access_token,
            "id_token": tokens.id_token,
            "access_claims": access_claims,
            "id_claims": id_claims,
            "exp": exp,
            "curl": curl,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize session json")?
        );
        return Ok(());
    }

    println!("access token:");
    println!("{}", tokens.access_token);
    println!("access token claims:");
    println!("{}", token::pretty_json(access_claims.as_ref()));
    if let Some(exp) = exp {
        let at = expires_at_display(exp).unwrap_or_else(|| exp.to_string());
        println!("expires: {} (remaining {})", at, countdown(exp, now_unix_ms()));
    }
    println!();
    println!("id token:");
    println!("{}", tokens.id_token.as_deref().unwrap_or("—"));
    println!("id token claims:");
    println!("{}", token::pretty_json(id_claims.as_ref()));
    println!();
    println!("curl:");
    println!("{}", curl);
    Ok(())
}
