use super::*;
use crate::cli_commands::config::ShowConfigArgs;

pub(super) fn handle_config_command(args: ShowConfigArgs, config: &AppConfig) -> Result<()> {
    let auth = config.auth.effective_json();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&auth).context("serialize auth settings")?
        );
        return Ok(());
    }

    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "(unset)".to_string());
    println!("user_pool_id: {}", show(&config.auth.user_pool_id));
    println!("client_id: {}", show(&config.auth.user_pool_client_id));
    let lw = config.auth.login_with;
    println!(
        "login_with: email={} phone={} username={}",
        lw.email, lw.phone, lw.username
    );
    match config.auth.endpoint_url() {
        Ok(url) => println!("endpoint: {}", url),
        Err(_) => println!("endpoint: (unknown)"),
    }
    println!("api_url: {}", config.api_url_or_placeholder());
    println!("external_url: {}", config.external_api_url);
    Ok(())
}
