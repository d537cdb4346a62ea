use std::time::Duration;

use clap::Args;
use showroom_app::erp::{ErpConfig, OdooClient};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// ERP base URL
    #[arg(long, env = "ERP_URL")]
    url: String,

    /// ERP database name
    #[arg(long, env = "ERP_DATABASE")]
    database: String,

    #[arg(long, env = "ERP_USERNAME")]
    username: String,

    #[arg(long, env = "ERP_PASSWORD", hide_env_values = true)]
    password: String,

    /// Request timeout in seconds
    #[arg(long, env = "ERP_TIMEOUT_SECONDS", default_value_t = 30)]
    timeout_seconds: u64,
}

pub(crate) async fn run(args: LoginArgs) -> Result<(), String> {
    if args.username.trim().is_empty() {
        return Err("username cannot be empty".to_string());
    }

    let client = OdooClient::login(ErpConfig {
        url: args.url,
        database: args.database,
        username: args.username,
        password: args.password,
        timeout: Duration::from_secs(args.timeout_seconds),
    })
    .await
    .map_err(|error| format!("failed to log in to the ERP: {error}"))?;

    println!("uid: {}", client.uid());

    Ok(())
}
