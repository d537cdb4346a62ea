//! ERP Config

use clap::Args;

/// ERP RPC settings.
#[derive(Debug, Args)]
pub struct ErpSettings {
    /// ERP base URL
    #[arg(long, env = "ERP_URL")]
    pub erp_url: String,

    /// ERP database name
    #[arg(long, env = "ERP_DATABASE")]
    pub erp_database: String,

    /// ERP user the adapter logs in as
    #[arg(long, env = "ERP_USERNAME")]
    pub erp_username: String,

    /// ERP password
    #[arg(long, env = "ERP_PASSWORD", hide_env_values = true)]
    pub erp_password: String,

    /// ERP request timeout in seconds
    #[arg(long, env = "ERP_TIMEOUT_SECONDS", default_value_t = 30_u64)]
    pub erp_timeout_seconds: u64,
}
