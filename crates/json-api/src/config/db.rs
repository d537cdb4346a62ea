//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string for the purchase log
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// `PostgreSQL` connection string for the ERP stored procedures;
    /// defaults to `DATABASE_URL`
    #[arg(long, env = "ERP_DATABASE_URL", hide_env_values = true)]
    pub erp_database_url: Option<String>,
}
