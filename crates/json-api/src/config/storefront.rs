//! Storefront Config

use clap::Args;

/// Storefront notification settings.
#[derive(Debug, Args)]
pub struct StorefrontSettings {
    /// Storefront base URL
    #[arg(long, env = "STOREFRONT_URL")]
    pub storefront_url: String,

    /// Bearer token for the storefront webhooks
    #[arg(long, env = "STOREFRONT_TOKEN", hide_env_values = true)]
    pub storefront_token: String,

    /// Storefront request timeout in seconds
    #[arg(long, env = "STOREFRONT_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub storefront_timeout_seconds: u64,
}
