//! Server configuration module

use std::time::Duration;

use clap::Parser;

use showroom_app::{context::AppConfig, erp::ErpConfig, storefront::StorefrontConfig};

use crate::config::{
    db::DatabaseConfig,
    erp::ErpSettings,
    observability::{LoggingConfig, TraceExportConfig},
    server::ServerRuntimeConfig,
    storefront::StorefrontSettings,
};

pub(crate) mod db;
pub(crate) mod erp;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storefront;

/// Showroom JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "showroom-json", about = "Showroom JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export settings.
    #[command(flatten)]
    pub tracing: TraceExportConfig,

    /// Database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// ERP RPC settings.
    #[command(flatten)]
    pub erp: ErpSettings,

    /// Storefront notification settings.
    #[command(flatten)]
    pub storefront: StorefrontSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings needed to build the application context.
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database.database_url.clone(),
            erp_database_url: self.database.erp_database_url.clone(),
            erp: ErpConfig {
                url: self.erp.erp_url.clone(),
                database: self.erp.erp_database.clone(),
                username: self.erp.erp_username.clone(),
                password: self.erp.erp_password.clone(),
                timeout: Duration::from_secs(self.erp.erp_timeout_seconds),
            },
            storefront: StorefrontConfig {
                url: self.storefront.storefront_url.clone(),
                token: self.storefront.storefront_token.clone(),
                timeout: Duration::from_secs(self.storefront.storefront_timeout_seconds),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn parse(extra: &[&str]) -> Result<ServerConfig, clap::Error> {
        let mut args = vec![
            "showroom-json",
            "--database-url",
            "postgres://showroom@localhost/showroom",
            "--erp-url",
            "https://erp.example.com",
            "--erp-database",
            "showroom",
            "--erp-username",
            "adapter",
            "--erp-password",
            "secret",
            "--storefront-url",
            "https://shop.example.com/api",
            "--storefront-token",
            "token",
        ];

        args.extend_from_slice(extra);

        ServerConfig::try_parse_from(args)
    }

    #[test]
    fn app_config_carries_erp_and_storefront_settings() -> TestResult {
        let config = parse(&[
            "--erp-database-url",
            "postgres://erp@localhost/erp",
            "--erp-timeout-seconds",
            "45",
            "--storefront-timeout-seconds",
            "5",
        ])?;

        let app = config.app_config();

        assert_eq!(app.database_url, "postgres://showroom@localhost/showroom");
        assert_eq!(
            app.erp_database_url.as_deref(),
            Some("postgres://erp@localhost/erp")
        );
        assert_eq!(app.erp.username, "adapter");
        assert_eq!(app.erp.timeout, Duration::from_secs(45));
        assert_eq!(app.storefront.url, "https://shop.example.com/api");
        assert_eq!(app.storefront.timeout, Duration::from_secs(5));

        Ok(())
    }

    #[test]
    fn socket_addr_joins_host_and_port() -> TestResult {
        let config = parse(&["--host", "127.0.0.1", "--port", "9000"])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");

        Ok(())
    }
}
