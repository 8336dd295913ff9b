//! Application configuration read from the environment.
//!
//! Every value has a sensible local default so the demo starts with no
//! environment at all; deployments override them with the variables
//! named on each field.

use anyhow::Context;
use envconfig::Envconfig;
use std::sync::OnceLock;

/// Application configuration.
#[derive(Envconfig, Clone, Debug)]
pub struct AppConfig {
    /// Environment name to deploy the app
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(from = "ENV", default = "local")]
    pub env: String,

    /// Host address for web server binding
    /// Example: "0.0.0.0", "localhost"
    #[envconfig(from = "WEB_SERVER_HOST", default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding
    #[envconfig(from = "WEB_SERVER_PORT", default = "8080")]
    pub web_server_port: u16,

    /// JSON file holding the product catalog (`{ "products": [...] }`)
    #[envconfig(from = "CATALOG_PATH", default = "web/data/products.json")]
    pub catalog_path: String,

    /// Directory served under `/images`
    #[envconfig(from = "IMAGES_DIR", default = "web/images/")]
    pub images_dir: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Gets the server URL host with port for non-production environments
    pub fn url_host(&self) -> String {
        if self.is_prod() {
            return self.web_server_host.to_string();
        }

        format!(
            "{host}:{port}",
            host = self.web_server_host,
            port = self.web_server_port
        )
    }

    /// Gets the appropriate protocol (HTTP/HTTPS) based on environment
    pub fn web_server_protocol(&self) -> String {
        if self.is_prod() {
            return "https".into();
        }
        "http".into()
    }

    /// Constructs the complete base URL for the application
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.web_server_protocol(), self.url_host())
    }
}

/// Global application configuration, set once by [init_config]
pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loads [AppConfig] from the environment into [APP_CONFIG]
pub fn init_config() -> anyhow::Result<()> {
    let app_config = AppConfig::init_from_env().context("invalid application configuration")?;

    APP_CONFIG
        .set(app_config)
        .map_err(|_| anyhow::anyhow!("application configuration was already initialized"))
}
