//! Application configuration management.
//!
//! All values come from environment variables. Sensitive fields are marked
//! and must never be logged.

use envconfig::Envconfig;
use std::sync::LazyLock;

/// Environment variables used to configure the application.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    /// Example: "0.0.0.0", "localhost"
    #[envconfig(default = "localhost")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "8080")]
    pub web_server_port: u64,

    /// Payment gateway publishable key (SEMI-SENSITIVE)
    /// Can be exposed to the page but should be environment-specific.
    /// An empty value means the gateway is not configured and every
    /// submission is rejected before any network call.
    #[envconfig(default = "")]
    pub gateway_public_key: String,

    /// Base url of the backend that settles charges (NON-SENSITIVE)
    /// Example: "https://charges.example.com"
    pub charge_api_url: String,
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

    /// Constructs the full charge endpoint url on the checkout backend
    pub fn charge_endpoint(&self) -> String {
        format!(
            "{base}{path}",
            base = self.charge_api_url.trim_end_matches('/'),
            path = crate::consts::CHARGE_API_PATH
        )
    }
}

/// Global application configuration instance.
///
/// Validated on first access; if loading fails the application panics with
/// a descriptive error message.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
