//! Application settings and configuration structures.

use std::fmt;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// The deployable services built from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Catalog of categories and topics
    Desc,
    /// Mock-interview booking
    Mock,
    /// Home page aggregation over the other services
    Site,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Desc => "desc",
            ServiceKind::Mock => "mock",
            ServiceKind::Site => "site",
        }
    }

    /// Port used when neither config files nor the environment set one
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Desc => 9902,
            ServiceKind::Mock => 9912,
            ServiceKind::Site => 8080,
        }
    }

    /// Whether the service owns a PostgreSQL database
    pub fn requires_database(&self) -> bool {
        matches!(self, ServiceKind::Desc | ServiceKind::Mock)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL); only the catalog and booking services use it
    pub database: Option<DatabaseSettings>,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Page of new interviews shown on the home page
    pub interviews: InterviewPageSettings,

    /// Sibling service locations used by the site
    pub services: RemoteServicesSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,

    /// Apply embedded migrations at startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    2
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_run_migrations() -> bool {
    true
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Home page interview listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InterviewPageSettings {
    /// Page index (0 is the first page)
    pub page: i64,

    /// Number of interviews on the page
    pub size: i64,
}

/// Base URLs of the services the site calls.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteServicesSettings {
    pub auth_url: String,
    pub desc_url: String,
    pub mock_url: String,
    pub notification_url: String,

    /// Per-request timeout for remote calls in seconds
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Load settings for one service from configuration files and the environment.
    ///
    /// The loading order is:
    /// 1. built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{service}.toml (service-specific values)
    /// 4. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 5. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// if a database service has no database URL, or if the interview page is invalid.
    pub fn load(service: ServiceKind) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(service.default_port()))?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("interviews.page", 0)?
            .set_default("interviews.size", 10)?
            .set_default("services.auth_url", "http://localhost:9900")?
            .set_default("services.desc_url", "http://localhost:9902")?
            .set_default("services.mock_url", "http://localhost:9912")?
            .set_default("services.notification_url", "http://localhost:9920")?
            .set_default("services.request_timeout_secs", 30)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", service)).required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validate(service))
    }

    fn validate(self, service: ServiceKind) -> Result<Self, ConfigError> {
        if service.requires_database() && self.database.is_none() {
            return Err(ConfigError::Message(format!(
                "The {} service requires a [database] section or DATABASE_URL",
                service
            )));
        }
        if self.interviews.size < 1 || self.interviews.page < 0 {
            return Err(ConfigError::Message(format!(
                "interviews.size must be positive and interviews.page non-negative (got size={}, page={})",
                self.interviews.size, self.interviews.page
            )));
        }
        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseSettings {
    /// Get the connection URL.
    pub fn connection_url(&self) -> &str {
        &self.url
    }
}
