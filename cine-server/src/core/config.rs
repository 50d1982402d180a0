//! Server configuration
//!
//! Every setting can be overridden through an environment variable
//! (a `.env` file is loaded at startup):
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HTTP_PORT | 5000 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | LOG_LEVEL | info | tracing level filter |
//! | DATABASE_HOST | localhost | MySQL host |
//! | DATABASE_PORT | 3306 | MySQL port |
//! | DATABASE_NAME | cine_db | schema with the stored procedures |
//! | DATABASE_USER | app_user | MySQL user |
//! | DATABASE_PASSWORD | app_password | MySQL password |
//! | DB_MAX_CONNECTIONS | 5 | pool size |
//! | DB_ACQUIRE_TIMEOUT_MS | 5000 | pool checkout timeout |

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level filter
    pub log_level: String,

    // === Database ===
    pub database_host: String,
    pub database_port: u16,
    pub database_name: String,
    pub database_user: String,
    pub database_password: String,
    /// Connection pool size
    pub db_max_connections: u32,
    /// Pool checkout timeout (milliseconds)
    pub db_acquire_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults when a variable is unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),

            database_host: std::env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".into()),
            database_port: std::env::var("DATABASE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3306),
            database_name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "cine_db".into()),
            database_user: std::env::var("DATABASE_USER").unwrap_or_else(|_| "app_user".into()),
            database_password: std::env::var("DATABASE_PASSWORD")
                .unwrap_or_else(|_| "app_password".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            db_acquire_timeout_ms: std::env::var("DB_ACQUIRE_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
        }
    }
}
