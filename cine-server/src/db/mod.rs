//! Database Module
//!
//! Owns the MySQL connection pool and the stored-procedure invocation
//! layer. Business rules live in the database; nothing here issues DDL
//! or migrations.

pub mod invoker;
pub mod models;
pub mod repository;

use std::time::Duration;

use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

use crate::core::Config;
use crate::utils::AppError;

/// Database service — owns a MySQL connection pool
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: MySqlPool,
}

impl DbService {
    /// Connect to MySQL and verify connectivity with a probe query.
    ///
    /// Acquire timeout is explicit so a saturated pool fails a request
    /// instead of blocking it indefinitely.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_millis(config.db_acquire_timeout_ms))
            .connect_with(Self::connect_options(config))
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        // Startup connectivity probe
        invoker::execute(&pool, "SELECT 1", &[]).await?;
        tracing::info!(
            "Database connection established (mysql://{}:{}/{})",
            config.database_host,
            config.database_port,
            config.database_name
        );

        Ok(Self { pool })
    }

    /// Build the service without touching the network.
    ///
    /// Connections are established on first use; handlers that fail
    /// before reaching the database never need one. Used by tests.
    pub fn connect_lazy(config: &Config) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_millis(config.db_acquire_timeout_ms))
            .connect_lazy_with(Self::connect_options(config));
        Self { pool }
    }

    fn connect_options(config: &Config) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&config.database_host)
            .port(config.database_port)
            .username(&config.database_user)
            .password(&config.database_password)
            .database(&config.database_name)
    }
}
