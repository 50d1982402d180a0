//! Cine Server - HTTP façade over a cinema reservation database
//!
//! # Architecture overview
//!
//! All business rules (price surcharges, seat-conflict detection,
//! per-customer booking limits, occupancy aggregates) live in MySQL
//! stored procedures. This server marshals HTTP requests into
//! procedure calls, classifies the returned status messages into error
//! categories and paginates result sets. Nothing else.
//!
//! # Module structure
//!
//! ```text
//! cine-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── api/           # routes and handlers
//! ├── services/      # classify + paginate + payload shaping
//! ├── db/            # pool, procedure invoker, models, repositories
//! └── utils/         # errors, status classifier, pagination, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult, Page, PaginationInfo};

/// Load `.env` and initialize logging. Call once at process start.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), None);

    Ok(())
}
