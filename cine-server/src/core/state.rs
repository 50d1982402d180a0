//! Server state

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state - one clone per request handler.
///
/// The pool inside [`DbService`] is reference-counted, so cloning the
/// state is cheap. No other cross-request state exists; every booking
/// or report request stands alone.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// MySQL pool service
    pub db: DbService,
}

impl ServerState {
    /// Connect to the database and assemble the state.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(config).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }

    /// State with a lazily-connected pool; no database required until
    /// a handler actually reaches it. Used by tests.
    pub fn with_lazy_db(config: &Config) -> Self {
        Self {
            config: config.clone(),
            db: DbService::connect_lazy(config),
        }
    }
}
