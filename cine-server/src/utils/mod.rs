//! Utility module - shared types and helpers
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - application error taxonomy
//! - [`classify_status`] - stored-procedure status message classifier
//! - [`paginate`] / [`Page`] - in-memory pagination
//! - validation and logging helpers

pub mod error;
pub mod logger;
pub mod pagination;
pub mod result;
pub mod status;
pub mod validation;

pub use error::{AppError, ErrorBody};
pub use pagination::{Page, PaginationInfo, paginate};
pub use result::AppResult;
pub use status::classify_status;
pub use validation::ValidJson;
