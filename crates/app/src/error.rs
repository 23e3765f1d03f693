//! Unified error handling for the application.
//!
//! Provides a unified `AppError` type aggregating the per-module error enums.
//! Controller entry points return `Result<T, AppError>`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::orders::OrderError;
use crate::services::chef::ChefError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Order placement or lifecycle operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Chef assistant API operation failed.
    #[error("Chef error: {0}")]
    Chef(#[from] ChefError),

    /// A product id was not found in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
