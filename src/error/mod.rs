//! Error types.
//!
//! `AppError` is the top-level error used by configuration and startup. Store
//! operations exposed through the service layer return the narrower [`StoreError`],
//! which carries the operation name and key of the failing call.

pub mod config;
pub mod store;

use thiserror::Error;

pub use config::ConfigError;
pub use store::StoreError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Store operation error with operation context.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Database operation error from SeaORM outside of a store operation
    /// (connecting, running migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
