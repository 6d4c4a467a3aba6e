//! Service layer: the operations upstream code calls.
//!
//! Services run repository calls under a [`CallContext`], open transactions where an
//! operation needs one snapshot or must apply atomically, and translate `DbErr` into
//! [`StoreError`] carrying the operation name and key.

pub mod aggregation;
pub mod context;
pub mod game;
pub mod membership;

use sea_orm::DbErr;

use crate::error::StoreError;

pub use context::CallContext;

/// Maps a repository error for `op`/`key`, logging store outages.
pub(crate) fn store_error(op: &'static str, key: &str, err: DbErr) -> StoreError {
    let err = StoreError::from_db(op, key, err);
    if let StoreError::Transient { .. } = err {
        tracing::error!(op, key, error = %err, "store unavailable");
    }
    err
}
