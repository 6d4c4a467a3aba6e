use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure of a store operation.
///
/// Every variant names the operation (`op`) and the key it was called with so a
/// caller can log or report the failure without extra context. Nothing is recovered
/// locally: a store operation either returns a complete object or one of these.
///
/// A dangling id inside a role's ability or passive array is not an error; see
/// [`crate::data::resolver::Resolved`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// No row matched a single-entity lookup, or the required side of a join is missing.
    #[error("{op}: nothing found for {key}")]
    NotFound { op: &'static str, key: String },

    /// A name-based lookup matched more than one row.
    ///
    /// Names are not unique at the store level, so this is reported as a data
    /// integrity problem instead of picking one of the rows.
    #[error("{op}: {matches} rows match {key}, expected exactly one")]
    AmbiguousMatch {
        op: &'static str,
        key: String,
        matches: usize,
    },

    /// A uniqueness or foreign key constraint rejected the write.
    #[error("{op}: constraint violated for {key}: {source}")]
    ConstraintViolation {
        op: &'static str,
        key: String,
        #[source]
        source: DbErr,
    },

    /// A compare-and-swap write found a newer version than the caller expected.
    #[error("{op}: {key} changed concurrently (expected version {expected}, found {actual})")]
    Conflict {
        op: &'static str,
        key: String,
        expected: i32,
        actual: i32,
    },

    /// The store could not be reached. Callers should retry with backoff.
    #[error("{op}: store unavailable for {key}: {source}")]
    Transient {
        op: &'static str,
        key: String,
        #[source]
        source: DbErr,
    },

    /// The caller's deadline passed before the store answered.
    #[error("{op}: deadline exceeded for {key}")]
    DeadlineExceeded { op: &'static str, key: String },

    /// The caller cancelled the operation before the store answered.
    #[error("{op}: cancelled for {key}")]
    Cancelled { op: &'static str, key: String },

    /// Any other store failure.
    #[error("{op}: store error for {key}: {source}")]
    Database {
        op: &'static str,
        key: String,
        #[source]
        source: DbErr,
    },
}

impl StoreError {
    /// Classifies a SeaORM error raised while running `op` for `key`.
    pub fn from_db(op: &'static str, key: impl Into<String>, err: DbErr) -> Self {
        let key = key.into();

        if let DbErr::RecordNotFound(_) = err {
            return Self::NotFound { op, key };
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_))
            | Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                return Self::ConstraintViolation {
                    op,
                    key,
                    source: err,
                };
            }
            _ => {}
        }

        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Transient {
                op,
                key,
                source: err,
            },
            err => Self::Database {
                op,
                key,
                source: err,
            },
        }
    }

    pub fn not_found(op: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            op,
            key: key.into(),
        }
    }

    /// Whether retrying the same call later can succeed without the caller changing anything.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. } | Self::DeadlineExceeded { .. })
    }

    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            Self::NotFound { op, .. }
            | Self::AmbiguousMatch { op, .. }
            | Self::ConstraintViolation { op, .. }
            | Self::Conflict { op, .. }
            | Self::Transient { op, .. }
            | Self::DeadlineExceeded { op, .. }
            | Self::Cancelled { op, .. }
            | Self::Database { op, .. } => op,
        }
    }
}
