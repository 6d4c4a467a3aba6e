//! Per-call deadline and cancellation.

use std::{future::Future, time::Duration};

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{config::Config, error::StoreError};

/// Bounds a single service call.
///
/// Every service operation takes one of these. When the deadline passes or the token is
/// cancelled, the in-flight store future is dropped, which aborts the query (and rolls
/// back any transaction it opened), and the call returns
/// [`StoreError::DeadlineExceeded`] or [`StoreError::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancel: Option<CancellationToken>,
}

impl CallContext {
    /// A context without deadline or cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context using the configured default store timeout, if any.
    pub fn from_config(config: &Config) -> Self {
        match config.store_timeout {
            Some(timeout) => Self::new().with_timeout(timeout),
            None => Self::new(),
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|t| t.is_cancelled())
    }

    /// Runs `fut` under this context.
    ///
    /// Cancellation is checked before the deadline, and both before the operation, so a
    /// call made with an already cancelled token never reaches the store.
    pub async fn run<T, F>(&self, op: &'static str, key: &str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;

            _ = cancelled => {
                tracing::debug!(op, key, "store call cancelled");
                Err(StoreError::Cancelled { op, key: key.to_string() })
            }
            _ = expired => {
                tracing::warn!(op, key, "store call exceeded its deadline");
                Err(StoreError::DeadlineExceeded { op, key: key.to_string() })
            }
            result = fut => result,
        }
    }
}
