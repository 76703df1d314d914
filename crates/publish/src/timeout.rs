//! Timeout utilities for the build invocation

use std::future::Future;
use std::time::Duration;
use wheelhouse_errors::{Error, PublishError};

/// Execute a future with a timeout
///
/// # Errors
///
/// Returns `PublishError::BuildTimeout` when the deadline expires, or the
/// future's own error.
pub async fn with_timeout<T, F>(future: F, timeout_seconds: u64) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>>,
{
    tokio::time::timeout(Duration::from_secs(timeout_seconds), future)
        .await
        .map_err(|_| -> Error {
            PublishError::BuildTimeout {
                seconds: timeout_seconds,
            }
            .into()
        })?
}

/// Execute a future with an optional timeout
///
/// # Errors
///
/// Returns `PublishError::BuildTimeout` when a deadline is set and expires,
/// or the future's own error.
pub async fn with_optional_timeout<T, F>(future: F, timeout_seconds: Option<u64>) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>>,
{
    if let Some(timeout) = timeout_seconds {
        with_timeout(future, timeout).await
    } else {
        future.await
    }
}
