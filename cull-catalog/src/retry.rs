use std::time::Duration;

use cull_core::errors::CatalogError;

/// Run `op` with bounded retry and linear backoff.
///
/// Only transport-level failures are retried; an HTTP status or decode
/// failure is deterministic and returned immediately.
pub fn with_retry<T>(
    what: &str,
    attempts: u32,
    base_delay: Duration,
    op: impl Fn() -> Result<T, CatalogError>,
) -> Result<T, CatalogError> {
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err @ CatalogError::Transport { .. }) if attempt < attempts => {
                tracing::warn!(
                    what,
                    attempt,
                    attempts,
                    error = %err,
                    "catalog call failed, retrying"
                );
                std::thread::sleep(base_delay * attempt);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn transport() -> CatalogError {
        CatalogError::Transport {
            url: "http://localhost:7878".to_string(),
            reason: "connection refused".to_string(),
        }
    }

    #[test]
    fn recovers_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = with_retry("list", 3, Duration::from_millis(1), || {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(transport())
            } else {
                Ok(41)
            }
        });
        assert_eq!(result.unwrap(), 41);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn gives_up_after_the_last_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retry("list", 3, Duration::from_millis(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(transport())
        });
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn status_failures_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retry("list", 3, Duration::from_millis(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CatalogError::Status {
                url: "http://localhost:7878/api/v3/movie".to_string(),
                status: 401,
            })
        });
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
