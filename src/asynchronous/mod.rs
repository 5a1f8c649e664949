use crate::config::{BackoffConfig, FailureKind};
use crate::schedule::next_wait;
use async_std::task::sleep;
use log::{info, warn};

/// Retries a given asynchronous operation when it fails with a matching kind.
///
/// Semantics are identical to [`crate::synchronous::retry_on_failure`]: up to
/// `backoff_config.attempts` invocations, a failure retried only when its kind
/// is a member of `kinds` (empty slice matches any), the wait doubling after
/// every retry. The task suspends between attempts instead of blocking the
/// thread.
///
/// # Arguments
/// * `operation` - A closure that returns a `Future` resolving to a `Result<T, E>`.
/// * `backoff_config` - A reference to `BackoffConfig` specifying the attempt budget and initial wait.
/// * `kinds` - The failure kinds to retry on. Empty means retry on any failure.
///
/// # Returns
/// * `Ok(T)` as soon as the operation succeeds.
/// * `Err(E)` when attempts are exhausted or the failure's kind is not in `kinds` — the error value is unchanged.
///
/// # Example
/// ```rust
/// use async_std::task;
/// use backoff_lite::asynchronous::retry_on_failure;
/// use backoff_lite::config::{BackoffConfig, FailureKind};
///
/// #[derive(Debug, PartialEq)]
/// struct HttpError(u16);
///
/// impl FailureKind for HttpError {
///     type Kind = u16;
///     fn kind(&self) -> u16 {
///         self.0
///     }
/// }
///
/// async fn fetch() -> Result<&'static str, HttpError> {
///     Err(HttpError(503))
/// }
///
/// fn main() {
///     let backoff_config = BackoffConfig::default();
///     let result = task::block_on(async {
///         retry_on_failure(fetch, &backoff_config, &[503]).await
///     });
///     assert_eq!(result, Err(HttpError(503)));
/// }
/// ```
///
/// # Notes
/// - The function logs warnings for failed attempts and final failure.
pub async fn retry_on_failure<F, Fut, T, E>(
    mut operation: F,
    backoff_config: &BackoffConfig,
    kinds: &[E::Kind],
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: FailureKind,
{
    let mut attempts = 0;
    let mut wait = backoff_config.initial_wait;

    loop {
        match operation().await {
            Ok(output) => {
                info!("Operation succeeded after {} attempts", attempts + 1);
                return Ok(output);
            }
            Err(err)
                if attempts + 1 < backoff_config.attempts
                    && (kinds.is_empty() || kinds.contains(&err.kind())) =>
            {
                warn!(
                    "Operation failed (attempt {}/{}), retrying after {:?}...",
                    attempts + 1,
                    backoff_config.attempts,
                    wait
                );
                sleep(wait).await;
                wait = next_wait(wait);
            }
            Err(err) => {
                warn!(
                    "Operation failed after {} attempts, giving up.",
                    attempts + 1
                );
                return Err(err);
            }
        }

        attempts += 1;
    }
}

/// Retries a given asynchronous operation until its result satisfies a
/// condition.
///
/// Semantics are identical to [`crate::synchronous::retry_until`]: a rejected
/// result triggers a retry while attempts remain, exhaustion returns the last
/// result as-is, and any `Err` the operation produces propagates immediately
/// without being retried.
///
/// # Arguments
/// * `operation` - A closure that returns a `Future` resolving to a `Result<T, E>`.
/// * `backoff_config` - A reference to `BackoffConfig` specifying the attempt budget and initial wait.
/// * `accept` - Condition over the result. Returning `true` stops the retries and yields the result.
///
/// # Returns
/// * `Ok(T)` with the first accepted result, or with the last obtained result once attempts are exhausted.
/// * `Err(E)` if any invocation fails.
///
/// # Notes
/// - The function logs warnings for rejected results and exhaustion.
pub async fn retry_until<F, Fut, T, E, C>(
    mut operation: F,
    backoff_config: &BackoffConfig,
    accept: C,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&T) -> bool,
{
    let mut attempts = 0;
    let mut wait = backoff_config.initial_wait;

    loop {
        let result = operation().await?;

        if accept(&result) {
            info!("Result accepted after {} attempts", attempts + 1);
            return Ok(result);
        }

        if attempts + 1 < backoff_config.attempts {
            warn!(
                "Result rejected (attempt {}/{}), retrying after {:?}...",
                attempts + 1,
                backoff_config.attempts,
                wait
            );
            sleep(wait).await;
            wait = next_wait(wait);
        } else {
            warn!(
                "Result still rejected after {} attempts, returning it as-is.",
                attempts + 1
            );
            return Ok(result);
        }

        attempts += 1;
    }
}

/// Retries a given asynchronous operation when a condition over the failure
/// holds.
///
/// Same shape as [`retry_on_failure`], with the retry decision delegated
/// entirely to `should_retry` instead of a static kind set.
///
/// # Arguments
/// * `operation` - A closure that returns a `Future` resolving to a `Result<T, E>`.
/// * `backoff_config` - A reference to `BackoffConfig` specifying the attempt budget and initial wait.
/// * `should_retry` - Condition over the failure. Returning `true` retries; `false` propagates immediately.
///
/// # Returns
/// * `Ok(T)` as soon as the operation succeeds.
/// * `Err(E)` when attempts are exhausted or `should_retry` rejects the failure — the error value is unchanged.
///
/// # Example
/// ```rust
/// use async_std::task::block_on;
/// use backoff_lite::asynchronous::retry_if;
/// use backoff_lite::config::BackoffConfig;
///
/// async fn my_operation() -> Result<(), &'static str> {
///     Err("transient error")
/// }
///
/// fn main() {
///     let backoff_config = BackoffConfig::default();
///     let result = block_on(async {
///         retry_if(my_operation, &backoff_config, |err| err.contains("transient")).await
///     });
///     assert!(result.is_err()); // Still failing after 3 attempts
/// }
/// ```
///
/// # Notes
/// - The function logs warnings for failed attempts and final failure.
pub async fn retry_if<F, Fut, T, E, C>(
    mut operation: F,
    backoff_config: &BackoffConfig,
    should_retry: C,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&E) -> bool,
{
    let mut attempts = 0;
    let mut wait = backoff_config.initial_wait;

    loop {
        match operation().await {
            Ok(output) => {
                info!("Operation succeeded after {} attempts", attempts + 1);
                return Ok(output);
            }
            Err(err) if attempts + 1 < backoff_config.attempts && should_retry(&err) => {
                warn!(
                    "Operation failed (attempt {}/{}), retrying after {:?}...",
                    attempts + 1,
                    backoff_config.attempts,
                    wait
                );
                sleep(wait).await;
                wait = next_wait(wait);
            }
            Err(err) => {
                warn!(
                    "Operation failed after {} attempts, giving up.",
                    attempts + 1
                );
                return Err(err);
            }
        }

        attempts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_std::task::block_on;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    struct DummyError {
        kind: &'static str,
        message: &'static str,
    }

    impl FailureKind for DummyError {
        type Kind = &'static str;

        fn kind(&self) -> &'static str {
            self.kind
        }
    }

    // Suite for `retry_on_failure`
    mod retry_on_failure_tests {
        use super::*;

        #[test]
        fn test_success_first_try() {
            let backoff_config = BackoffConfig::new(3, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    Ok::<_, DummyError>("success")
                }
            };

            let result = block_on(retry_on_failure(operation, &backoff_config, &[]));
            assert_eq!(result, Ok("success"));
            assert_eq!(*attempts.lock().unwrap(), 1);
        }

        #[test]
        fn test_success_after_matching_failures() {
            let backoff_config = BackoffConfig::new(5, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    if *count < 4 {
                        Err(DummyError {
                            kind: "timeout",
                            message: "temporary failure",
                        })
                    } else {
                        Ok("eventual success")
                    }
                }
            };

            let result = block_on(retry_on_failure(operation, &backoff_config, &["timeout"]));
            assert_eq!(result, Ok("eventual success"));
            assert_eq!(*attempts.lock().unwrap(), 4);
        }

        #[test]
        fn test_failure_all_attempts() {
            let backoff_config = BackoffConfig::new(3, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    Err::<(), _>(DummyError {
                        kind: "timeout",
                        message: "permanent failure",
                    })
                }
            };

            let result = block_on(retry_on_failure(operation, &backoff_config, &["timeout"]));
            assert_eq!(
                result,
                Err(DummyError {
                    kind: "timeout",
                    message: "permanent failure",
                })
            );
            assert_eq!(*attempts.lock().unwrap(), backoff_config.attempts);
        }

        #[test]
        fn test_kind_mismatch_propagates_first_try() {
            let backoff_config = BackoffConfig::new(3, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    Err::<(), _>(DummyError {
                        kind: "unauthorized",
                        message: "bad credentials",
                    })
                }
            };

            let result = block_on(retry_on_failure(operation, &backoff_config, &["timeout"]));
            assert_eq!(
                result,
                Err(DummyError {
                    kind: "unauthorized",
                    message: "bad credentials",
                })
            );
            assert_eq!(*attempts.lock().unwrap(), 1);
        }
    }

    // Suite for `retry_until`
    mod retry_until_tests {
        use super::*;

        #[test]
        fn test_eventually_accepted() {
            let backoff_config = BackoffConfig::new(3, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    if *count < 3 {
                        Ok::<_, DummyError>(None)
                    } else {
                        Ok(Some(*count))
                    }
                }
            };

            let result = block_on(retry_until(operation, &backoff_config, |result| {
                result.is_some()
            }));
            assert_eq!(result, Ok(Some(3)));
            assert_eq!(*attempts.lock().unwrap(), 3);
        }

        #[test]
        fn test_exhaustion_returns_last_result() {
            let backoff_config = BackoffConfig::new(3, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    Ok::<Option<u32>, DummyError>(None)
                }
            };

            let result = block_on(retry_until(operation, &backoff_config, |result| {
                result.is_some()
            }));
            assert_eq!(result, Ok(None));
            assert_eq!(*attempts.lock().unwrap(), 3);
        }

        #[test]
        fn test_error_propagates_immediately() {
            let backoff_config = BackoffConfig::new(5, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    Err::<Option<u32>, _>(DummyError {
                        kind: "io",
                        message: "storage offline",
                    })
                }
            };

            let result = block_on(retry_until(operation, &backoff_config, |result| {
                result.is_some()
            }));
            assert_eq!(
                result,
                Err(DummyError {
                    kind: "io",
                    message: "storage offline",
                })
            );
            assert_eq!(*attempts.lock().unwrap(), 1);
        }
    }

    // Suite for `retry_if`
    mod retry_if_tests {
        use super::*;

        #[test]
        fn test_matching_failure_retries_to_exhaustion() {
            let backoff_config = BackoffConfig::new(3, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    Err::<(), u32>(3)
                }
            };

            let result = block_on(retry_if(operation, &backoff_config, |code| *code == 3));
            assert_eq!(result, Err(3));
            assert_eq!(*attempts.lock().unwrap(), 3);
        }

        #[test]
        fn test_rejected_failure_propagates_first_try() {
            let backoff_config = BackoffConfig::new(3, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    Err::<(), u32>(2)
                }
            };

            let result = block_on(retry_if(operation, &backoff_config, |code| *code == 3));
            assert_eq!(result, Err(2));
            assert_eq!(*attempts.lock().unwrap(), 1);
        }

        #[test]
        fn test_success_after_transient_failures() {
            let backoff_config = BackoffConfig::new(5, Duration::from_micros(10));

            let attempts = Arc::new(Mutex::new(0));
            let op_attempts = attempts.clone();
            let operation = move || {
                let op_attempts = op_attempts.clone();
                async move {
                    let mut count = op_attempts.lock().unwrap();
                    *count += 1;
                    if *count < 2 {
                        Err(DummyError {
                            kind: "timeout",
                            message: "transient",
                        })
                    } else {
                        Ok("eventual success")
                    }
                }
            };

            let result = block_on(retry_if(operation, &backoff_config, |err: &DummyError| {
                err.message.contains("transient")
            }));
            assert_eq!(result, Ok("eventual success"));
            assert_eq!(*attempts.lock().unwrap(), 2);
        }
    }
}
