use crate::config::{BackoffConfig, FailureKind};
use crate::schedule::next_wait;
use log::{info, warn};
use std::thread::sleep;

/// Retries a given operation when it fails with a matching kind.
///
/// The operation is invoked up to `backoff_config.attempts` times. A failure
/// triggers a retry only when attempts remain and its kind is a member of
/// `kinds`; an empty `kinds` slice matches any failure. Between attempts the
/// calling thread sleeps, starting from `backoff_config.initial_wait` and
/// doubling after every retry.
///
/// # Arguments
/// * `operation` - A closure that returns a `Result<T, E>`. Arguments are whatever the closure captures; they reach every invocation unmodified.
/// * `backoff_config` - A reference to `BackoffConfig` specifying the attempt budget and initial wait.
/// * `kinds` - The failure kinds to retry on. Empty means retry on any failure.
///
/// # Returns
/// * `Ok(T)` as soon as the operation succeeds; no further attempts are consumed.
/// * `Err(E)` when attempts are exhausted or the failure's kind is not in `kinds` — the error value is the one the operation produced, unchanged.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use backoff_lite::config::{BackoffConfig, FailureKind};
/// use backoff_lite::synchronous::retry_on_failure;
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
/// let backoff_config = BackoffConfig::new(3, Duration::from_micros(1000));
/// let result: Result<&str, HttpError> = retry_on_failure(
///     || Err(HttpError(503)), // Always fails in this example
///     &backoff_config,
///     &[503],
/// );
/// assert_eq!(result, Err(HttpError(503))); // Propagated after 3 attempts
/// ```
/// # Notes
/// - The function logs warnings for failed attempts and final failure.
pub fn retry_on_failure<F, T, E>(
    mut operation: F,
    backoff_config: &BackoffConfig,
    kinds: &[E::Kind],
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: FailureKind,
{
    let mut attempts = 0;
    let mut wait = backoff_config.initial_wait;

    loop {
        match operation() {
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
                sleep(wait);
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

/// Retries a given operation until its result satisfies a condition.
///
/// The operation is invoked up to `backoff_config.attempts` times. A result
/// that does not satisfy `accept` triggers a retry while attempts remain; once
/// they are exhausted the last result is returned as-is, not an error. A
/// failing invocation is never retried by this function — any `Err` the
/// operation produces propagates to the caller immediately.
///
/// # Arguments
/// * `operation` - A closure that returns a `Result<T, E>`.
/// * `backoff_config` - A reference to `BackoffConfig` specifying the attempt budget and initial wait.
/// * `accept` - Condition over the result. Returning `true` stops the retries and yields the result.
///
/// # Returns
/// * `Ok(T)` with the first accepted result, or with the last obtained result once attempts are exhausted.
/// * `Err(E)` if any invocation fails.
///
/// # Example
/// ```
/// use backoff_lite::config::BackoffConfig;
/// use backoff_lite::synchronous::retry_until;
///
/// let mut polls = 0;
/// let result: Result<Option<u32>, &str> = retry_until(
///     || {
///         polls += 1;
///         // Simulate a lookup that finds nothing on the first call
///         Ok(if polls < 2 { None } else { Some(42) })
///     },
///     &BackoffConfig::default(),
///     |result| result.is_some(),
/// );
/// assert_eq!(result, Ok(Some(42)));
/// ```
/// # Notes
/// - The function logs warnings for rejected results and exhaustion.
pub fn retry_until<F, T, E, C>(
    mut operation: F,
    backoff_config: &BackoffConfig,
    accept: C,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    C: Fn(&T) -> bool,
{
    let mut attempts = 0;
    let mut wait = backoff_config.initial_wait;

    loop {
        let result = operation()?;

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
            sleep(wait);
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

/// Retries a given operation when a condition over the failure holds.
///
/// Same shape as [`retry_on_failure`], with the retry decision delegated
/// entirely to `should_retry` instead of a static kind set.
///
/// # Arguments
/// * `operation` - A closure that returns a `Result<T, E>`.
/// * `backoff_config` - A reference to `BackoffConfig` specifying the attempt budget and initial wait.
/// * `should_retry` - Condition over the failure. Returning `true` retries; `false` propagates immediately.
///
/// # Returns
/// * `Ok(T)` as soon as the operation succeeds.
/// * `Err(E)` when attempts are exhausted or `should_retry` rejects the failure — the error value is unchanged.
///
/// # Example
/// ```
/// use backoff_lite::config::BackoffConfig;
/// use backoff_lite::synchronous::retry_if;
///
/// let result: Result<(), String> = retry_if(
///     || Err("permanent failure".to_string()),
///     &BackoffConfig::default(),
///     |err| err.contains("transient"),
/// );
/// assert_eq!(result, Err("permanent failure".to_string())); // No retry
/// ```
/// # Notes
/// - The function logs warnings for failed attempts and final failure.
pub fn retry_if<F, T, E, C>(
    mut operation: F,
    backoff_config: &BackoffConfig,
    should_retry: C,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    C: Fn(&E) -> bool,
{
    let mut attempts = 0;
    let mut wait = backoff_config.initial_wait;

    loop {
        match operation() {
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
                sleep(wait);
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
