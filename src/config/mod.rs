use std::time::Duration;

/// Classifies a failure into a caller-defined kind.
///
/// The kind-matching retry policy ([`retry_on_failure`]) decides whether to
/// retry by testing the failing value's kind for membership in a
/// caller-supplied slice. The kinds themselves are opaque to this crate; any
/// `PartialEq` type works — an enum of failure categories, an HTTP status
/// code, a string name.
///
/// [`retry_on_failure`]: crate::synchronous::retry_on_failure
///
/// # Examples
/// ```
/// use backoff_lite::config::FailureKind;
///
/// #[derive(Debug)]
/// struct HttpError {
///     status: u16,
///     body: String,
/// }
///
/// impl FailureKind for HttpError {
///     type Kind = u16;
///
///     fn kind(&self) -> u16 {
///         self.status
///     }
/// }
/// ```
pub trait FailureKind {
    /// The caller-defined classification type.
    type Kind: PartialEq;

    /// Returns the kind of this failure.
    fn kind(&self) -> Self::Kind;
}

/// Configuration for backing off and retrying an operation.
///
/// This struct defines the parameters shared by every retry entry point: the
/// maximum number of invocations and the delay before the first retry. The
/// policy-specific inputs (failure kinds, acceptance predicates) are passed to
/// the entry points directly.
#[derive(Debug, Clone, Copy)]
pub struct BackoffConfig {
    /// The maximum number of invocations, counting the initial attempt.
    ///
    /// For example, if `attempts` is set to 3, the operation will be invoked
    /// up to 3 times (1 initial attempt + 2 retries). Must be at least 1; a
    /// value of 1 means a single invocation with no sleeping.
    pub attempts: usize,

    /// The delay before the first retry.
    ///
    /// Subsequent retries wait twice the previous delay. A zero value is
    /// treated as uninitialized: the first retry happens without sleeping and
    /// the schedule starts from the 1000µs floor on the round after it.
    pub initial_wait: Duration,
}

impl Default for BackoffConfig {
    /// Provides a default configuration for retrying operations.
    ///
    /// The default configuration includes:
    /// - `attempts`: 3 invocations (1 initial attempt + 2 retries)
    /// - `initial_wait`: 1000µs before the first retry
    fn default() -> Self {
        BackoffConfig {
            attempts: 3,
            initial_wait: Duration::from_micros(1000),
        }
    }
}

impl BackoffConfig {
    /// Creates a new `BackoffConfig` with the specified attempt budget and
    /// initial wait.
    ///
    /// # Arguments
    /// * `attempts` - The maximum number of invocations (including the initial attempt).
    /// * `initial_wait` - The duration to wait before the first retry.
    ///
    /// # Panics
    /// Panics if `attempts` is 0.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use backoff_lite::config::BackoffConfig;
    /// let config = BackoffConfig::new(5, Duration::from_micros(1000));
    /// assert_eq!(config.attempts, 5);
    /// ```
    pub fn new(attempts: usize, initial_wait: Duration) -> Self {
        assert!(attempts >= 1, "attempts must be at least 1");
        BackoffConfig {
            attempts,
            initial_wait,
        }
    }

    /// Sets the attempt budget and returns the modified `BackoffConfig`.
    ///
    /// Takes ownership of the `BackoffConfig` and returns the updated
    /// instance, enabling method chaining in a builder-like pattern.
    ///
    /// # Panics
    /// Panics if `attempts` is 0.
    ///
    /// # Examples
    /// ```
    /// use backoff_lite::config::BackoffConfig;
    /// let config = BackoffConfig::default().with_attempts(6);
    /// assert_eq!(config.attempts, 6);
    /// ```
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        assert!(attempts >= 1, "attempts must be at least 1");
        self.attempts = attempts;
        self
    }

    /// Sets the initial wait and returns the modified `BackoffConfig`.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use backoff_lite::config::BackoffConfig;
    /// let config = BackoffConfig::default().with_initial_wait(Duration::from_millis(5));
    /// assert_eq!(config.initial_wait, Duration::from_millis(5));
    /// ```
    pub fn with_initial_wait(mut self, initial_wait: Duration) -> Self {
        self.initial_wait = initial_wait;
        self
    }
}
