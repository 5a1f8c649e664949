/// The `asynchronous` module provides retry-with-backoff entry points for
/// asynchronous contexts. The retry semantics mirror the `synchronous` module;
/// only the sleeping primitive differs.
pub mod asynchronous;

/// The `config` module provides the configuration structure shared by every
/// retry entry point, along with the `FailureKind` trait used to classify
/// failures for kind-based retry decisions.
pub mod config;

/// The `schedule` module owns the exponential delay-growth rule applied
/// between retry attempts. It is utilized by both the synchronous and
/// asynchronous entry points.
pub(crate) mod schedule;

/// The `synchronous` module provides retry-with-backoff entry points for
/// blocking operations. The calling thread sleeps between attempts.
pub mod synchronous;
