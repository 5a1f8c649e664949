use std::time::Duration;

/// Wait applied when the previous wait was zero.
const WAIT_FLOOR: Duration = Duration::from_micros(1000);

/// Calculates the delay to apply before the retry after the next one.
///
/// This is the sole place delay state grows. The returned duration doubles the
/// given one, except that a zero wait is treated as uninitialized and bumped
/// to the 1000µs floor instead. Called once per retry, after the current wait
/// has been slept.
pub(crate) fn next_wait(wait: Duration) -> Duration {
    if wait.is_zero() {
        return WAIT_FLOOR;
    }

    wait * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_wait_bumps_to_floor() {
        assert_eq!(next_wait(Duration::ZERO), Duration::from_micros(1000));
    }

    #[test]
    fn test_nonzero_wait_doubles() {
        assert_eq!(
            next_wait(Duration::from_micros(1000)),
            Duration::from_micros(2000)
        );
        assert_eq!(
            next_wait(Duration::from_micros(2000)),
            Duration::from_micros(4000)
        );
        assert_eq!(
            next_wait(Duration::from_micros(16000)),
            Duration::from_micros(32000)
        );
    }

    #[test]
    fn test_growth_from_default_wait() {
        // 1000, 2000, 4000, 8000, 16000 µs across five retries
        let mut wait = Duration::from_micros(1000);
        let mut total = Duration::ZERO;
        for _ in 0..5 {
            total += wait;
            wait = next_wait(wait);
        }
        assert_eq!(total, Duration::from_micros(31000));
    }
}
