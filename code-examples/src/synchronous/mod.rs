use std::time::Duration;

use backoff_lite::config::{BackoffConfig, FailureKind};
use backoff_lite::synchronous::{retry_if, retry_on_failure, retry_until};

#[derive(Debug)]
pub struct ServiceError {
    kind: &'static str,
    message: &'static str,
}

impl FailureKind for ServiceError {
    type Kind = &'static str;

    fn kind(&self) -> &'static str {
        self.kind
    }
}

// Example 1: Using retry_on_failure() with a kind filter
pub fn example_retry_on_failure() {
    // Retry timeouts only, up to 4 attempts
    let backoff_config = BackoffConfig::new(4, Duration::from_millis(100));

    let mut attempt_count = 0;

    let result = retry_on_failure(
        || {
            attempt_count += 1;
            println!("Attempt #{}", attempt_count);

            // Simulate an operation that times out twice before succeeding
            if attempt_count < 3 {
                Err(ServiceError {
                    kind: "timeout",
                    message: "connection timed out",
                })
            } else {
                Ok("Operation completed successfully")
            }
        },
        &backoff_config,
        &["timeout"],
    );

    match result {
        Ok(success_msg) => println!("Success: {}", success_msg),
        Err(error) => println!("Failed after retries: {}", error.message),
    }
}

// Example 2: Using retry_until() to poll for a result
pub fn example_retry_until() {
    let backoff_config = BackoffConfig::default().with_attempts(5);

    let mut poll_count = 0;

    let result: Result<Option<&str>, ServiceError> = retry_until(
        || {
            poll_count += 1;
            println!("Poll #{}", poll_count);

            // Simulate a job that is ready on the third poll
            Ok(if poll_count < 3 { None } else { Some("job done") })
        },
        &backoff_config,
        |status| status.is_some(),
    );

    match result {
        Ok(Some(status)) => println!("Ready: {}", status),
        Ok(None) => println!("Still not ready, gave up"),
        Err(error) => println!("Poll failed: {}", error.message),
    }
}

// Example 3: Using retry_if() with a custom failure condition
pub fn example_retry_if() {
    let backoff_config = BackoffConfig::new(3, Duration::from_millis(50));

    let result: Result<&str, ServiceError> = retry_if(
        || {
            Err(ServiceError {
                kind: "unauthorized",
                message: "bad credentials",
            })
        },
        &backoff_config,
        |error| error.kind == "timeout",
    );

    match result {
        Ok(success_msg) => println!("Success: {}", success_msg),
        Err(error) => println!("Failed without retrying: {}", error.message),
    }
}
