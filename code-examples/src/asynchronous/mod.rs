use std::io::Error;
use std::io::ErrorKind;
use std::time::Duration;

use async_std::io::{ReadExt, WriteExt};
use async_std::net::TcpStream;

use backoff_lite::asynchronous::retry_if;
use backoff_lite::config::BackoffConfig;

async fn send() -> Result<String, Error> {
    let mut stream = TcpStream::connect("example.com:80").await?;
    let request = "GET / HTTP/1.1\r\nHost: example.com\r\nConnection: close\r\n\r\n";
    stream.write_all(request.as_bytes()).await?;
    stream.flush().await?;
    let mut buffer = Vec::new();
    stream.read_to_end(&mut buffer).await?;
    let response = String::from_utf8_lossy(&buffer);
    let is_success = response.starts_with("HTTP/1.1 200 OK");
    Ok(is_success.to_string())
}

// Example: async retry on connection-level failures only
pub async fn example_async_retry_on_failure() {
    let backoff_config = BackoffConfig::new(4, Duration::from_millis(100));

    let should_retry = |error: &Error| {
        matches!(
            error.kind(),
            ErrorKind::ConnectionRefused | ErrorKind::ConnectionReset | ErrorKind::TimedOut
        )
    };

    let result = retry_if(|| async { send().await }, &backoff_config, should_retry).await;

    match result {
        Ok(success) => println!("Success: {}", success),
        Err(error) => println!("Failed: {}", error),
    }
}
