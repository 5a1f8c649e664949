use async_std::task;

use crate::asynchronous::example_async_retry_on_failure;
use crate::synchronous::{example_retry_if, example_retry_on_failure, example_retry_until};

mod asynchronous;
mod synchronous;

fn sync_examples() {
    println!("Running retry-on-failure example:");
    example_retry_on_failure();

    println!("\nRunning retry-until example:");
    example_retry_until();

    println!("\nRunning retry-if example:");
    example_retry_if();
}

fn main() {
    sync_examples();

    println!("\nRunning async retry-on-failure example:");
    task::block_on(example_async_retry_on_failure());
}
