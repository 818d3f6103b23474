//! Example: Collecting Every Failure
//!
//! Runs a batch of validations with `stop_on_error` disabled, so every
//! element is attempted and all failures come back together as one
//! composite error, ordered by completion.
//!
//! Usage:
//!   cargo run --example collect_failures

use convoy::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let entries = vec!["12", "forty", "7", "-3", "100"];

    eprintln!("=== Collect-All-Failures Example ===");
    eprintln!("Validating {} entries", entries.len());

    let outcome = map(
        from_iter(entries),
        |entry, index| async move {
            let value: i64 = entry
                .parse()
                .map_err(|_| format!("entry {index} ({entry:?}) is not a number"))?;
            if value < 0 {
                return Err(format!("entry {index} ({entry:?}) is negative"));
            }
            Ok(Emit::Value(value))
        },
        MapOptions::new().with_stop_on_error(false),
    )
    .await;

    match outcome {
        Ok(values) => eprintln!("all entries valid: {values:?}"),
        Err(MapError::Aggregate(composite)) => {
            eprintln!("{} of the entries were invalid:", composite.len());
            eprintln!("{composite}");
        }
        Err(other) => eprintln!("validation aborted: {other}"),
    }
}
