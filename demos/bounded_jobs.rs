//! Example: Bounded Fan-Out
//!
//! Simulates a batch of I/O-bound jobs with uneven latencies and runs them
//! through a window of 4, showing that the output order matches the input
//! order even though the jobs finish in a different order.
//!
//! Usage:
//!   cargo run --example bounded_jobs

use std::convert::Infallible;
use std::time::Instant;

use convoy::prelude::*;
use tokio::time::{Duration, sleep};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Jobs with deliberately uneven latencies: the first is the slowest.
    let jobs: Vec<(&str, u64)> = vec![
        ("alpha", 120),
        ("bravo", 40),
        ("charlie", 80),
        ("delta", 20),
        ("echo", 100),
        ("foxtrot", 60),
        ("golf", 30),
        ("hotel", 90),
    ];

    eprintln!("=== Bounded Fan-Out Example ===");
    eprintln!("Running {} jobs through a window of 4", jobs.len());

    let start = Instant::now();
    let results = map(
        from_iter(jobs),
        |(name, latency_ms), index| async move {
            sleep(Duration::from_millis(latency_ms)).await;
            eprintln!("  finished job {index} ({name}, {latency_ms}ms)");
            Ok::<_, Infallible>(Emit::Value(format!("{name} done")))
        },
        MapOptions::new().with_concurrency(4),
    )
    .await?;

    eprintln!("Completed in {:?}", start.elapsed());
    eprintln!();
    eprintln!("Results, in input order:");
    for result in &results {
        eprintln!("  {result}");
    }

    Ok(())
}
