use thiserror::Error;

use crate::collect::CompositeError;

/// Failure classes surfaced by [`map`](crate::engine::map)
///
/// A call settles with either the full ordered result or exactly one of
/// these; partial results are never handed out alongside a failure.
#[derive(Error, Debug)]
pub enum MapError<E> {
    /// The concurrency limit was not a positive integer
    #[error("invalid concurrency limit: {0}")]
    InvalidConcurrency(usize),

    /// The transform failed for one element under the fail-fast policy
    #[error("transform failed for element {index}: {error}")]
    Transform { index: usize, error: E },

    /// The source failed while producing the next element
    #[error("source failed while producing the next element: {0}")]
    Source(E),

    /// Every failure recorded under the collect-all policy
    #[error("{0}")]
    Aggregate(CompositeError<E>),
}
