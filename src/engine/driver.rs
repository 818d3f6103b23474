use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use pin_project_lite::pin_project;
use tracing::{debug, warn};

use super::config::{Concurrency, MapOptions};
use super::error::MapError;
use crate::collect::CompositeError;
use crate::collect::buffer::ResultBuffer;
use crate::source::{PullSource, Pulled};

/// Outcome of one transform invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit<R> {
    /// Keep the mapped value at this element's position
    Value(R),

    /// Drop this element from the final output
    ///
    /// The element keeps its result slot until compaction, so suppression
    /// never disturbs the indexes of its neighbors.
    Skip,
}

impl<R> Emit<R> {
    /// Whether this outcome suppresses the element
    pub fn is_skip(&self) -> bool {
        matches!(self, Emit::Skip)
    }
}

impl<R> From<Option<R>> for Emit<R> {
    fn from(value: Option<R>) -> Self {
        match value {
            Some(value) => Emit::Value(value),
            None => Emit::Skip,
        }
    }
}

pin_project! {
    /// Transform future paired with the result slot it settles
    struct Tagged<F> {
        index: usize,
        #[pin]
        task: F,
    }
}

impl<F: Future> Future for Tagged<F> {
    type Output = (usize, F::Output);

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        this.task.poll(cx).map(|output| (*this.index, output))
    }
}

/// Bookkeeping owned by one `map` call
struct DriverState {
    in_flight: usize,
    next_index: usize,
    exhausted: bool,
    terminated: bool,
}

/// Apply `transform` to every element of `source` with bounded concurrency,
/// producing the outputs in source order regardless of completion order
///
/// Elements are pulled one at a time; each successful pull is assigned the
/// next sequential index and dispatched into the concurrency window. When a
/// task completes, its slot in the window frees up and the next element is
/// pulled, which is what keeps exactly `concurrency` tasks in flight rather
/// than a fixed batch.
///
/// Under the fail-fast policy (`stop_on_error = true`, the default) the
/// first observed failure settles the call: no further elements are pulled,
/// tasks already in flight run to completion, and their outcomes are
/// discarded. Under the collect-all policy every failure is recorded and
/// the call rejects once, at the end, with a [`CompositeError`] listing
/// them in completion order — unless a pull fails right after another
/// failure was recorded, which rejects immediately with that pull failure
/// (a source that failed once is assumed likely to keep failing).
///
/// A transform returns `Ok(Emit::Skip)` to drop its element from the final
/// output without disturbing the positions of the others.
///
/// # Example
/// ```rust,ignore
/// let halves = map(
///     from_iter(vec![2, 3, 4]),
///     |n, _index| async move {
///         if n % 2 == 0 {
///             Ok(Emit::Value(n / 2))
///         } else {
///             Ok(Emit::Skip)
///         }
///     },
///     MapOptions::new().with_concurrency(2),
/// )
/// .await?;
/// assert_eq!(halves, vec![1, 2]);
/// ```
pub async fn map<S, F, Fut, R>(
    mut source: S,
    mut transform: F,
    options: MapOptions,
) -> Result<Vec<R>, MapError<S::Error>>
where
    S: PullSource,
    F: FnMut(S::Item, usize) -> Fut,
    Fut: Future<Output = Result<Emit<R>, S::Error>>,
{
    let limit = match options.concurrency {
        Concurrency::Limit(0) => return Err(MapError::InvalidConcurrency(0)),
        Concurrency::Limit(limit) => limit,
        Concurrency::Unbounded => usize::MAX,
    };

    debug!(
        concurrency = ?options.concurrency,
        stop_on_error = options.stop_on_error,
        "starting map"
    );

    let mut state = DriverState {
        in_flight: 0,
        next_index: 0,
        exhausted: false,
        terminated: false,
    };
    let mut window = FuturesUnordered::new();
    let mut buffer = ResultBuffer::new();
    let mut error_log: Vec<S::Error> = Vec::new();
    let mut first_error: Option<MapError<S::Error>> = None;
    // Armed after any recorded failure; a pull failure while armed is
    // terminal even under the collect-all policy.
    let mut source_suspect = false;

    loop {
        let can_pull = !state.exhausted && !state.terminated && state.in_flight < limit;

        tokio::select! {
            pulled = source.pull(), if can_pull => match pulled {
                Ok(Pulled::Item(value)) => {
                    let index = state.next_index;
                    state.next_index += 1;
                    state.in_flight += 1;
                    source_suspect = false;
                    window.push(Tagged {
                        index,
                        task: transform(value, index),
                    });
                }
                Ok(Pulled::Done) => {
                    debug!(pulled = state.next_index, "source exhausted");
                    state.exhausted = true;
                }
                Err(error) => {
                    if options.stop_on_error || source_suspect {
                        if source_suspect {
                            warn!("source failed again while recovering, giving up");
                        } else {
                            warn!("source failed, terminating");
                        }
                        state.terminated = true;
                        first_error = Some(MapError::Source(error));
                    } else {
                        warn!("source failed, recording and continuing");
                        error_log.push(error);
                        source_suspect = true;
                    }
                }
            },
            Some((index, outcome)) = window.next() => {
                state.in_flight -= 1;
                if state.terminated {
                    // The call already settled on an error; this outcome
                    // is observed here and discarded.
                    continue;
                }
                match outcome {
                    Ok(Emit::Value(value)) => buffer.write(index, value),
                    Ok(Emit::Skip) => buffer.suppress(index),
                    Err(error) => {
                        if options.stop_on_error {
                            warn!(index, "transform failed, terminating");
                            state.terminated = true;
                            first_error = Some(MapError::Transform { index, error });
                        } else {
                            warn!(index, "transform failed, recording");
                            error_log.push(error);
                            source_suspect = true;
                        }
                    }
                }
            },
            else => break,
        }
    }

    debug_assert_eq!(state.in_flight, 0);

    if let Some(error) = first_error {
        debug!("map terminated early");
        return Err(error);
    }

    if !error_log.is_empty() {
        debug!(failures = error_log.len(), "map finished with recorded failures");
        return Err(MapError::Aggregate(CompositeError::new(error_log)));
    }

    debug!(elements = buffer.len(), "map finished");
    Ok(buffer.compact())
}
