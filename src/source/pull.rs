use async_trait::async_trait;

/// One step of the pull protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulled<T> {
    /// The source produced another element
    Item(T),
    /// The source is exhausted
    Done,
}

impl<T> Pulled<T> {
    /// Whether this step ended the sequence
    pub fn is_done(&self) -> bool {
        matches!(self, Pulled::Done)
    }
}

/// Pull-based element source feeding a [`map`](crate::engine::map) call
///
/// Producing an element may suspend (asynchronous sources) and may fail.
/// Implementations must keep returning `Done` once the underlying sequence
/// is exhausted; the driver additionally stops pulling after the first
/// `Done` it observes.
///
/// The driver races `pull` against in-flight transforms, so a `pull`
/// future may be dropped before completion and a fresh one issued later.
/// Implementations must not consume an element before their final
/// suspension point; the provided adapters satisfy this.
#[async_trait]
pub trait PullSource: Send {
    type Item: Send;
    type Error: Send;

    /// Produce the next element, or `Done` once the sequence is exhausted
    async fn pull(&mut self) -> Result<Pulled<Self::Item>, Self::Error>;
}
