use std::iter::Fuse;
use std::marker::PhantomData;
use std::pin::Pin;

use async_trait::async_trait;
use futures::stream::{self, Stream, StreamExt};

use super::pull::{PullSource, Pulled};

/// Type alias for a boxed fallible element stream
type BoxedElementStream<T, E> = Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>;

/// Normalize a synchronous, infallible sequence into a pull source
///
/// The error type is free so it can unify with the transform's error type
/// at the call site; this source never produces it.
///
/// # Example
/// ```rust,ignore
/// let source = from_iter(vec![1, 2, 3]);
/// ```
pub fn from_iter<I, E>(items: I) -> IterSource<I::IntoIter, E>
where
    I: IntoIterator,
{
    IterSource {
        items: items.into_iter().fuse(),
        _error: PhantomData,
    }
}

/// Normalize a synchronous sequence of fallible elements into a pull source
///
/// An `Err` element surfaces as a pull failure; the iterator keeps its
/// position, so a later pull can still produce the remaining elements.
pub fn from_try_iter<I, T, E>(items: I) -> TryIterSource<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    TryIterSource {
        items: items.into_iter().fuse(),
    }
}

/// Normalize an asynchronous stream of fallible elements into a pull source
///
/// The stream is boxed and fused, so pulling past the end keeps returning
/// `Done` instead of polling a spent stream.
pub fn from_stream<S, T, E>(elements: S) -> StreamSource<T, E>
where
    S: Stream<Item = Result<T, E>> + Send + 'static,
{
    StreamSource {
        elements: (Box::pin(elements) as BoxedElementStream<T, E>).fuse(),
    }
}

/// Pull source over a synchronous, infallible iterator
pub struct IterSource<I: Iterator, E> {
    items: Fuse<I>,
    _error: PhantomData<E>,
}

#[async_trait]
impl<I, E> PullSource for IterSource<I, E>
where
    I: Iterator + Send,
    I::Item: Send,
    E: Send,
{
    type Item = I::Item;
    type Error = E;

    async fn pull(&mut self) -> Result<Pulled<I::Item>, E> {
        Ok(match self.items.next() {
            Some(value) => Pulled::Item(value),
            None => Pulled::Done,
        })
    }
}

/// Pull source over a synchronous iterator of fallible elements
pub struct TryIterSource<I> {
    items: Fuse<I>,
}

#[async_trait]
impl<I, T, E> PullSource for TryIterSource<I>
where
    I: Iterator<Item = Result<T, E>> + Send,
    T: Send,
    E: Send,
{
    type Item = T;
    type Error = E;

    async fn pull(&mut self) -> Result<Pulled<T>, E> {
        match self.items.next() {
            Some(Ok(value)) => Ok(Pulled::Item(value)),
            Some(Err(error)) => Err(error),
            None => Ok(Pulled::Done),
        }
    }
}

/// Pull source over an asynchronous stream of fallible elements
pub struct StreamSource<T, E> {
    elements: stream::Fuse<BoxedElementStream<T, E>>,
}

#[async_trait]
impl<T, E> PullSource for StreamSource<T, E>
where
    T: Send,
    E: Send,
{
    type Item = T;
    type Error = E;

    async fn pull(&mut self) -> Result<Pulled<T>, E> {
        match self.elements.next().await {
            Some(Ok(value)) => Ok(Pulled::Item(value)),
            Some(Err(error)) => Err(error),
            None => Ok(Pulled::Done),
        }
    }
}
