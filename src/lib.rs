//! Bounded-concurrency, order-preserving mapping over asynchronous sources
//!
//! `convoy` applies a fallible async transform to every element of a
//! sequence, keeps up to a configurable number of transforms in flight at
//! once, and returns the outputs in source order no matter which elements
//! finish first.
//!
//! Two failure policies are supported: fail fast on the first observed
//! failure (the default), or run everything and reject once with a
//! [`CompositeError`] listing every failure. A transform can also return
//! [`Emit::Skip`] to drop its element from the output without disturbing
//! the positions of the others.
//!
//! Sources are anything that can be normalized into the pull protocol:
//! plain iterators ([`source::from_iter`]), iterators of fallible elements
//! ([`source::from_try_iter`]), `futures` streams ([`source::from_stream`]),
//! or a custom [`PullSource`](source::PullSource) implementation.
//!
//! # Example
//! ```
//! use convoy::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let doubled = map(
//!     from_iter([1, 2, 3]),
//!     |n, _index| async move { Ok::<_, std::convert::Infallible>(Emit::Value(n * 2)) },
//!     MapOptions::new().with_concurrency(2),
//! )
//! .await
//! .unwrap();
//!
//! assert_eq!(doubled, vec![2, 4, 6]);
//! # }
//! ```

pub mod collect;
pub mod engine;
pub mod prelude;
pub mod source;

// Re-export the primary API at the crate root
pub use collect::CompositeError;
pub use engine::{Concurrency, Emit, MapError, MapOptions, map};
