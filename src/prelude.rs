//! Prelude module for convenient imports
//!
//! Import everything you need with: `use convoy::prelude::*;`

// Engine types
pub use crate::engine::{Concurrency, Emit, MapError, MapOptions, map};

// Aggregation types
pub use crate::collect::CompositeError;

// Source types
pub use crate::source::{
    IterSource, PullSource, Pulled, StreamSource, TryIterSource, from_iter, from_stream,
    from_try_iter,
};
