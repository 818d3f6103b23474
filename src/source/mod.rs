pub mod adapt;
pub mod pull;

// Re-export commonly used types
pub use adapt::{IterSource, StreamSource, TryIterSource, from_iter, from_stream, from_try_iter};
pub use pull::{PullSource, Pulled};
