/// Maximum number of transform invocations allowed in flight at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    /// At most this many elements are processed at the same time
    ///
    /// Must be at least 1; a limit of 0 is rejected before any work starts.
    Limit(usize),

    /// No ceiling; the window grows as fast as the source produces
    Unbounded,
}

impl Default for Concurrency {
    fn default() -> Self {
        Concurrency::Unbounded
    }
}

impl From<usize> for Concurrency {
    fn from(limit: usize) -> Self {
        Concurrency::Limit(limit)
    }
}

/// Options for a single [`map`](crate::engine::map) call
///
/// # Example
/// ```rust,ignore
/// // Process at most 4 elements at a time, collecting every failure
/// let options = MapOptions::new()
///     .with_concurrency(4)
///     .with_stop_on_error(false);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MapOptions {
    /// Concurrency window (defaults to unbounded)
    pub concurrency: Concurrency,

    /// Reject on the first observed failure (default) instead of running
    /// everything and reporting all failures together
    pub stop_on_error: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            concurrency: Concurrency::Unbounded,
            stop_on_error: true,
        }
    }
}

impl MapOptions {
    /// Create options with the defaults (unbounded window, stop on error)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the concurrency window
    pub fn with_concurrency(mut self, concurrency: impl Into<Concurrency>) -> Self {
        self.concurrency = concurrency.into();
        self
    }

    /// Choose between failing fast (true) and collecting all failures (false)
    pub fn with_stop_on_error(mut self, enabled: bool) -> Self {
        self.stop_on_error = enabled;
        self
    }
}
