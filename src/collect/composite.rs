use std::error::Error as StdError;
use std::fmt;

/// Aggregate of every failure recorded during a run-to-completion map call
///
/// Failures keep the order in which they were observed, which follows task
/// completion order rather than source order. The rendered message lists
/// each failure on its own indented line, in that order; callers pattern
/// match on it, so the format is part of the contract.
#[derive(Debug)]
pub struct CompositeError<E> {
    errors: Vec<E>,
}

impl<E> CompositeError<E> {
    /// Wrap an ordered sequence of failures
    ///
    /// Callers are expected to pass at least one failure; an empty
    /// composite renders as zero failures but is never produced by the
    /// driver.
    pub fn new(errors: Vec<E>) -> Self {
        Self { errors }
    }

    /// The underlying failures, in observation order
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Consume the composite and take ownership of the failures
    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }

    /// Number of aggregated failures
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<E: fmt::Display> fmt::Display for CompositeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.errors.len() == 1 {
            "failure"
        } else {
            "failures"
        };
        write!(f, "{} {noun}:", self.errors.len())?;

        for error in &self.errors {
            // Indent every line of multi-line descriptions
            for line in error.to_string().lines() {
                write!(f, "\n    {line}")?;
            }
        }

        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> StdError for CompositeError<E> {}
