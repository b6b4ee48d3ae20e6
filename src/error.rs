//! Error types shared by every assertion in the crate.
//!
//! Assertion mismatches, descriptor construction problems and library misuse
//! are all variants of one [`Error`] enum so that a test can propagate any of
//! them with `?`. Only [`Error::AssertionFailed`] means the code under test
//! misbehaved; the other variants point at the test itself.

use crate::value::Number;

/// Type alias for results produced by this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure an assertion or descriptor can report
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The code under test did not behave as asserted.
    ///
    /// The message is the complete diagnostic, e.g. a rendered
    /// [`ValidationReport`](crate::report::ValidationReport).
    #[error("{0}")]
    AssertionFailed(String),

    /// A `Range` was built with its bounds swapped (or with a NaN bound).
    #[error("Range minimum {min} is greater than maximum {max}, change the order of the arguments.")]
    InvertedRange { min: Number, max: Number },

    /// `InList`/`NotInList` need at least two values to have boundaries.
    #[error("A list with {len} element(s) has no boundaries to test, use an exact test instead.")]
    ListTooShort { len: usize },

    /// A `Pattern` descriptor was built from an empty string.
    #[error("Pattern descriptor requires a non-empty pattern")]
    EmptyPattern,

    /// A `Pattern` descriptor was given regex syntax it cannot derive values for.
    #[error("Unsupported pattern {0:?}: only literal patterns are supported")]
    UnsupportedPattern(String),

    /// A descriptor was used in a way it cannot support.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// An expected-message pattern could not be compiled.
    #[error("Invalid message pattern: {0}")]
    MessagePattern(#[from] regex::Error),
}

impl Error {
    /// Build an assertion failure from any displayable message
    pub fn assertion(message: impl Into<String>) -> Self {
        Error::AssertionFailed(message.into())
    }

    /// True when the error reports a misbehaving subject rather than a misused assertion
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, Error::AssertionFailed(_))
    }
}
