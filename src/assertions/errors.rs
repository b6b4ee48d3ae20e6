//! Assertions about whether a call fails, and with which message

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};
use crate::probe::{probe_once, Outcome};

/// Token in an expected message that matches any text
pub const WILDCARD: &str = "[...]";

/// Expected error message with `[...]` wildcards
///
/// Everything outside the wildcards is matched literally, and the pattern
/// only has to match at the start of the actual message.
///
/// ```
/// use edgewise::assertions::MessagePattern;
///
/// let pattern = MessagePattern::new("some msg: [...] of some method [...]").unwrap();
/// assert!(pattern.matches("some msg: 0.134s of some method zzz"));
/// assert!(!pattern.matches("other msg: 0.134s of some method zzz"));
/// ```
#[derive(Debug, Clone)]
pub struct MessagePattern {
    expected: String,
    regex: Regex,
}

impl MessagePattern {
    pub fn new(expected: &str) -> Result<Self> {
        let body = expected
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^(?s:{})", body))?;
        Ok(MessagePattern {
            expected: expected.to_string(),
            regex,
        })
    }

    pub fn matches(&self, message: &str) -> bool {
        self.regex.is_match(message)
    }

    /// The expected message as written
    pub fn as_str(&self) -> &str {
        &self.expected
    }
}

/// Fails when `target` returns `Err` or panics
pub fn assert_no_error<F, R, E>(target: F) -> Result<()>
where
    F: FnOnce() -> std::result::Result<R, E>,
    E: fmt::Display,
{
    match probe_once(target) {
        Outcome::Returned => Ok(()),
        Outcome::Raised(raised) => Err(Error::assertion(format!(
            "Expected no error, but got {}: {}",
            raised.kind, raised.message
        ))),
    }
}

/// Fails unless `target` raises an error whose message starts like `expected`
///
/// `expected` may contain [`WILDCARD`]s, see [`MessagePattern`].
pub fn assert_error_message<F, R, E>(expected: &str, target: F) -> Result<()>
where
    F: FnOnce() -> std::result::Result<R, E>,
    E: fmt::Display,
{
    let pattern = MessagePattern::new(expected)?;
    match probe_once(target) {
        Outcome::Returned => Err(Error::assertion(
            "Expected an error, but the call returned normally.",
        )),
        Outcome::Raised(raised) if pattern.matches(&raised.message) => Ok(()),
        Outcome::Raised(raised) => Err(Error::assertion(format!(
            "Expected an error with message '{}', but received '{}'",
            pattern.as_str(),
            raised.message
        ))),
    }
}
