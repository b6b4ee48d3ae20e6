//! String descriptors: `Blank`, `NonBlank` and the literal `Pattern` booster

use super::Boundaries;
use crate::error::{Error, Result};
use crate::value::Value;

/// Characters that would turn a literal into a real regular expression
const REGEX_METACHARACTERS: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '[', ']', '{', '}', '|', '^', '$',
];

/// The argument accepts blank strings and rejects a missing value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Blank;

impl Blank {
    pub fn new() -> Self {
        Blank
    }
}

impl Boundaries for Blank {
    fn good_value(&self) -> Result<Value> {
        Ok(Value::from("\t"))
    }

    fn success_values(&self) -> Vec<Value> {
        vec![Value::from(""), Value::from(" "), Value::from("\t")]
    }

    fn failure_values(&self) -> Vec<Value> {
        vec![Value::None]
    }
}

/// The argument must contain at least one non-whitespace character
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NonBlank;

impl NonBlank {
    pub fn new() -> Self {
        NonBlank
    }
}

impl Boundaries for NonBlank {
    fn good_value(&self) -> Result<Value> {
        Ok(Value::from("a"))
    }

    fn success_values(&self) -> Vec<Value> {
        vec![Value::from("a"), Value::from("abc")]
    }

    fn failure_values(&self) -> Vec<Value> {
        vec![Value::from("\t"), Value::from(""), Value::from(" ")]
    }
}

/// The argument must start with a literal pattern
///
/// Success values are the pattern, the pattern repeated, and the pattern
/// followed by the character after its last one. Failure values bump the
/// first character so the literal no longer occurs at the start.
///
/// Quantifiers, classes and other regex syntax are not understood, so
/// [`Pattern::new`] rejects any regex metacharacter instead of generating
/// values that might not mean what the pattern says.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pattern: String,
}

impl Pattern {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        if pattern.contains(REGEX_METACHARACTERS) {
            return Err(Error::UnsupportedPattern(pattern));
        }
        Ok(Pattern { pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn mismatching(&self) -> String {
        let mut chars = self.pattern.chars();
        // non-empty by construction
        let first = chars.next().unwrap_or_default();
        let mut bumped = String::with_capacity(self.pattern.len());
        bumped.push(next_char(first));
        bumped.extend(chars);
        bumped
    }
}

impl Boundaries for Pattern {
    fn good_value(&self) -> Result<Value> {
        Ok(Value::from(self.pattern.as_str()))
    }

    fn success_values(&self) -> Vec<Value> {
        let last = self.pattern.chars().last().unwrap_or_default();
        vec![
            Value::from(self.pattern.as_str()),
            Value::from(self.pattern.repeat(2)),
            Value::from(format!("{}{}", self.pattern, next_char(last))),
        ]
    }

    fn failure_values(&self) -> Vec<Value> {
        let bumped = self.mismatching();
        vec![Value::from(bumped.as_str()), Value::from(bumped.repeat(2))]
    }
}

/// Next Unicode scalar value, skipping the surrogate gap and wrapping at the top
fn next_char(c: char) -> char {
    if c == char::MAX {
        return '\0';
    }
    char::from_u32(c as u32 + 1).unwrap_or('\u{E000}')
}
