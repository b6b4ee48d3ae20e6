//! Execution probe
//!
//! Calls a target once and classifies what happened. A target "raises" when
//! it returns `Err` or panics; either way the failure is captured here and
//! never travels further up the stack.

use std::any::{type_name, Any};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

use crate::value::Value;

/// Kind reported for targets that panicked instead of returning `Err`
pub const PANIC_KIND: &str = "panic";

/// Error captured from a target call
#[derive(Debug, Clone, PartialEq)]
pub struct Raised {
    /// Short type name of the error, or [`PANIC_KIND`]
    pub kind: String,
    pub message: String,
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Result of a single probe
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The target returned `Ok`
    Returned,
    /// The target returned `Err` or panicked
    Raised(Raised),
}

impl Outcome {
    pub fn is_raised(&self) -> bool {
        matches!(self, Outcome::Raised(_))
    }

    pub fn raised(&self) -> Option<&Raised> {
        match self {
            Outcome::Raised(raised) => Some(raised),
            Outcome::Returned => None,
        }
    }
}

/// Call `target` with a positional argument tuple
pub fn probe<F, R, E>(target: &F, args: &[Value]) -> Outcome
where
    F: Fn(&[Value]) -> Result<R, E>,
    E: fmt::Display,
{
    classify(catch_unwind(AssertUnwindSafe(|| target(args))))
}

/// Call a zero-argument target once
pub fn probe_once<F, R, E>(target: F) -> Outcome
where
    F: FnOnce() -> Result<R, E>,
    E: fmt::Display,
{
    classify(catch_unwind(AssertUnwindSafe(target)))
}

pub(crate) fn classify<R, E: fmt::Display>(result: thread::Result<Result<R, E>>) -> Outcome {
    match result {
        Ok(Ok(_)) => Outcome::Returned,
        Ok(Err(e)) => Outcome::Raised(Raised {
            kind: short_type_name(type_name::<E>()),
            message: e.to_string(),
        }),
        Err(payload) => Outcome::Raised(Raised {
            kind: PANIC_KIND.to_string(),
            message: panic_message(payload.as_ref()),
        }),
    }
}

/// Text of a panic payload as produced by `panic!`
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Strip module paths from a type name: `alloc::string::String` becomes `String`
pub(crate) fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            short.push_str(&segment);
            segment.clear();
            short.push(c);
        }
    }
    short.push_str(&segment);
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Rejected(&'static str);

    impl fmt::Display for Rejected {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    #[test]
    fn test_probe_passes_arguments_through() {
        let target = |args: &[Value]| -> Result<i64, String> {
            Ok(args[0].as_int().unwrap_or(0) + args[1].as_int().unwrap_or(0))
        };
        let outcome = probe(&target, &[Value::from(5), Value::from(6)]);
        assert_eq!(outcome, Outcome::Returned);
    }

    #[test]
    fn test_probe_captures_error_kind_and_message() {
        let target = |_: &[Value]| -> Result<(), Rejected> { Err(Rejected("ops")) };
        let outcome = probe(&target, &[]);
        assert_eq!(
            outcome.raised(),
            Some(&Raised {
                kind: "Rejected".to_string(),
                message: "ops".to_string(),
            })
        );
    }

    #[test]
    fn test_probe_catches_panics() {
        let target = |args: &[Value]| -> Result<(), String> {
            if args[0].as_int() == Some(1) {
                panic!("value was {}", 1);
            }
            Ok(())
        };
        let outcome = probe(&target, &[Value::from(1)]);
        let raised = outcome.raised().unwrap();
        assert_eq!(raised.kind, PANIC_KIND);
        assert_eq!(raised.message, "value was 1");

        assert!(!probe(&target, &[Value::from(2)]).is_raised());
    }

    #[test]
    fn test_probe_once_with_static_panic() {
        let outcome = probe_once(|| -> Result<(), String> { panic!("boom") });
        assert_eq!(outcome.raised().unwrap().message, "boom");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("alloc::string::String"), "String");
        assert_eq!(
            short_type_name("alloc::boxed::Box<dyn core::error::Error>"),
            "Box<dyn Error>"
        );
        assert_eq!(short_type_name("&str"), "&str");
    }
}
