//! Result aggregation for validation runs
//!
//! A [`ValidationReport`] collects every probe whose outcome contradicted the
//! expectation of its descriptor and renders them as an itemised diff:
//!
//! ```text
//! Unexpected success for the combination of arguments:
//! > 1, 2, a
//! Unexpected failure for the combination of arguments:
//! > 8, 7, b - some error msg
//! ```

use std::fmt;

use crate::value::Value;

pub const UNEXPECTED_SUCCESS_HEADER: &str = "Unexpected success for the combination of arguments:";
pub const UNEXPECTED_FAILURE_HEADER: &str = "Unexpected failure for the combination of arguments:";

/// Argument tuple that raised although it was expected to succeed
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedFailure {
    pub args: Vec<Value>,
    pub message: String,
}

/// Mismatches recorded during one validation run, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    unexpected_successes: Vec<Vec<Value>>,
    unexpected_failures: Vec<UnexpectedFailure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The target returned normally for arguments that should have been rejected
    pub fn record_unexpected_success(&mut self, args: &[Value]) {
        self.unexpected_successes.push(args.to_vec());
    }

    /// The target raised `message` for arguments that should have been accepted
    pub fn record_unexpected_failure(&mut self, message: impl Into<String>, args: &[Value]) {
        self.unexpected_failures.push(UnexpectedFailure {
            args: args.to_vec(),
            message: message.into(),
        });
    }

    pub fn has_failure(&self) -> bool {
        !self.unexpected_successes.is_empty() || !self.unexpected_failures.is_empty()
    }

    pub fn unexpected_successes(&self) -> &[Vec<Value>] {
        &self.unexpected_successes
    }

    pub fn unexpected_failures(&self) -> &[UnexpectedFailure] {
        &self.unexpected_failures
    }

    /// Total number of recorded mismatches
    pub fn len(&self) -> usize {
        self.unexpected_successes.len() + self.unexpected_failures.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_failure()
    }
}

fn join(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.unexpected_successes.is_empty() {
            f.write_str(UNEXPECTED_SUCCESS_HEADER)?;
            for args in &self.unexpected_successes {
                write!(f, "\n> {}", join(args))?;
            }
        }
        if !self.unexpected_failures.is_empty() {
            if !self.unexpected_successes.is_empty() {
                f.write_str("\n")?;
            }
            f.write_str(UNEXPECTED_FAILURE_HEADER)?;
            for failure in &self.unexpected_failures {
                write!(f, "\n> {} - {}", join(&failure.args), failure.message)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<Value> {
        values
            .iter()
            .map(|v| match v.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(*v),
            })
            .collect()
    }

    #[test]
    fn test_empty_report_has_no_failure() {
        let report = ValidationReport::new();
        assert!(!report.has_failure());
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_unexpected_success_rendering() {
        let mut report = ValidationReport::new();
        report.record_unexpected_success(&args(&["1", "2", ""]));
        assert!(report.has_failure());
        assert_eq!(
            report.to_string(),
            "Unexpected success for the combination of arguments:\n> 1, 2, "
        );
    }

    #[test]
    fn test_unexpected_failure_rendering() {
        let mut report = ValidationReport::new();
        report.record_unexpected_failure("some error msg", &args(&["1", "2", ""]));
        assert!(report.has_failure());
        assert_eq!(
            report.to_string(),
            "Unexpected failure for the combination of arguments:\n> 1, 2,  - some error msg"
        );
    }

    #[test]
    fn test_mixed_rendering_groups_by_kind_in_insertion_order() {
        let mut report = ValidationReport::new();
        report.record_unexpected_success(&args(&["1", "2", "a"]));
        report.record_unexpected_failure("some error msg", &args(&["8", "7", "b"]));
        report.record_unexpected_success(&args(&["3", "4", "c"]));
        report.record_unexpected_failure("some error msg2", &args(&["5", "6", ""]));

        assert_eq!(report.len(), 4);
        assert_eq!(
            report.to_string(),
            "Unexpected success for the combination of arguments:\n\
             > 1, 2, a\n\
             > 3, 4, c\n\
             Unexpected failure for the combination of arguments:\n\
             > 8, 7, b - some error msg\n\
             > 5, 6,  - some error msg2"
        );
    }

    #[test]
    fn test_failure_with_empty_message_is_still_a_failure() {
        let mut report = ValidationReport::new();
        report.record_unexpected_failure("", &args(&["1"]));
        assert!(report.has_failure());
        assert_eq!(report.unexpected_failures()[0].message, "");
    }
}
