//! # Edgewise
//!
//! Boundary-value assertions for unit tests.
//!
//! Describe how each argument of a function is validated, and edgewise
//! calls the function with values on, inside and outside every boundary,
//! reporting each combination that was accepted or rejected against
//! expectation:
//!
//! ```
//! use edgewise::{args, assert_validation, Max, Min, Value};
//!
//! fn check(args: &[Value]) -> Result<(), String> {
//!     let low = args[0].as_int().ok_or("low is not an integer")?;
//!     let high = args[1].as_int().ok_or("high is not an integer")?;
//!     if low < 5 {
//!         return Err(format!("low must be at least 5, got {}", low));
//!     }
//!     if high > 7 {
//!         return Err(format!("high must be at most 7, got {}", high));
//!     }
//!     Ok(())
//! }
//!
//! assert_validation(check, &args![Min::new(5), Max::new(7)]).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`descriptor`]: constraint descriptors and the values they generate
//! - [`validation`]: the driver running baseline and sweep probes
//! - [`probe`]: single guarded calls classified as returned or raised
//! - [`report`]: aggregation and rendering of mismatches
//! - [`assertions`]: error, ordering, timing and identity checks
//! - [`value`]: the dynamic argument model
//!
//! Targets raise by returning `Err` or by panicking; both are caught and
//! never escape an assertion. Diagnostics go through the `log` facade.

pub mod assertions;
pub mod descriptor;
pub mod error;
pub mod probe;
pub mod report;
pub mod validation;
pub mod value;

pub use assertions::{
    assert_error_message, assert_no_error, assert_not_sorted, assert_not_sorted_with,
    assert_performance, assert_prototype, assert_prototype_with, assert_singleton, assert_sorted,
    assert_sorted_with, MessagePattern, SortOrder,
};
pub use descriptor::{
    Blank, Boundaries, Descriptor, InList, Max, Min, Negative, NonBlank, NotInList, Pattern,
    Positive, Range,
};
pub use error::{Error, Result};
pub use probe::{Outcome, Raised};
pub use report::ValidationReport;
pub use validation::{assert_validation, Arg, ValidationConfig, ValidationStats, Validator};
pub use value::{Number, Value};

/// Build a positional argument list for a validation run
///
/// Descriptors become constraints, anything else convertible to a
/// [`Value`] becomes a literal.
///
/// ```
/// use edgewise::{args, Arg, Min, Value};
///
/// let args = args![Min::new(5), "dummy"];
/// assert_eq!(args[1], Arg::Literal(Value::from("dummy")));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::validation::Arg::from($arg)),*]
    };
}
