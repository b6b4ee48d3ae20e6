//! # Simple Assertions
//!
//! Small checks that complement boundary validation. Every assertion
//! returns `Ok(())` on success and [`Error::AssertionFailed`] with a
//! readable message otherwise, so they compose with `?` in tests returning
//! [`Result`].
//!
//! - [`assert_no_error`] and [`assert_error_message`] check how a call fails
//! - [`assert_sorted`], [`assert_not_sorted`] and their `_with` variants check
//!   list ordering against a [`SortOrder`]
//! - [`assert_performance`] bounds the wall-clock time of a call
//! - [`assert_singleton`] and [`assert_prototype`] check instance identity
//!
//! [`Error::AssertionFailed`]: crate::Error::AssertionFailed
//! [`Result`]: crate::Result

mod errors;
mod ordering;
mod patterns;
mod performance;

pub use errors::{assert_error_message, assert_no_error, MessagePattern, WILDCARD};
pub use ordering::{
    assert_not_sorted, assert_not_sorted_with, assert_sorted, assert_sorted_with, SortOrder,
};
pub use patterns::{assert_prototype, assert_prototype_with, assert_singleton};
pub use performance::assert_performance;
