//! # Constraint Descriptors: Declarative Argument Boundaries
//!
//! A descriptor states how one positional argument of a function is
//! validated, and derives from that statement the values worth probing:
//!
//! - a **good value**, clearly valid, used whenever another argument is the
//!   one under test;
//! - **success values**, on and just inside the boundary, which the function
//!   must accept;
//! - **failure values**, just outside the boundary, which the function must
//!   reject.
//!
//! ## Available Descriptors
//!
//! | Descriptor | Good value | Success values | Failure values |
//! |---|---|---|---|
//! | [`Min`] | `min+p` | `min`, `min+p`, `min+10p` | `min-10p`, `min-p` |
//! | [`Max`] | `max-p` | `max-10p`, `max-p`, `max` | `max+p`, `max+10p` |
//! | [`Positive`] | `1+p` | as `Min(1)` | `-p`, `0` |
//! | [`Negative`] | `-1-p` | as `Max(-1)` | `0`, `p` |
//! | [`Range`] | midpoint | `min`, (midpoint), `max` | `min-10p`, `min-p`, `max+p`, `max+10p` |
//! | [`InList`] | middle element | list, or first/middle/last | one beyond each numeric extreme |
//! | [`NotInList`] | first success value | `InList` failures | `InList` successes |
//! | [`Blank`] | `"\t"` | `""`, `" "`, `"\t"` | `None` |
//! | [`NonBlank`] | `"a"` | `"a"`, `"abc"` | `"\t"`, `""`, `" "` |
//! | [`Pattern`] | the literal | literal, doubled, extended | first character bumped |
//!
//! `p` is the precision, `1` unless set with `with_precision`, and may be an
//! integer or a float.
//!
//! ## Construction
//!
//! Invalid parameters are rejected when the descriptor is built, never in
//! the middle of a validation run: [`Range::new`] refuses `min > max`,
//! [`InList::new`] and [`NotInList::new`] refuse lists shorter than two,
//! [`Pattern::new`] refuses empty or non-literal patterns.
//!
//! Descriptors never change after construction and recompute their value
//! sets on every call.

mod list;
mod numeric;
mod text;

pub use list::{InList, NotInList};
pub use numeric::{Max, Min, Negative, Positive, Range, DEFAULT_PRECISION};
pub use text::{Blank, NonBlank, Pattern};

use crate::error::Result;
use crate::value::Value;

/// Values a descriptor generates for its argument
pub trait Boundaries {
    /// Nominal value used while other arguments are being swept
    fn good_value(&self) -> Result<Value>;

    /// Values that must not make the target fail
    fn success_values(&self) -> Vec<Value>;

    /// Values that must make the target fail
    fn failure_values(&self) -> Vec<Value>;
}

/// Any of the supported constraint descriptors
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Min(Min),
    Max(Max),
    Positive(Positive),
    Negative(Negative),
    Range(Range),
    InList(InList),
    NotInList(NotInList),
    Blank(Blank),
    NonBlank(NonBlank),
    Pattern(Pattern),
}

impl Descriptor {
    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Descriptor::Min(_) => "Min",
            Descriptor::Max(_) => "Max",
            Descriptor::Positive(_) => "Positive",
            Descriptor::Negative(_) => "Negative",
            Descriptor::Range(_) => "Range",
            Descriptor::InList(_) => "InList",
            Descriptor::NotInList(_) => "NotInList",
            Descriptor::Blank(_) => "Blank",
            Descriptor::NonBlank(_) => "NonBlank",
            Descriptor::Pattern(_) => "Pattern",
        }
    }

    fn as_boundaries(&self) -> &dyn Boundaries {
        match self {
            Descriptor::Min(d) => d,
            Descriptor::Max(d) => d,
            Descriptor::Positive(d) => d,
            Descriptor::Negative(d) => d,
            Descriptor::Range(d) => d,
            Descriptor::InList(d) => d,
            Descriptor::NotInList(d) => d,
            Descriptor::Blank(d) => d,
            Descriptor::NonBlank(d) => d,
            Descriptor::Pattern(d) => d,
        }
    }
}

impl Boundaries for Descriptor {
    fn good_value(&self) -> Result<Value> {
        self.as_boundaries().good_value()
    }

    fn success_values(&self) -> Vec<Value> {
        self.as_boundaries().success_values()
    }

    fn failure_values(&self) -> Vec<Value> {
        self.as_boundaries().failure_values()
    }
}

macro_rules! impl_from_descriptor {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Descriptor {
                fn from(d: $variant) -> Self {
                    Descriptor::$variant(d)
                }
            }
        )*
    };
}

impl_from_descriptor!(Min, Max, Positive, Negative, Range, InList, NotInList, Blank, NonBlank, Pattern);
