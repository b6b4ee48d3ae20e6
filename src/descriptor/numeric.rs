//! Numeric boundary descriptors: `Min`, `Max`, `Positive`, `Negative` and `Range`
//!
//! Each descriptor probes one step (`precision`) and ten steps away from every
//! bound it declares. Bounds are inclusive. `Positive` and `Negative` are thin
//! wrappers that reuse the success side of `Min(1)` and `Max(-1)` and only
//! replace the failure side with values around zero.

use super::Boundaries;
use crate::error::{Error, Result};
use crate::value::{Number, Value};

/// Precision used when none is given
pub const DEFAULT_PRECISION: Number = Number::Int(1);

const TEN: Number = Number::Int(10);
const ZERO: Number = Number::Int(0);

fn values(numbers: &[Number]) -> Vec<Value> {
    numbers.iter().copied().map(Value::from).collect()
}

/// Inclusive lower bound
///
/// - success: `min`, `min + precision`, `min + 10 * precision`
/// - failure: `min - 10 * precision`, `min - precision`
#[derive(Debug, Clone, PartialEq)]
pub struct Min {
    min: Number,
    precision: Number,
}

impl Min {
    pub fn new(min: impl Into<Number>) -> Self {
        Min {
            min: min.into(),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Distance between the bound and the generated probe values
    pub fn with_precision(mut self, precision: impl Into<Number>) -> Self {
        self.precision = precision.into();
        self
    }

    pub fn min(&self) -> Number {
        self.min
    }

    pub fn precision(&self) -> Number {
        self.precision
    }

    fn good(&self) -> Number {
        self.min + self.precision
    }
}

impl Boundaries for Min {
    fn good_value(&self) -> Result<Value> {
        Ok(self.good().into())
    }

    fn success_values(&self) -> Vec<Value> {
        values(&[self.min, self.good(), self.min + TEN * self.precision])
    }

    fn failure_values(&self) -> Vec<Value> {
        values(&[self.min - TEN * self.precision, self.min - self.precision])
    }
}

/// Inclusive upper bound
///
/// - success: `max - 10 * precision`, `max - precision`, `max`
/// - failure: `max + precision`, `max + 10 * precision`
#[derive(Debug, Clone, PartialEq)]
pub struct Max {
    max: Number,
    precision: Number,
}

impl Max {
    pub fn new(max: impl Into<Number>) -> Self {
        Max {
            max: max.into(),
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: impl Into<Number>) -> Self {
        self.precision = precision.into();
        self
    }

    pub fn max(&self) -> Number {
        self.max
    }

    pub fn precision(&self) -> Number {
        self.precision
    }

    fn good(&self) -> Number {
        self.max - self.precision
    }
}

impl Boundaries for Max {
    fn good_value(&self) -> Result<Value> {
        Ok(self.good().into())
    }

    fn success_values(&self) -> Vec<Value> {
        values(&[self.max - TEN * self.precision, self.good(), self.max])
    }

    fn failure_values(&self) -> Vec<Value> {
        values(&[self.max + self.precision, self.max + TEN * self.precision])
    }
}

/// Strictly positive numbers: `Min(1)` whose failures are `-precision` and `0`
#[derive(Debug, Clone, PartialEq)]
pub struct Positive {
    min: Min,
}

impl Positive {
    pub fn new() -> Self {
        Positive { min: Min::new(1) }
    }

    pub fn with_precision(self, precision: impl Into<Number>) -> Self {
        Positive {
            min: self.min.with_precision(precision),
        }
    }

    pub fn precision(&self) -> Number {
        self.min.precision()
    }
}

impl Default for Positive {
    fn default() -> Self {
        Self::new()
    }
}

impl Boundaries for Positive {
    fn good_value(&self) -> Result<Value> {
        self.min.good_value()
    }

    fn success_values(&self) -> Vec<Value> {
        self.min.success_values()
    }

    fn failure_values(&self) -> Vec<Value> {
        values(&[-self.precision(), ZERO])
    }
}

/// Strictly negative numbers: `Max(-1)` whose failures are `0` and `precision`
#[derive(Debug, Clone, PartialEq)]
pub struct Negative {
    max: Max,
}

impl Negative {
    pub fn new() -> Self {
        Negative { max: Max::new(-1) }
    }

    pub fn with_precision(self, precision: impl Into<Number>) -> Self {
        Negative {
            max: self.max.with_precision(precision),
        }
    }

    pub fn precision(&self) -> Number {
        self.max.precision()
    }
}

impl Default for Negative {
    fn default() -> Self {
        Self::new()
    }
}

impl Boundaries for Negative {
    fn good_value(&self) -> Result<Value> {
        self.max.good_value()
    }

    fn success_values(&self) -> Vec<Value> {
        self.max.success_values()
    }

    fn failure_values(&self) -> Vec<Value> {
        values(&[ZERO, self.precision()])
    }
}

/// Inclusive interval `[min, max]`
///
/// The good value is the midpoint `min + (max - min) / 2`, using floor
/// division when both bounds are integers. Intervals narrower than 2 have no
/// distinct midpoint, so only the two bounds are used as success values.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    min: Number,
    max: Number,
    precision: Number,
}

impl Range {
    /// Fails with [`Error::InvertedRange`] when `min > max` or a bound is NaN
    pub fn new(min: impl Into<Number>, max: impl Into<Number>) -> Result<Self> {
        let (min, max) = (min.into(), max.into());
        if min.is_nan() || max.is_nan() || min > max {
            return Err(Error::InvertedRange { min, max });
        }
        Ok(Range {
            min,
            max,
            precision: DEFAULT_PRECISION,
        })
    }

    pub fn with_precision(mut self, precision: impl Into<Number>) -> Self {
        self.precision = precision.into();
        self
    }

    pub fn min(&self) -> Number {
        self.min
    }

    pub fn max(&self) -> Number {
        self.max
    }

    pub fn precision(&self) -> Number {
        self.precision
    }

    fn midpoint(&self) -> Number {
        self.min + (self.max - self.min).half()
    }
}

impl Boundaries for Range {
    fn good_value(&self) -> Result<Value> {
        Ok(self.midpoint().into())
    }

    fn success_values(&self) -> Vec<Value> {
        if self.max - self.min < Number::Int(2) {
            return values(&[self.min, self.max]);
        }
        values(&[self.min, self.midpoint(), self.max])
    }

    fn failure_values(&self) -> Vec<Value> {
        values(&[
            self.min - TEN * self.precision,
            self.min - self.precision,
            self.max + self.precision,
            self.max + TEN * self.precision,
        ])
    }
}
