//! Membership descriptors: `InList` and `NotInList`

use super::Boundaries;
use crate::error::{Error, Result};
use crate::value::{Number, Value};

const ONE: Number = Number::Int(1);

/// The argument must be one of a fixed set of values
///
/// Success values are the whole list when it has fewer than four elements,
/// otherwise its first, middle and last elements. Failure values are one
/// below the smallest and one above the largest element, and only exist for
/// purely numeric lists.
#[derive(Debug, Clone, PartialEq)]
pub struct InList {
    values: Vec<Value>,
}

impl InList {
    /// Fails with [`Error::ListTooShort`] for lists of fewer than two values
    pub fn new<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() < 2 {
            return Err(Error::ListTooShort { len: values.len() });
        }
        Ok(InList { values })
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    fn middle(&self) -> &Value {
        &self.values[self.values.len() / 2]
    }

    /// Smallest and largest element, or `None` unless every element is a comparable number
    fn numeric_bounds(&self) -> Option<(Number, Number)> {
        let mut numbers = self
            .values
            .iter()
            .map(Value::as_number)
            .collect::<Option<Vec<Number>>>()?;
        if numbers.iter().any(|n| n.is_nan()) {
            return None;
        }
        // sort a copy; the declared order drives the success values
        numbers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Some((*numbers.first()?, *numbers.last()?))
    }
}

impl Boundaries for InList {
    fn good_value(&self) -> Result<Value> {
        Ok(self.middle().clone())
    }

    fn success_values(&self) -> Vec<Value> {
        if self.values.len() < 4 {
            return self.values.clone();
        }
        vec![
            self.values[0].clone(),
            self.middle().clone(),
            self.values[self.values.len() - 1].clone(),
        ]
    }

    fn failure_values(&self) -> Vec<Value> {
        match self.numeric_bounds() {
            Some((lowest, highest)) => vec![(lowest - ONE).into(), (highest + ONE).into()],
            None => Vec::new(),
        }
    }
}

/// The argument must stay outside a set of numbers
///
/// The mirror image of [`InList`]: values just outside the list are expected
/// to succeed and members of the list are expected to fail. Only numeric
/// lists have values outside them that can be derived, so asking a
/// non-numeric `NotInList` for its good value is an
/// [`Error::Unsupported`] misuse.
#[derive(Debug, Clone, PartialEq)]
pub struct NotInList {
    list: InList,
}

impl NotInList {
    pub fn new<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Ok(NotInList {
            list: InList::new(values)?,
        })
    }

    pub fn values(&self) -> &[Value] {
        self.list.values()
    }
}

impl Boundaries for NotInList {
    fn good_value(&self) -> Result<Value> {
        self.success_values()
            .into_iter()
            .next()
            .ok_or_else(|| Error::Unsupported("NotInList only works for numeric lists".to_string()))
    }

    fn success_values(&self) -> Vec<Value> {
        self.list.failure_values()
    }

    fn failure_values(&self) -> Vec<Value> {
        self.list.success_values()
    }
}
