//! List ordering assertions

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// How a list is expected to be ordered
pub struct SortOrder<'a, T> {
    compare: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
    reverse: bool,
}

impl<'a, T: 'a> SortOrder<'a, T> {
    /// Ascending by `Ord`
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::by(|a: &T, b: &T| a.cmp(b))
    }

    /// Ascending by a comparator
    pub fn by(compare: impl Fn(&T, &T) -> Ordering + 'a) -> Self {
        SortOrder {
            compare: Box::new(compare),
            reverse: false,
        }
    }

    /// Ascending by a derived key
    pub fn by_key<K: Ord>(key: impl Fn(&T) -> K + 'a) -> Self {
        Self::by(move |a: &T, b: &T| key(a).cmp(&key(b)))
    }

    /// Flip the direction
    pub fn reversed(mut self) -> Self {
        self.reverse = !self.reverse;
        self
    }

    /// Stable sort of a copy of `list`
    fn sorted(&self, list: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut sorted = list.to_vec();
        if self.reverse {
            sorted.sort_by(|a, b| (self.compare)(b, a));
        } else {
            sorted.sort_by(|a, b| (self.compare)(a, b));
        }
        sorted
    }
}

impl<T> fmt::Debug for SortOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOrder")
            .field("reverse", &self.reverse)
            .finish()
    }
}

/// Fails unless `list` is in ascending order
pub fn assert_sorted<T: Ord + Clone + fmt::Debug>(list: &[T]) -> Result<()> {
    assert_sorted_with(list, &SortOrder::natural())
}

/// Fails when `list` is already in ascending order
pub fn assert_not_sorted<T: Ord + Clone + fmt::Debug>(list: &[T]) -> Result<()> {
    assert_not_sorted_with(list, &SortOrder::natural())
}

pub fn assert_sorted_with<T>(list: &[T], order: &SortOrder<'_, T>) -> Result<()>
where
    T: Clone + PartialEq + fmt::Debug,
{
    let sorted = order.sorted(list);
    if sorted.as_slice() != list {
        return Err(Error::assertion(format!(
            "List is not sorted. Expected list: {:?}",
            sorted
        )));
    }
    Ok(())
}

pub fn assert_not_sorted_with<T>(list: &[T], order: &SortOrder<'_, T>) -> Result<()>
where
    T: Clone + PartialEq + fmt::Debug,
{
    let sorted = order.sorted(list);
    if sorted.as_slice() == list {
        return Err(Error::assertion(format!("List is sorted ({:?}).", sorted)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_list_passes() {
        assert!(assert_sorted(&[1, 2, 3]).is_ok());
        assert!(assert_sorted::<i32>(&[]).is_ok());
    }

    #[test]
    fn test_unsorted_list_names_expected_order() {
        let err = assert_sorted(&[3, 2, 1]).unwrap_err();
        assert_eq!(err.to_string(), "List is not sorted. Expected list: [1, 2, 3]");
    }

    #[test]
    fn test_reversed_order() {
        assert!(assert_sorted_with(&[3, 2, 1], &SortOrder::natural().reversed()).is_ok());
        assert!(assert_not_sorted_with(&[1, 2, 3], &SortOrder::natural().reversed()).is_ok());
    }

    #[test]
    fn test_key_order_ignores_case() {
        let by_upper = SortOrder::by_key(|s: &&str| s.to_uppercase());
        assert!(assert_sorted_with(&["b", "C", "d"], &by_upper).is_ok());
        assert!(assert_not_sorted_with(&["D", "b", "E"], &by_upper).is_ok());
    }

    #[test]
    fn test_comparator_order() {
        let by_length = SortOrder::by(|a: &String, b: &String| a.len().cmp(&b.len()));
        let words = vec!["a".to_string(), "ccc".to_string(), "bb".to_string()];
        let err = assert_sorted_with(&words, &by_length).unwrap_err();
        assert_eq!(
            err.to_string(),
            "List is not sorted. Expected list: [\"a\", \"bb\", \"ccc\"]"
        );
    }

    #[test]
    fn test_not_sorted_fails_on_sorted_list() {
        assert!(assert_not_sorted(&[3, 2, 1]).is_ok());
        let err = assert_not_sorted(&[1, 2, 3]).unwrap_err();
        assert_eq!(err.to_string(), "List is sorted ([1, 2, 3]).");
    }
}
