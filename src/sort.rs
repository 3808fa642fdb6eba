//! Comparator-driven insertion sort and median selection.
//!
//! # Algorithm
//!
//! Straight insertion sort: each element is swapped leftward while it
//! compares strictly [`Ordering::Less`] than its predecessor. Equal
//! elements are never swapped past each other, so the sort is **stable**.
//!
//! Reference: Knuth (1998), *TAOCP* Vol. 3, §5.2.1, Algorithm S.
//!
//! # Complexity
//! Time: O(n²) worst case, O(n) on already-sorted input. Space: O(1).

use std::cmp::Ordering;

use crate::error::{Result, SeqError};

/// Sorts `data` in place with the comparator `cmp`.
///
/// Stable: elements comparing [`Ordering::Equal`] keep their relative order.
///
/// # Examples
/// ```
/// use u_seqkit::sort::insert_sort_by;
/// let mut v = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// insert_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
/// assert_eq!(v, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn insert_sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && cmp(&data[j], &data[j - 1]) == Ordering::Less {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Sorts `data` in place by its natural ordering.
pub fn insert_sort<T: Ord>(data: &mut [T]) {
    insert_sort_by(data, T::cmp);
}

/// Returns `true` if `data` is non-decreasing under `cmp`.
pub fn is_sorted_by<T, F>(data: &[T], mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}

/// Sorts `data` with `cmp` and returns its median element.
///
/// For odd length `n` the element at `(n − 1) / 2` is returned; for even
/// length the **upper** middle element at `n / 2`. The two middle elements
/// are never averaged, so any element type works.
///
/// # Errors
/// [`SeqError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_seqkit::sort::median_by;
/// assert_eq!(median_by(vec![3, 1, 2], |a, b| a.cmp(b)), Ok(2));
/// assert_eq!(median_by(vec![1, 2, 3, 4], |a, b| a.cmp(b)), Ok(3));
/// ```
pub fn median_by<T, F>(mut data: Vec<T>, cmp: F) -> Result<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.is_empty() {
        return Err(SeqError::EmptyInput {
            operation: "median",
        });
    }
    insert_sort_by(&mut data, cmp);
    let n = data.len();
    let idx = if n % 2 == 1 { (n - 1) / 2 } else { n / 2 };
    Ok(data.swap_remove(idx))
}

/// Natural-order counterpart of [`median_by`].
///
/// # Errors
/// [`SeqError::EmptyInput`] if `data` is empty.
pub fn median<T: Ord>(data: Vec<T>) -> Result<T> {
    median_by(data, T::cmp)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sort_basic() {
        let mut v = vec![5, 2, 9, 1, 5, 6];
        insert_sort(&mut v);
        assert_eq!(v, vec![1, 2, 5, 5, 6, 9]);
    }

    #[test]
    fn test_insert_sort_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        insert_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![7];
        insert_sort(&mut one);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn test_insert_sort_descending_comparator() {
        let mut v = vec![1, 4, 2, 3];
        insert_sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_insert_sort_stable() {
        let mut v = vec![("b", 2), ("a", 1), ("c", 2), ("d", 1), ("e", 2)];
        insert_sort_by(&mut v, |a, b| a.1.cmp(&b.1));
        assert_eq!(v, vec![("a", 1), ("d", 1), ("b", 2), ("c", 2), ("e", 2)]);
    }

    #[test]
    fn test_insert_sort_floats() {
        let mut v = vec![2.5_f64, -1.0, 0.0, 3.25];
        insert_sort_by(&mut v, |a, b| a.total_cmp(b));
        assert_eq!(v, vec![-1.0, 0.0, 2.5, 3.25]);
    }

    #[test]
    fn test_is_sorted_by() {
        assert!(is_sorted_by(&[1, 1, 2, 3], i32::cmp));
        assert!(!is_sorted_by(&[1, 3, 2], i32::cmp));
        assert!(is_sorted_by::<i32, _>(&[], i32::cmp));
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(vec![3, 1, 2]), Ok(2));
        assert_eq!(median(vec![9]), Ok(9));
    }

    #[test]
    fn test_median_even_takes_upper_middle() {
        assert_eq!(median(vec![1, 2, 3, 4]), Ok(3));
        assert_eq!(median(vec![10, 20]), Ok(20));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(
            median(Vec::<i32>::new()),
            Err(SeqError::EmptyInput {
                operation: "median"
            })
        );
    }

    #[test]
    fn test_median_by_custom_comparator() {
        let words = vec!["kiwi", "fig", "banana", "apple"];
        // lengths 4, 3, 6, 5 -> sorted fig, kiwi, apple, banana -> index 2
        assert_eq!(median_by(words, |a, b| a.len().cmp(&b.len())), Ok("apple"));
    }
}
