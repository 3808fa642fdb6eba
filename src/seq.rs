//! Primitive sequence helpers.
//!
//! Functions that take a `Vec<T>` by value are **consuming**: the caller's
//! binding is moved and its storage may be reused for the result. Functions
//! that take `&[T]` are non-consuming and leave the input untouched.
//!
//! | Function | Form | Result |
//! |---|---|---|
//! | [`take`] | consuming | first `min(n, len)` elements |
//! | [`clone_seq`] | borrowing | independent copy |
//! | [`extract`] | borrowing | order-preserving map |
//! | [`grep`] | borrowing | order-preserving filter |
//! | [`zip_with_index`] | borrowing | `(position, element)` pairs |
//! | [`min`] / [`max`] | borrowing | extreme element, or [`SeqError::EmptyInput`] |
//! | [`reverse`] | consuming | elements in reverse order |
//! | [`flat_map`] | consuming | back-to-front concatenation of sub-sequences |
//! | [`flat_map_forward`] | consuming | front-to-back concatenation |

use crate::error::{Result, SeqError};

/// Returns the first `min(n, seq.len())` elements of `seq`.
///
/// When `n >= seq.len()` the sequence is returned unchanged. The input
/// storage is reused, so no reallocation happens.
///
/// # Examples
/// ```
/// use u_seqkit::seq::take;
/// assert_eq!(take(vec![1, 2, 3, 4, 5], 3), vec![1, 2, 3]);
/// assert_eq!(take(vec![1, 2], 10), vec![1, 2]);
/// ```
pub fn take<T>(mut seq: Vec<T>, n: usize) -> Vec<T> {
    seq.truncate(n);
    seq
}

/// Returns an independent copy of `seq`.
pub fn clone_seq<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.to_vec()
}

/// Maps every element through `f`, preserving order.
///
/// # Examples
/// ```
/// use u_seqkit::seq::extract;
/// let pairs = [("a", 1), ("b", 2)];
/// assert_eq!(extract(&pairs, |p| p.1), vec![1, 2]);
/// ```
pub fn extract<T, U, F>(seq: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    seq.iter().map(f).collect()
}

/// Keeps the elements for which `predicate` holds, preserving order.
///
/// # Examples
/// ```
/// use u_seqkit::seq::grep;
/// assert_eq!(grep(&[1, 2, 3, 4, 5, 6], |x| x % 2 == 0), vec![2, 4, 6]);
/// ```
pub fn grep<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|x| predicate(x)).cloned().collect()
}

/// Pairs each element with its 0-based position.
pub fn zip_with_index<T: Clone>(seq: &[T]) -> Vec<(usize, T)> {
    seq.iter().cloned().enumerate().collect()
}

/// Returns the smallest element by `<`.
///
/// Ties keep the first occurrence. Incomparable values (e.g. `NaN`) never
/// replace the current minimum.
///
/// # Errors
/// [`SeqError::EmptyInput`] if `seq` is empty.
///
/// # Examples
/// ```
/// use u_seqkit::seq::min;
/// assert_eq!(min(&[3, 1, 4, 1, 5]), Ok(1));
/// assert!(min::<i32>(&[]).is_err());
/// ```
pub fn min<T: PartialOrd + Clone>(seq: &[T]) -> Result<T> {
    let (first, rest) = seq
        .split_first()
        .ok_or(SeqError::EmptyInput { operation: "min" })?;
    let mut best = first;
    for x in rest {
        if x < best {
            best = x;
        }
    }
    Ok(best.clone())
}

/// Returns the largest element by `>`.
///
/// Ties keep the first occurrence.
///
/// # Errors
/// [`SeqError::EmptyInput`] if `seq` is empty.
pub fn max<T: PartialOrd + Clone>(seq: &[T]) -> Result<T> {
    let (first, rest) = seq
        .split_first()
        .ok_or(SeqError::EmptyInput { operation: "max" })?;
    let mut best = first;
    for x in rest {
        if x > best {
            best = x;
        }
    }
    Ok(best.clone())
}

/// Reverses `seq` in place and hands it back.
pub fn reverse<T>(mut seq: Vec<T>) -> Vec<T> {
    seq.reverse();
    seq
}

/// Maps each element to a sub-sequence and concatenates the results.
///
/// Elements are popped from the back of `seq`, so the sub-sequence of the
/// last element comes first. Order inside each sub-sequence is kept. This
/// matches the backward scan used by [`crate::grouping::group_by`]; use
/// [`flat_map_forward`] for front-to-back concatenation.
///
/// # Examples
/// ```
/// use u_seqkit::seq::flat_map;
/// let rows = vec![("a", vec![1, 3, 4]), ("b", vec![3, 4, 5])];
/// assert_eq!(flat_map(rows, |(_, v)| v), vec![3, 4, 5, 1, 3, 4]);
/// ```
pub fn flat_map<T, U, I, F>(mut seq: Vec<T>, mut f: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(T) -> I,
{
    let mut out = Vec::with_capacity(seq.len());
    while let Some(item) = seq.pop() {
        out.extend(f(item));
    }
    out
}

/// Maps each element to a sub-sequence and concatenates them in input order.
///
/// # Examples
/// ```
/// use u_seqkit::seq::flat_map_forward;
/// let rows = vec![("a", vec![1, 3, 4]), ("b", vec![3, 4, 5])];
/// assert_eq!(flat_map_forward(rows, |(_, v)| v), vec![1, 3, 4, 3, 4, 5]);
/// ```
pub fn flat_map_forward<T, U, I, F>(seq: Vec<T>, f: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(T) -> I,
{
    seq.into_iter().flat_map(f).collect()
}

// ============================================================================
// Tests
// ============================================================================
