//! Keyed grouping engine.
//!
//! Every grouping operation scans its input **from the last element toward
//! the first**. For each element `e` the key `k = key_fn(e)` is computed:
//!
//! - an unseen `k` opens a new group `(k, [e])` at the end of the result;
//! - a seen `k` appends `e` to the end of its existing group.
//!
//! Consequently group order is the order in which keys are first met during
//! the backward scan, and inside a group the element nearest the end of the
//! input comes first:
//!
//! ```
//! use u_seqkit::grouping::group_by;
//!
//! let groups = group_by(vec![1, 2, -3, 3, 4, 5, -5], |x| x * x);
//! assert_eq!(
//!     groups.into_pairs(),
//!     vec![(25, vec![-5, 5]), (16, vec![4]), (9, vec![3, -3]), (4, vec![2]), (1, vec![1])],
//! );
//! ```
//!
//! # Variants
//!
//! | Function | Input | Stored value |
//! |---|---|---|
//! | [`group_by`] | consumed `Vec<T>` | `T` |
//! | [`group_by_keeping`] | borrowed `&[T]` | clone of `T` |
//! | [`group_by_reducing`] | consumed `Vec<T>` | `transform(T)` |
//! | [`group_by_reducing_keeping`] | borrowed `&[T]` | `transform(&T)` |
//! | [`group_by_field`] | consumed `Vec<T>` | `T`, keyed by a named field |
//! | [`group_by_field_keeping`] | borrowed `&[T]` | clone of `T`, keyed by a named field |
//!
//! Consuming variants pop elements off the back of the input, so its
//! storage shrinks as the result grows.

mod fields;

pub use fields::FieldRegistry;

use std::hash::Hash;

use crate::collections::Groups;
use crate::error::Result;

/// Groups `seq` by `key_fn`, consuming the input.
///
/// # Complexity
/// Time: O(n) expected (hash lookups), Space: O(n)
pub fn group_by<T, K, F>(seq: Vec<T>, key_fn: F) -> Groups<K, T>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    group_by_reducing(seq, key_fn, |item| item)
}

/// Groups a borrowed `seq` by `key_fn`, leaving the input untouched.
///
/// Produces the same groups as [`group_by`] applied to a clone of `seq`.
///
/// # Examples
/// ```
/// use u_seqkit::grouping::group_by_keeping;
///
/// let words = vec!["apple", "avocado", "banana"];
/// let groups = group_by_keeping(&words, |w| w.chars().next());
/// assert_eq!(groups.get(&Some('a')), Some(&["avocado", "apple"][..]));
/// assert_eq!(words.len(), 3);
/// ```
pub fn group_by_keeping<T, K, F>(seq: &[T], key_fn: F) -> Groups<K, T>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    group_by_reducing_keeping(seq, key_fn, T::clone)
}

/// Groups `seq` by `key_fn`, storing `transform_fn(e)` instead of `e`.
///
/// The key is computed from the element before the element is moved into
/// `transform_fn`.
///
/// # Examples
/// ```
/// use u_seqkit::grouping::group_by_reducing;
///
/// let sales = vec![("north", 10), ("south", 4), ("north", 7)];
/// let groups = group_by_reducing(sales, |s| s.0, |s| s.1);
/// assert_eq!(groups.into_pairs(), vec![("north", vec![7, 10]), ("south", vec![4])]);
/// ```
pub fn group_by_reducing<T, K, V, F, G>(
    mut seq: Vec<T>,
    mut key_fn: F,
    mut transform_fn: G,
) -> Groups<K, V>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
    G: FnMut(T) -> V,
{
    let len = seq.len();
    let mut groups = Groups::new();
    while let Some(item) = seq.pop() {
        let key = key_fn(&item);
        groups.push(key, transform_fn(item));
    }
    tracing::debug!(elements = len, groups = groups.len(), "grouped sequence");
    groups
}

/// Borrowing counterpart of [`group_by_reducing`].
pub fn group_by_reducing_keeping<T, K, V, F, G>(
    seq: &[T],
    mut key_fn: F,
    mut transform_fn: G,
) -> Groups<K, V>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
    G: FnMut(&T) -> V,
{
    let mut groups = Groups::new();
    for item in seq.iter().rev() {
        groups.push(key_fn(item), transform_fn(item));
    }
    tracing::debug!(
        elements = seq.len(),
        groups = groups.len(),
        "grouped borrowed sequence"
    );
    groups
}

/// Groups `seq` by the text of the field `field`, consuming the input.
///
/// The field is looked up in `registry` once, before any element is
/// scanned. The input is dropped even when the lookup fails.
///
/// # Errors
/// [`SeqError::TypeMismatch`](crate::error::SeqError::TypeMismatch) if
/// `field` is not registered for `T`.
///
/// # Examples
/// ```
/// use u_seqkit::grouping::{group_by_field, FieldRegistry};
///
/// #[derive(Debug, PartialEq)]
/// struct Order { id: u32, status: &'static str }
///
/// let registry = FieldRegistry::new().with_field("status", |o: &Order| o.status.to_string());
/// let orders = vec![
///     Order { id: 1, status: "open" },
///     Order { id: 2, status: "closed" },
///     Order { id: 3, status: "open" },
/// ];
/// let groups = group_by_field(orders, &registry, "status").unwrap();
/// let open: Vec<u32> = groups.get(&"open".to_string()).unwrap().iter().map(|o| o.id).collect();
/// assert_eq!(open, vec![3, 1]);
/// ```
pub fn group_by_field<T>(
    seq: Vec<T>,
    registry: &FieldRegistry<T>,
    field: &str,
) -> Result<Groups<String, T>> {
    let accessor = registry.resolve(field).inspect_err(|err| {
        tracing::debug!(%err, "field-keyed grouping rejected");
    })?;
    Ok(group_by(seq, accessor))
}

/// Borrowing counterpart of [`group_by_field`].
///
/// # Errors
/// [`SeqError::TypeMismatch`](crate::error::SeqError::TypeMismatch) if
/// `field` is not registered for `T`.
pub fn group_by_field_keeping<T: Clone>(
    seq: &[T],
    registry: &FieldRegistry<T>,
    field: &str,
) -> Result<Groups<String, T>> {
    let accessor = registry.resolve(field).inspect_err(|err| {
        tracing::debug!(%err, "field-keyed grouping rejected");
    })?;
    Ok(group_by_keeping(seq, accessor))
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn partition_law(
            data in proptest::collection::vec(-50_i32..50, 0..60),
            modulus in 1_i32..8,
        ) {
            let groups = group_by(data.clone(), |x| x.rem_euclid(modulus));
            prop_assert_eq!(groups.value_count(), data.len());
            for g in &groups {
                prop_assert!(g.values.iter().all(|x| x.rem_euclid(modulus) == g.key));
            }
        }

        #[test]
        fn keys_are_unique(data in proptest::collection::vec(0_u8..20, 0..60)) {
            let groups = group_by(data, |x| x / 3);
            let mut keys: Vec<u8> = groups.iter().map(|g| g.key).collect();
            let before = keys.len();
            keys.sort_unstable();
            keys.dedup();
            prop_assert_eq!(keys.len(), before);
        }

        #[test]
        fn keeping_twin_equivalence(data in proptest::collection::vec(0_u16..100, 0..60)) {
            let snapshot = data.clone();
            let kept = group_by_keeping(&data, |x| x % 7);
            let consumed = group_by(data.clone(), |x| x % 7);
            prop_assert_eq!(kept, consumed);
            prop_assert_eq!(data, snapshot);
        }

        #[test]
        fn groups_follow_backward_first_encounter(data in proptest::collection::vec(0_u8..6, 0..40)) {
            let groups = group_by(data.clone(), |x| *x);
            let mut expected_keys: Vec<u8> = Vec::new();
            for x in data.iter().rev() {
                if !expected_keys.contains(x) {
                    expected_keys.push(*x);
                }
            }
            let keys: Vec<u8> = groups.iter().map(|g| g.key).collect();
            prop_assert_eq!(keys, expected_keys);
        }
    }
}
