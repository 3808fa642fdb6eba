//! Projections over grouping results.
//!
//! [`keys`] and [`values`] are parallel, read-only views in group order.
//! [`flatten`] is a lossy inverse of grouping: it returns every grouped
//! value, but in group order rather than the original input order.

use crate::collections::Groups;

/// Returns each group's key, in group order.
///
/// # Examples
/// ```
/// use u_seqkit::aggregate::keys;
/// use u_seqkit::grouping::group_by;
///
/// let groups = group_by(vec![1, 2, 3, 4], |x| x % 2);
/// assert_eq!(keys(&groups), vec![&0, &1]);
/// ```
pub fn keys<K, V>(groups: &Groups<K, V>) -> Vec<&K> {
    groups.iter().map(|g| &g.key).collect()
}

/// Returns each group's values, in group order.
pub fn values<K, V>(groups: &Groups<K, V>) -> Vec<&[V]> {
    groups.iter().map(|g| g.values.as_slice()).collect()
}

/// Returns `(key, number of values)` for each group, in group order.
pub fn group_sizes<K, V>(groups: &Groups<K, V>) -> Vec<(&K, usize)> {
    groups.iter().map(|g| (&g.key, g.len())).collect()
}

/// Concatenates every group's values in group order.
///
/// # Examples
/// ```
/// use u_seqkit::aggregate::flatten;
/// use u_seqkit::grouping::group_by;
///
/// let groups = group_by(vec![1, 2, 3, 4], |x| x % 2);
/// assert_eq!(flatten(groups), vec![4, 2, 3, 1]);
/// ```
pub fn flatten<K, V>(groups: Groups<K, V>) -> Vec<V> {
    let mut out = Vec::with_capacity(groups.value_count());
    for group in groups {
        out.extend(group.values);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_by;

    fn sample() -> Groups<i32, i32> {
        group_by(vec![1, 2, -3, 3, 4, 5, -5], |x| x * x)
    }

    #[test]
    fn test_keys_in_group_order() {
        let groups = sample();
        assert_eq!(keys(&groups), vec![&25, &16, &9, &4, &1]);
    }

    #[test]
    fn test_values_parallel_to_keys() {
        let groups = sample();
        let vals = values(&groups);
        assert_eq!(vals.len(), keys(&groups).len());
        assert_eq!(vals[0], &[-5, 5]);
        assert_eq!(vals[2], &[3, -3]);
    }

    #[test]
    fn test_group_sizes() {
        let groups = sample();
        assert_eq!(
            group_sizes(&groups),
            vec![(&25, 2), (&16, 1), (&9, 2), (&4, 1), (&1, 1)]
        );
    }

    #[test]
    fn test_flatten_group_order() {
        assert_eq!(flatten(sample()), vec![-5, 5, 4, 3, -3, 2, 1]);
    }

    #[test]
    fn test_empty_groups() {
        let groups: Groups<u8, u8> = Groups::new();
        assert!(keys(&groups).is_empty());
        assert!(values(&groups).is_empty());
        assert!(flatten(groups).is_empty());
    }
}
