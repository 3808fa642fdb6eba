//! Weighted pair generation over distinct transformed keys.
//!
//! [`make_pairs`] builds the directed edges of a complete graph whose nodes
//! are the transformed keys of the input elements. Every unordered pair of
//! elements whose keys are both present and differ yields exactly two
//! [`WeightedPair`]s, one per direction, carrying the same weight.
//!
//! # Traversal
//!
//! For `i` from `n − 1` down to `0` and `j` from `0` up to `i − 1`, the
//! element `x[i]` is paired with `x[j]`. The weight is computed once per
//! unordered pair as `weight_fn(x[i], x[j])` (later index first), and the
//! two directed entries are emitted `(key(x[i]), key(x[j]))` first.
//!
//! # Absent keys
//!
//! A transform returning `None` marks the element as unpairable. Any pair
//! involving it is skipped without error, as is any pair whose two keys are
//! equal.

/// A directed pair of keys annotated with a weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPair<T> {
    /// Source of the directed edge.
    pub item1: T,
    /// Target of the directed edge.
    pub item2: T,
    /// Weight shared by both directions of the same unordered pair.
    pub weight: f64,
}

impl<T> WeightedPair<T> {
    /// Creates a weighted pair.
    pub fn new(item1: T, item2: T, weight: f64) -> Self {
        Self {
            item1,
            item2,
            weight,
        }
    }

    /// Returns the same edge in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            item1: self.item2,
            item2: self.item1,
            weight: self.weight,
        }
    }
}

/// Generates weighted pairs for every unordered pair of elements whose
/// transformed keys are present and distinct.
///
/// `transform_fn` is evaluated once per element; `weight_fn` once per
/// emitted unordered pair. With all keys present and pairwise distinct the
/// result holds exactly `n · (n − 1)` entries.
///
/// # Complexity
/// Time: O(n²), Space: O(n²) for the output
///
/// # Examples
/// ```
/// use u_seqkit::pairs::{make_pairs, WeightedPair};
///
/// let items = [("a", 1.0), ("b", 2.0), ("c", 3.0)];
/// let pairs = make_pairs(&items, |x| Some(x.0), |a, b| 1.0 / (a.1 + b.1));
/// assert_eq!(pairs.len(), 6);
/// assert_eq!(pairs[0], WeightedPair::new("c", "a", 0.25));
/// assert_eq!(pairs[1], WeightedPair::new("a", "c", 0.25));
/// ```
pub fn make_pairs<T, U, F, W>(
    seq: &[T],
    transform_fn: F,
    mut weight_fn: W,
) -> Vec<WeightedPair<U>>
where
    U: PartialEq + Clone,
    F: FnMut(&T) -> Option<U>,
    W: FnMut(&T, &T) -> f64,
{
    let keys: Vec<Option<U>> = seq.iter().map(transform_fn).collect();
    let n = seq.len();
    let mut out = Vec::new();
    let mut skipped = 0_usize;

    for i in (0..n).rev() {
        for j in 0..i {
            let (Some(first), Some(second)) = (&keys[i], &keys[j]) else {
                skipped += 1;
                continue;
            };
            if first == second {
                skipped += 1;
                continue;
            }
            let weight = weight_fn(&seq[i], &seq[j]);
            out.push(WeightedPair::new(first.clone(), second.clone(), weight));
            out.push(WeightedPair::new(second.clone(), first.clone(), weight));
        }
    }

    tracing::debug!(
        elements = n,
        pairs = out.len(),
        skipped,
        "generated weighted pairs"
    );
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inverse_sum(a: &(&str, f64), b: &(&str, f64)) -> f64 {
        1.0 / (a.1 + b.1)
    }

    #[test]
    fn test_three_elements_all_edges() {
        let items = [("a", 1.0), ("b", 2.0), ("c", 3.0)];
        let pairs = make_pairs(&items, |x| Some(x.0), inverse_sum);
        let expected = vec![
            WeightedPair::new("c", "a", 0.25),
            WeightedPair::new("a", "c", 0.25),
            WeightedPair::new("c", "b", 0.2),
            WeightedPair::new("b", "c", 0.2),
            WeightedPair::new("b", "a", 1.0 / 3.0),
            WeightedPair::new("a", "b", 1.0 / 3.0),
        ];
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_weight_argument_order() {
        let items = [10, 20, 30];
        let pairs = make_pairs(&items, |x| Some(*x), |later, earlier| {
            (later - earlier) as f64
        });
        assert!(pairs.iter().all(|p| p.weight > 0.0));
    }

    #[test]
    fn test_equal_keys_skipped() {
        let items = [("x", 1.0), ("y", 2.0), ("x", 3.0)];
        let pairs = make_pairs(&items, |p| Some(p.0), inverse_sum);
        assert_eq!(pairs.len(), 4);
        assert!(pairs.iter().all(|p| p.item1 != p.item2));
    }

    #[test]
    fn test_absent_keys_skipped() {
        let items = [1, 2, 3, 4];
        let pairs = make_pairs(
            &items,
            |x| if x % 2 == 0 { Some(*x) } else { None },
            |_, _| 1.0,
        );
        assert_eq!(
            pairs,
            vec![WeightedPair::new(4, 2, 1.0), WeightedPair::new(2, 4, 1.0)]
        );
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [i32; 0] = [];
        assert!(make_pairs(&empty, |x| Some(*x), |_, _| 1.0).is_empty());
        assert!(make_pairs(&[7], |x| Some(*x), |_, _| 1.0).is_empty());
    }

    #[test]
    fn test_transform_called_once_per_element() {
        let items = [1, 2, 3, 4, 5];
        let mut calls = 0;
        let pairs = make_pairs(
            &items,
            |x| {
                calls += 1;
                Some(*x)
            },
            |_, _| 0.5,
        );
        assert_eq!(calls, 5);
        assert_eq!(pairs.len(), 20);
    }

    #[test]
    fn test_reversed() {
        let p = WeightedPair::new('a', 'b', 2.0).reversed();
        assert_eq!(p, WeightedPair::new('b', 'a', 2.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn pair_count_law(n in 0_usize..25) {
            let items: Vec<usize> = (0..n).collect();
            let pairs = make_pairs(&items, |x| Some(*x), |a, b| (a + b) as f64);
            prop_assert_eq!(pairs.len(), n * n.saturating_sub(1));
        }

        #[test]
        fn pairs_are_symmetric(data in proptest::collection::vec(0_u8..12, 0..20)) {
            let pairs = make_pairs(&data, |x| Some(*x), |a, b| {
                f64::from(*a) * 0.5 + f64::from(*b)
            });
            prop_assert_eq!(pairs.len() % 2, 0);
            for chunk in pairs.chunks(2) {
                prop_assert_eq!(&chunk[1], &chunk[0].clone().reversed());
            }
            for p in &pairs {
                prop_assert!(pairs.iter().any(|q| q.item1 == p.item2
                    && q.item2 == p.item1
                    && q.weight == p.weight));
            }
        }
    }
}
