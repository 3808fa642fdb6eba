//! Ordered key → values groups.
//!
//! [`Groups`] is the result type of every grouping operation. It behaves
//! like an insertion-ordered map from `K` to `Vec<V>`: keys are pairwise
//! distinct, groups keep the order in which their keys were first pushed,
//! and values inside a group keep the order in which they were pushed.
//!
//! A hash index from key to group position makes [`Groups::push`] and
//! [`Groups::get`] O(1) on average.

use std::collections::HashMap;
use std::hash::Hash;

/// A key paired with every value that was grouped under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedGroup<K, V> {
    /// The grouping key.
    pub key: K,
    /// Values in the order they were grouped.
    pub values: Vec<V>,
}

impl<K, V> KeyedGroup<K, V> {
    /// Creates a group from a key and its values.
    pub fn new(key: K, values: Vec<V>) -> Self {
        Self { key, values }
    }

    /// Returns the number of values in the group.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the group holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> From<KeyedGroup<K, V>> for (K, Vec<V>) {
    fn from(group: KeyedGroup<K, V>) -> Self {
        (group.key, group.values)
    }
}

/// Insertion-ordered list of [`KeyedGroup`]s with distinct keys.
///
/// # Examples
/// ```
/// use u_seqkit::collections::Groups;
///
/// let mut groups = Groups::new();
/// groups.push("odd", 1);
/// groups.push("even", 2);
/// groups.push("odd", 3);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.get(&"odd"), Some(&[1, 3][..]));
/// assert_eq!(groups.into_pairs(), vec![("odd", vec![1, 3]), ("even", vec![2])]);
/// ```
#[derive(Debug, Clone)]
pub struct Groups<K, V> {
    groups: Vec<KeyedGroup<K, V>>,
    index: HashMap<K, usize>,
}

impl<K, V> Groups<K, V> {
    /// Returns the number of groups (distinct keys).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the total number of values across all groups.
    pub fn value_count(&self) -> usize {
        self.groups.iter().map(KeyedGroup::len).sum()
    }

    /// Iterates over the groups in order.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyedGroup<K, V>> {
        self.groups.iter()
    }

    /// Returns the groups as a slice, in order.
    pub fn as_slice(&self) -> &[KeyedGroup<K, V>] {
        &self.groups
    }

    /// Consumes the result and returns the groups in order.
    pub fn into_vec(self) -> Vec<KeyedGroup<K, V>> {
        self.groups
    }

    /// Consumes the result and returns `(key, values)` tuples in order.
    pub fn into_pairs(self) -> Vec<(K, Vec<V>)> {
        self.groups.into_iter().map(<(K, Vec<V>)>::from).collect()
    }
}

impl<K, V> Groups<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty result.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty result with room for `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            groups: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Appends `value` to the group for `key`.
    ///
    /// An unseen key opens a new group at the end; a known key appends to
    /// the end of its existing group.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&pos) => self.groups[pos].values.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push(KeyedGroup::new(key, vec![value]));
            }
        }
    }

    /// Returns the values grouped under `key`.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&pos| self.groups[pos].values.as_slice())
    }

    /// Returns `true` if a group exists for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K, V> Default for Groups<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Groups<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K: Eq, V: Eq> Eq for Groups<K, V> {}

impl<K, V> IntoIterator for Groups<K, V> {
    type Item = KeyedGroup<K, V>;
    type IntoIter = std::vec::IntoIter<KeyedGroup<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Groups<K, V> {
    type Item = &'a KeyedGroup<K, V>;
    type IntoIter = std::slice::Iter<'a, KeyedGroup<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
