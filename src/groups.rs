use core::borrow::Borrow;
use core::hash::Hash;

use std::collections::HashMap;
use std::vec::{self, Vec};

/// Values grouped by key, as returned by [`key_by`](crate::ProducerExt::key_by),
/// [`key_first_by`](crate::ProducerExt::key_first_by) and
/// [`key_last_by`](crate::ProducerExt::key_last_by).
///
/// Iteration visits the keys in the order in which they first appeared in the producer.
#[derive(Debug, Clone)]
pub struct Groups<K, V> {
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> Default for Groups<K, V> {
    fn default() -> Self {
        Groups {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> Groups<K, V> {
    /// Creates an empty collection of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns whether there is a value stored for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the groups in order of first appearance of their keys.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Consumes the groups and returns them as a vector, in order of first appearance of their
    /// keys.
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }

    /// Stores `value` for `key`, replacing any previous value. A replaced value keeps the
    /// position of its key, a new key goes to the end of the order.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        match self.positions.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Returns the value stored for `key`, inserting the result of `init` first if there is none.
    /// A newly inserted key goes to the end of the order.
    pub(crate) fn get_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let position = match self.positions.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.positions.insert(key.clone(), position);
                self.entries.push((key, init()));
                position
            }
        };

        &mut self.entries[position].1
    }
}

impl<K, V> IntoIterator for Groups<K, V> {
    type Item = (K, V);
    type IntoIter = vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Groups<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Groups<K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::vec;

    #[test]
    fn keeps_first_appearance_order() {
        let mut groups = Groups::new();
        groups.get_or_insert_with("b", Vec::new).push(1);
        groups.get_or_insert_with("a", Vec::new).push(2);
        groups.get_or_insert_with("b", Vec::new).push(3);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("b"), Some(&vec![1, 3]));
        assert!(!groups.contains_key("c"));
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(
            groups.into_vec(),
            vec![("b", vec![1, 3]), ("a", vec![2])]
        );
    }
}
