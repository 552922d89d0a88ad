use super::edge::EdgeId;

/// Set of segments kept in insertion order.
///
/// Used to track the segments "crossing" a position while sweeping over the nodes of a graph: a
/// segment is toggled once at each of its ends, so after the sweep passes both of them it is not
/// in the group anymore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentGroup<K = EdgeId> {
    keys: Vec<K>,
}

impl<K> Default for SegmentGroup<K> {
    fn default() -> Self {
        Self { keys: vec![] }
    }
}

impl<K: PartialEq> SegmentGroup<K> {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the key if it is not in the group, removes it otherwise. Returns true if the key is in
    /// the group after the call.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.keys.iter().position(|k| *k == key) {
            Some(index) => {
                self.keys.remove(index);
                false
            }
            None => {
                self.keys.push(key);
                true
            }
        }
    }

    /// Returns true if the key is in the group.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the group has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &'_ K> {
        self.keys.iter()
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
