// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

use std::collections::HashMap;

/// Map from attribute handle to value that remembers insertion order and never replaces an
/// existing entry.
#[derive(Debug, Clone)]
pub(crate) struct HandleMap<V> {
    entries: Vec<(u16, V)>,
    positions: HashMap<u16, usize>,
}

impl<V> Default for HandleMap<V> {
    fn default() -> Self {
        HandleMap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> HandleMap<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, handle: u16) -> bool {
        self.positions.contains_key(&handle)
    }

    /// Inserts `value` under `handle` unless the handle is taken, in which case the map is left
    /// untouched and `false` is returned.
    pub fn insert(&mut self, handle: u16, value: V) -> bool {
        if self.contains(handle) {
            return false;
        }
        self.positions.insert(handle, self.entries.len());
        self.entries.push((handle, value));
        true
    }

    /// Insertion position of `handle`.
    pub fn position(&self, handle: u16) -> Option<usize> {
        self.positions.get(&handle).copied()
    }

    pub fn get(&self, handle: u16) -> Option<&V> {
        self.position(handle).and_then(|position| self.get_index(position))
    }

    pub fn get_index(&self, position: usize) -> Option<&V> {
        self.entries.get(position).map(|(_, value)| value)
    }

    pub fn get_index_mut(&mut self, position: usize) -> Option<&mut V> {
        self.entries.get_mut(position).map(|(_, value)| value)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (u16, V)> {
        self.entries.iter()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut map = HandleMap::default();
        assert!(map.insert(5, "five"));
        assert!(map.insert(2, "two"));
        assert!(map.insert(9, "nine"));
        assert_eq!(map.values().copied().collect::<Vec<_>>(), ["five", "two", "nine"]);
        assert_eq!(map.position(2), Some(1));
    }

    #[test]
    fn first_insert_wins() {
        let mut map = HandleMap::default();
        assert!(map.insert(1, "first"));
        assert!(!map.insert(1, "second"));
        assert_eq!(map.get(1), Some(&"first"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn missing_handles() {
        let mut map: HandleMap<()> = HandleMap::default();
        assert_eq!(map.get(3), None);
        assert_eq!(map.get_index_mut(0), None);
        assert!(!map.contains(3));
    }
}
