use ahash::{HashSet, HashSetExt};

use crate::atomic;
use crate::error;
use crate::sequence::{Item, Sequence};

/// A keyed collection: key/value pairs in insertion order.
///
/// A map is a source for the sequence operations, not a receiver of
/// them: enumerating it yields a sequence of entry items, and every
/// filtered or transformed result over those entries is an ordered
/// sequence, never a rebuilt map.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    entries: Vec<(atomic::Atomic, Item)>,
}

impl Map {
    /// Construct a map from key/value pairs.
    ///
    /// Keys must be unique under native equality: 1 and 1.0 are the
    /// same key.
    pub fn new(entries: Vec<(atomic::Atomic, Item)>) -> error::Result<Self> {
        let mut seen = HashSet::new();
        for (key, _) in &entries {
            let map_key = atomic::MapKey::new(key.clone());
            if !seen.insert(map_key) {
                return Err(error::Error::DuplicateKey);
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &atomic::Atomic) -> Option<&Item> {
        for (entry_key, value) in &self.entries {
            if entry_key == key {
                return Some(value);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &atomic::Atomic> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Enumerate the map as a sequence of key/value entry items, in
    /// insertion order.
    pub fn entries(&self) -> Sequence {
        let mut items = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            items.push(Item::entry(key.clone(), value.clone()));
        }
        items.into()
    }
}

impl From<Map> for Sequence {
    fn from(map: Map) -> Self {
        map.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_map() -> Map {
        Map::new(vec![
            ("fruit".into(), Item::from("banana")),
            ("phone".into(), Item::from("apple")),
        ])
        .unwrap()
    }

    #[test]
    fn test_entries_in_insertion_order() {
        let sequence = fruit_map().entries();
        assert_eq!(
            sequence,
            Sequence::from(vec![
                Item::entry("fruit", "banana"),
                Item::entry("phone", "apple"),
            ])
        );
    }

    #[test]
    fn test_get() {
        let map = fruit_map();
        assert_eq!(map.get(&"fruit".into()), Some(&Item::from("banana")));
        assert_eq!(map.get(&"car".into()), None);
    }

    #[test]
    fn test_duplicate_key() {
        let result = Map::new(vec![
            ("fruit".into(), Item::from("banana")),
            ("fruit".into(), Item::from("apple")),
        ]);
        assert_eq!(result, Err(error::Error::DuplicateKey));
    }

    #[test]
    fn test_duplicate_key_across_numeric_representations() {
        let result = Map::new(vec![
            (1i64.into(), Item::from("one")),
            (1.0.into(), Item::from("also one")),
        ]);
        assert_eq!(result, Err(error::Error::DuplicateKey));
    }

    #[test]
    fn test_keys() {
        let map = fruit_map();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["fruit".into(), "phone".into()]);
    }
}
