use std::sync::Arc;

use std::borrow::Borrow;
use std::collections::BTreeMap;

/// An immutable, cheaply clonable list of values indexed by key.
///
/// The first value of a key wins.
#[derive(Debug)]
pub struct Map<K, V>(Arc<Inner<K, V>>);

#[derive(Debug)]
struct Inner<K, V> {
    entries: BTreeMap<K, usize>,
    values: Arc<[V]>,
}

impl<K, V> Map<K, V> {
    pub fn new(values: impl Into<Arc<[V]>>, to_key: impl Fn(&V) -> K) -> Self
    where
        K: Ord,
    {
        let values = values.into();
        let mut entries = BTreeMap::new();

        for (i, value) in values.iter().enumerate() {
            let _ = entries.entry(to_key(value)).or_insert(i);
        }

        Self(Arc::new(Inner { entries, values }))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        Some(&self.0.values[*self.0.entries.get(key)?])
    }

    pub fn len(&self) -> usize {
        self.0.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values.is_empty()
    }

    pub fn values(&self) -> &[V] {
        &self.0.values
    }
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K: Ord, V> Default for Map<K, V> {
    fn default() -> Self {
        Self(Arc::new(Inner {
            entries: BTreeMap::new(),
            values: Arc::from(Vec::new()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_of_a_key_wins() {
        let map = Map::new(vec![("a", 1), ("b", 2), ("a", 3)], |(key, _)| *key);

        assert_eq!(map.get("a"), Some(&("a", 1)));
        assert_eq!(map.get("b"), Some(&("b", 2)));
        assert_eq!(map.get("c"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn default_is_empty() {
        let map: Map<String, u32> = Map::default();

        assert!(map.is_empty());
        assert_eq!(map.get("anything"), None);
    }
}
