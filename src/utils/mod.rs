/*!
# Utilities

Abstractions over `Map` data structures, allowing the edge sampler to choose the most
efficient implementation based on context:
- Sparse sampling -> `FxHashMap`
- Dense sampling -> `[Option<T>]` indexed directly

The module includes:
- [`Map<K, V>`]: trait for generic map-like operations
- [`FromCapacity`]: construction from a (total, used) capacity pair
*/

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

/// Minimalist trait for map-like collections.
///
/// Supports insertion, removal, lookup, clearing, and size queries.
pub trait Map<K, V> {
    /// Inserts an `(key, value)` pair into the map.
    /// If the key was present before, returns the previous value, otherwise returns `None`.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes a key from the map and returns the associated value if it existed.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns a reference to the value corresponding to the given key, or `None` if the key is not present.
    fn get(&self, key: &K) -> Option<&V>;

    /// Clears all elements from the map.
    fn clear(&mut self);

    /// Returns the number of elements currently stored in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map is empty. Default implementation uses `len()`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> Map<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// `Vec<Option<T>>` usable as `Map<u64, T>` for dense key ranges
impl<T> Map<u64, T> for [Option<T>] {
    fn insert(&mut self, key: u64, value: T) -> Option<T> {
        self[key as usize].replace(value)
    }

    fn remove(&mut self, key: &u64) -> Option<T> {
        self[*key as usize].take()
    }

    fn get(&self, key: &u64) -> Option<&T> {
        self[*key as usize].as_ref()
    }

    fn clear(&mut self) {
        self.iter_mut().for_each(|x| *x = None);
    }

    fn len(&self) -> usize {
        self.iter().filter(|x| x.is_some()).count()
    }
}

impl<T> Map<u64, T> for Vec<Option<T>> {
    fn insert(&mut self, key: u64, value: T) -> Option<T> {
        Map::insert(self.as_mut_slice(), key, value)
    }

    fn remove(&mut self, key: &u64) -> Option<T> {
        Map::remove(self.as_mut_slice(), key)
    }

    fn get(&self, key: &u64) -> Option<&T> {
        Map::get(self.as_slice(), key)
    }

    fn clear(&mut self) {
        Map::clear(self.as_mut_slice())
    }

    fn len(&self) -> usize {
        Map::len(self.as_slice())
    }
}

/// Helper trait for datastructures that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value) and the actual
    /// capacity that will be used (space-wise).
    ///
    /// If you only have one value as an upper bound, provide it as both arguments.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<T> FromCapacity for Vec<Option<T>> {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `Vec<Option<T>>` as a Map requires initializing up to the maximum key
        (0..total).map(|_| None).collect()
    }
}

impl<K, V, S> FromCapacity for HashMap<K, V, S>
where
    S: BuildHasher + Default,
{
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        HashMap::with_capacity_and_hasher(used, S::default())
    }
}
