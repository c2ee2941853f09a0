use std::num::NonZeroUsize;

use log::{debug, trace};

use super::{TableError, hash_fn::hash};
use crate::linked_list::Chain;

/// A string to string map with separate chaining.
///
/// The bucket count is fixed for the lifetime of a table and only changes
/// through [`HashTable::resize`], which rebuilds the whole table.
/// Nothing resizes automatically, callers watch [`HashTable::load_factor`]
/// and decide for themselves.
#[derive(Debug)]
pub struct HashTable {
    buckets: Vec<Chain>,
    capacity: NonZeroUsize,
    items: usize,
}

impl HashTable {
    /// Creates a new `HashTable` with `capacity` many empty buckets
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidCapacity`] for a capacity of 0,
    /// [`TableError::OutOfMemory`] if the bucket array cannot be allocated.
    pub fn create(capacity: usize) -> Result<Self, TableError> {
        let cap = NonZeroUsize::new(capacity).ok_or(TableError::InvalidCapacity { capacity })?;

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|_| TableError::OutOfMemory { capacity })?;
        buckets.resize_with(capacity, Chain::default);

        trace!(target: "hash_table", "created table with {capacity} buckets");
        Ok(Self {
            buckets,
            capacity: cap,
            items: 0,
        })
    }

    /// Returns the number of buckets, or "slots" of the table
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the number of entries in the table
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Entries per bucket, only informational
    pub fn load_factor(&self) -> f32 {
        self.items as f32 / self.capacity() as f32
    }

    /// Bucket index `key` hashes to at the current capacity
    pub fn index_of(&self, key: &str) -> usize {
        hash(key, self.capacity)
    }

    /// Number of entries chained in bucket `index`, 0 when out of range
    pub fn chain_len(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, Chain::len)
    }

    /// Insert a key-value pair into the table,
    /// returning the previous value (if there was any)
    ///
    /// An existing key has its value replaced in place,
    /// a new key is appended to the tail of its bucket's chain.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let i = self.index_of(&key);
        let chain = &mut self.buckets[i];

        if let Some(entry) = chain.find_mut(&key) {
            trace!(target: "hash_table", "overwriting {key:?} in bucket {i}");
            return Some(std::mem::replace(&mut entry.value, value.into()));
        }

        trace!(target: "hash_table", "appending {key:?} to bucket {i}");
        chain.push_back(key, value);
        self.items += 1;
        None
    }

    /// Looks up the value stored under `key`.
    ///
    /// The returned `&str` is a view into the table, a miss is `None` and not an error.
    pub fn retrieve(&self, key: &str) -> Option<&str> {
        let i = self.index_of(key);
        self.buckets[i].find(key).map(|e| e.value())
    }

    /// Shorthand for `self.retrieve(key).is_some()`
    pub fn contains_key(&self, key: &str) -> bool {
        self.retrieve(key).is_some()
    }

    /// Removes `key` from the table and returns the value it held
    ///
    /// # Errors
    ///
    /// [`TableError::NotFound`] if `key` is not in the table, which is then left untouched
    pub fn remove(&mut self, key: &str) -> Result<String, TableError> {
        let i = self.index_of(key);

        match self.buckets[i].remove(key) {
            Some(entry) => {
                trace!(target: "hash_table", "removed {key:?} from bucket {i}");
                self.items -= 1;
                let (_, value) = entry.into_pair();
                Ok(value)
            }
            None => {
                debug!(target: "hash_table", "remove: {key:?} not found in bucket {i}");
                Err(TableError::NotFound { key: key.into() })
            }
        }
    }

    /// Doubles the number of buckets.
    ///
    /// Every entry is inserted again into a freshly created table, re-hashed against
    /// the new capacity, and the old table is destroyed afterwards.
    ///
    /// # Errors
    ///
    /// [`TableError::OutOfMemory`] if the new bucket array cannot be allocated.
    /// The new table is built before any entry is moved, so on error `self` is unchanged.
    pub fn resize(&mut self) -> Result<(), TableError> {
        let old_cap = self.capacity();
        // saturating, an impossible doubling is then reported by the allocation in `create`
        let mut grown = Self::create(old_cap.saturating_mul(2))?;

        for chain in self.buckets.drain(..).filter(|c| !c.is_empty()) {
            for entry in chain {
                let (key, value) = entry.into_pair();
                grown.insert(key, value);
            }
        }

        debug!(
            target: "hash_table",
            "resized table from {old_cap} to {} buckets, {} entries moved",
            grown.capacity(),
            grown.len()
        );
        // dropping the old, now bucketless, table
        *self = grown;
        Ok(())
    }

    /// Releases every entry, chain by chain, and then the bucket array itself.
    ///
    /// Taking `self` by value means a destroyed table cannot be used again.
    /// Letting a table go out of scope does the same.
    pub fn destroy(self) {
        trace!(
            target: "hash_table",
            "destroying table with {} buckets and {} entries",
            self.capacity(),
            self.len()
        );
    }
}
