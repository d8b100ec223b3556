//! Resizable hash table with separate chaining.
//!
//! [`ChainedHashMap`] is a dictionary, not a map: inserting a key that is
//! already present adds a second entry instead of replacing the first, and
//! every entry counts towards [`size`](ChainedHashMap::size). Lookups and
//! removals act on the first matching entry of the key's chain.
//!
//! Bucket selection is two-step. The table's [`BuildHasher`] produces a
//! 64-bit hash code, read as a signed integer, and a [`Compression`] policy
//! reduces that code to a bucket index. Both are fixed at construction, so an
//! entry's bucket depends only on its key and the current bucket count.
//!
//! Growth is explicit: [`resize`](ChainedHashMap::resize) doubles the bucket
//! count once the load factor exceeds 0.75, and is a no-op otherwise.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use self::compression::{Affine, Compression};

pub mod compression;
pub mod prime;

/// Bucket count used by [`ChainedHashMap::new`].
pub const DEFAULT_BUCKETS: usize = 101;

/// A key-value pair stored in a [`ChainedHashMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// The key stays immutable: changing it would strand the entry in the
    /// wrong bucket.
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

type Bucket<K, V> = Vec<Entry<K, V>>;

fn empty_table<K, V>(buckets: usize) -> Vec<Bucket<K, V>> {
    (0..buckets).map(|_| Vec::new()).collect()
}

/// Hash table with chaining, a pluggable [`Compression`] policy and
/// caller-triggered growth.
///
/// Invariant: every entry sits in the bucket that the compression policy
/// assigns to its key's hash code under the current bucket count.
#[derive(Clone)]
pub struct ChainedHashMap<K, V, C = Affine, S = FxBuildHasher> {
    table: Vec<Bucket<K, V>>,
    len: usize,
    compression: C,
    hasher: S,
}

impl<K, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ChainedHashMap<K, V> {
    /// Creates an empty table with [`DEFAULT_BUCKETS`] buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher_raw(DEFAULT_BUCKETS, Affine::default(), FxBuildHasher)
    }

    /// Creates an empty table meant to hold roughly `size_estimate` entries.
    ///
    /// The bucket count is the smallest prime in
    /// `[size_estimate, 2 * size_estimate]`.
    #[must_use]
    pub fn with_size_estimate(size_estimate: usize) -> Self {
        Self::with_compression(size_estimate, Affine::default())
    }
}

impl<K, V, C> ChainedHashMap<K, V, C> {
    /// Like [`with_size_estimate`](ChainedHashMap::with_size_estimate), with
    /// a custom compression policy.
    #[must_use]
    pub fn with_compression(size_estimate: usize, compression: C) -> Self {
        Self::with_hasher(size_estimate, compression, FxBuildHasher)
    }
}

impl<K, V, C, S> ChainedHashMap<K, V, C, S> {
    /// Creates an empty table with a custom compression policy and hash
    /// builder.
    #[must_use]
    pub fn with_hasher(size_estimate: usize, compression: C, hasher: S) -> Self {
        Self::with_hasher_raw(prime::bucket_count_for(size_estimate), compression, hasher)
    }

    fn with_hasher_raw(buckets: usize, compression: C, hasher: S) -> Self {
        Self {
            table: empty_table(buckets),
            len: 0,
            compression,
            hasher,
        }
    }

    /// Number of entries; duplicates each count.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.table.len() as f64
    }

    /// Entries that share a bucket with an earlier entry: the sum over all
    /// buckets of `max(0, chain length - 1)`.
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.table
            .iter()
            .map(|bucket| bucket.len().saturating_sub(1))
            .sum()
    }

    /// Removes every entry, keeping the bucket count.
    pub fn make_empty(&mut self) {
        self.table = empty_table(self.table.len());
        self.len = 0;
    }

    /// Iterates over all entries, bucket by bucket, each chain in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.table.iter().flatten()
    }
}

impl<K, V, C, S> ChainedHashMap<K, V, C, S>
where
    K: Hash + Eq,
    C: Compression,
    S: BuildHasher,
{
    #[allow(clippy::cast_possible_wrap)]
    fn index_for<Q>(&self, key: &Q, buckets: usize) -> usize
    where
        Q: Hash + ?Sized,
    {
        let code = self.hasher.hash_one(key) as i64;
        self.compression.compress(code, buckets)
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        self.index_for(key, self.table.len())
    }

    /// Appends a new entry to the key's bucket and returns it.
    ///
    /// Existing entries with an equal key are left untouched.
    pub fn insert(&mut self, key: K, value: V) -> &Entry<K, V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.table[index];
        bucket.push(Entry { key, value });
        self.len += 1;
        &bucket[bucket.len() - 1]
    }

    /// Returns the first entry in the key's chain with a matching key.
    pub fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key.borrow() == key)
    }

    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.table[index]
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
    }

    /// Removes and returns the first matching entry of the key's chain.
    /// Other entries with the same key are kept.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.table[index];
        let position = bucket
            .iter()
            .position(|entry| entry.key.borrow() == key)?;
        self.len -= 1;
        Some(bucket.remove(position))
    }

    /// Doubles the bucket count if the load factor exceeds 0.75.
    ///
    /// Every entry is rehashed into a freshly built table, which replaces the
    /// old one only once it is complete. Entries with equal keys keep their
    /// relative order. Returns `true` if the table grew.
    pub fn resize(&mut self) -> bool {
        let buckets = self.table.len();
        if self.len * 4 <= buckets * 3 {
            return false;
        }

        let grown = buckets * 2;
        let mut table = empty_table(grown);
        for entry in core::mem::take(&mut self.table).into_iter().flatten() {
            let index = self.index_for(&entry.key, grown);
            table[index].push(entry);
        }
        self.table = table;

        tracing::debug!(
            from = buckets,
            to = grown,
            entries = self.len,
            "hash table resized"
        );
        true
    }
}

impl<K, V, C, S> Debug for ChainedHashMap<K, V, C, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sends every code to bucket 0.
    struct SingleBucket;

    impl Compression for SingleBucket {
        fn compress(&self, _code: i64, _buckets: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_insert_find_remove() {
        let mut map = ChainedHashMap::new();
        map.insert("cs61b", "hardcore");

        assert_eq!(map.find("cs61b").map(Entry::value), Some(&"hardcore"));
        assert_eq!(map.size(), 1);

        let removed = map.remove("cs61b").unwrap();
        assert_eq!(removed.into_parts(), ("cs61b", "hardcore"));
        assert!(map.find("cs61b").is_none());
        assert!(map.is_empty());
        assert!(map.remove("cs61b").is_none());
    }

    #[test]
    fn test_duplicate_keys_counted_separately() {
        let mut map = ChainedHashMap::new();
        map.insert(7, 'a');
        map.insert(7, 'b');
        map.insert(8, 'c');
        assert_eq!(map.size(), 3);

        assert_eq!(map.remove(&7).map(|e| *e.value()), Some('a'));
        assert_eq!(map.size(), 2);
        assert_eq!(map.find(&7).map(|e| *e.value()), Some('b'));
        assert_eq!(map.find(&8).map(|e| *e.value()), Some('c'));

        assert!(map.remove(&7).is_some());
        assert!(map.remove(&7).is_none());
        assert_eq!(map.size(), 1);
    }

    #[test]
    fn test_find_mut_updates_value() {
        let mut map = ChainedHashMap::new();
        map.insert(1u32, 10);
        *map.find_mut(&1).unwrap().value_mut() += 5;
        assert_eq!(map.find(&1).map(|e| *e.value()), Some(15));
    }

    #[test]
    fn test_size_estimate_picks_prime() {
        let map: ChainedHashMap<u32, u32> = ChainedHashMap::with_size_estimate(90);
        assert_eq!(map.bucket_count(), 97);
        assert_eq!(ChainedHashMap::<u32, u32>::new().bucket_count(), 101);
    }

    #[test]
    fn test_make_empty() {
        let mut map = ChainedHashMap::new();
        for i in 0..50 {
            map.insert(i, i);
        }
        map.make_empty();

        assert!(map.is_empty());
        assert_eq!(map.bucket_count(), 101);
        assert!(map.find(&3).is_none());

        map.insert(3, 30);
        assert_eq!(map.find(&3).map(|e| *e.value()), Some(30));
    }

    #[test]
    fn test_resize_only_above_threshold() {
        let mut map = ChainedHashMap::with_size_estimate(4);
        assert_eq!(map.bucket_count(), 5);

        // 3 / 5 = 0.6
        for i in 0..3 {
            map.insert(i, i);
        }
        assert!(!map.resize());
        assert_eq!(map.bucket_count(), 5);

        // 4 / 5 = 0.8
        map.insert(3, 3);
        assert!(map.resize());
        assert_eq!(map.bucket_count(), 10);
        assert!(map.load_factor() <= 0.75);
    }

    #[test]
    fn test_resize_preserves_entries() {
        let mut map = ChainedHashMap::with_size_estimate(2);
        for i in 0..200u64 {
            map.insert(i % 50, i);
            map.resize();
        }
        assert_eq!(map.size(), 200);
        assert_eq!(map.iter().count(), 200);

        // First entry for each key is still the earliest one inserted.
        for key in 0..50u64 {
            assert_eq!(map.find(&key).map(|e| *e.value()), Some(key));
        }
        for key in 0..50u64 {
            for expected in (0..4).map(|round| key + round * 50) {
                assert_eq!(map.remove(&key).map(|e| *e.value()), Some(expected));
            }
            assert!(map.find(&key).is_none());
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_collisions() {
        let mut map: ChainedHashMap<u32, (), SingleBucket> =
            ChainedHashMap::with_compression(10, SingleBucket);
        assert_eq!(map.collisions(), 0);
        map.insert(1, ());
        assert_eq!(map.collisions(), 0);
        for key in 2..=5 {
            map.insert(key, ());
        }
        assert_eq!(map.collisions(), 4);

        // A single chain still resolves every key.
        for key in 1..=5 {
            assert!(map.find(&key).is_some());
        }
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map: ChainedHashMap<alloc::string::String, u8> = ChainedHashMap::new();
        map.insert("vertex".into(), 1);
        assert!(map.find("vertex").is_some());
        assert!(map.remove("vertex").is_some());
    }
}
