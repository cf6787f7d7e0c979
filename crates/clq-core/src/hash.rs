//! Fast hash map type aliases.
//!
//! Type aliases for [`FxHashMap`] from the `rustc-hash` crate. The Fx hash
//! algorithm is roughly 2x faster than the standard library's default hasher
//! for the short string keys this crate deals in, and denial-of-service
//! resistance is irrelevant for an index built from trusted embedded data.

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// The hasher used by [`FxHashMap`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// Creates a new [`FxHashMap`] with the specified capacity.
///
/// # Examples
///
/// ```
/// use clq_core::fx_hash_map_with_capacity;
///
/// let map: clq_core::FxHashMap<String, u32> = fx_hash_map_with_capacity(64);
/// assert!(map.capacity() >= 64);
/// ```
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default())
}
