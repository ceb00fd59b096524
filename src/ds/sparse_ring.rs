//! Sparse ring buffer for time-indexed samples.
//!
//! A ring buffer that is sparse in time, not space: like a ring buffer it
//! uses fixed-size arrays sized for the largest possible number of samples,
//! but like a linked list each live slot carries the index of the slot
//! holding the next-larger key. At most `capacity` entries are retained, all
//! with keys inside a sliding window of width `capacity`; admitting a new
//! maximum key evicts everything that falls out of the window.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SparseRing<V>, capacity = 8                          │
//! │                                                                         │
//! │   A key k occupies slot k % 8. After put(10,a), put(12,b), put(15,c):   │
//! │                                                                         │
//! │   slot:      0     1     2     3     4     5     6     7                │
//! │            ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐            │
//! │   values:  │     │     │  a  │     │  b  │     │     │  c  │            │
//! │            ├─────┼─────┼─────┼─────┼─────┼─────┼─────┼─────┤            │
//! │   next:    │  -  │  -  │  4  │  -  │  7  │  -  │  -  │  -  │            │
//! │            └─────┴─────┴─────┴─────┴──▲──┴─────┴─────┴──▲──┘            │
//! │                     first = 2 ────────┘     last = 7 ───┘               │
//! │                                                                         │
//! │   window:  first_key = 10, start = 8 (key-aligned origin)               │
//! │   key reconstruction: key(i) = start + i, plus capacity when the        │
//! │   chain has wrapped past the end of the array (i < first)               │
//! │                                                                         │
//! │   put(17,d): evicts nothing (17 - 10 < 8), appends at slot 1:           │
//! │   next[7] = 1, last = 1, key(1) = 8 + 1 + 8 = 17                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`SparseRing`]: the buffer itself
//! - [`Iter`]: borrowed iterator yielding owned `(key, value)` pairs in
//!   increasing key order
//! - [`IntoIter`]: owning iterator, same order
//!
//! ## Operations
//!
//! | Operation             | Description                         | Complexity   |
//! |-----------------------|-------------------------------------|--------------|
//! | [`put`]               | Insert or overwrite a sample        | O(1) amort.¹ |
//! | [`get`] / [`peek`]    | Point lookup by key                 | O(1)         |
//! | [`contains_key`]      | Liveness check                      | O(1)         |
//! | [`remove_before`]     | Drop all keys below a threshold     | O(removed)   |
//! | [`iter`]              | In-order traversal                  | O(len)       |
//! | [`clear`]             | Reset to empty                      | O(1)         |
//!
//! ¹ Appending a new maximum key is O(1) plus eviction cost; inserting a key
//! strictly between the current minimum and maximum scans the chain, O(position).
//!
//! [`put`]: SparseRing::put
//! [`get`]: SparseRing::get
//! [`peek`]: SparseRing::peek
//! [`contains_key`]: SparseRing::contains_key
//! [`remove_before`]: SparseRing::remove_before
//! [`iter`]: SparseRing::iter
//! [`clear`]: SparseRing::clear
//!
//! ## Example Usage
//!
//! ```
//! use sparsering::ds::SparseRing;
//!
//! // Retain samples for the last 100 time units
//! let mut ring = SparseRing::new(100);
//!
//! ring.put(10, 1u64).unwrap();
//! ring.put(20, 2).unwrap();
//! assert_eq!(ring.get(10), Ok(1));
//!
//! // 110 - 10 >= 100: key 10 slides out of the window
//! ring.put(110, 3).unwrap();
//! assert!(!ring.contains_key(10));
//! assert_eq!(ring.to_vec(), vec![(20, 2), (110, 3)]);
//! ```
//!
//! ## Thread Safety
//!
//! `SparseRing` is not thread-safe. It assumes a single logical mutator;
//! concurrent use requires external synchronization.
//!
//! ## Implementation Notes
//!
//! - Both backing arrays are allocated once at construction and never
//!   resized; memory is proportional to `capacity`, never to the key range.
//! - Slots are reused in place. A slot vacated by eviction keeps its stale
//!   value until the next write; liveness is decided by chain membership and
//!   a per-slot write epoch, never by the value.
//! - `clear()` is O(1): it bumps the buffer epoch instead of wiping the
//!   arrays, which invalidates every stale chain pointer at once.
//! - `debug_validate_invariants()` is available in debug/test builds.

use std::fmt;

use crate::error::{ConfigError, SampleError};

/// Cursor block present whenever the buffer holds at least one entry.
///
/// Invariants: `first == first_key % capacity` and
/// `start == first_key - first_key % capacity`. Every operation that changes
/// `first_key` re-derives the other two fields through [`Window::align_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    /// Key-aligned origin of the slot-to-key mapping (a multiple of capacity).
    start: u64,
    /// Slot holding the smallest live key.
    first: usize,
    /// Slot holding the largest live key.
    last: usize,
    /// Key of the entry at `first`.
    first_key: u64,
}

impl Window {
    /// Reconstructs the absolute key occupying a live slot.
    ///
    /// The chain can wrap past the end of the array back to slot 0, so slots
    /// numerically before `first` belong to the following key block.
    fn key_for_slot(&self, index: usize, capacity: usize) -> u64 {
        let mut key = self.start + index as u64;
        if index < self.first {
            key += capacity as u64;
        }
        key
    }

    /// Re-derives `first`/`start` after `first_key` moves to `key`.
    fn align_to(&mut self, key: u64, capacity: usize) {
        let offset = key % capacity as u64;
        self.first_key = key;
        self.first = offset as usize;
        self.start = key - offset;
    }
}

/// Fixed-capacity sparse ring buffer mapping `u64` keys to values.
///
/// Retains at most `capacity` samples whose keys lie within a sliding window
/// of width `capacity`; keys are typically timestamps. Values are copied in
/// and out (`V: Copy + Default`); the key type stays `u64` because the
/// `key % capacity` slot mapping is what makes the structure work.
///
/// Implements [`Clone`], [`PartialEq`], [`Eq`], [`Hash`], [`IntoIterator`],
/// and a [`Debug`](fmt::Debug) form of `{k1:v1,k2:v2}` in key order.
/// Equality and hashing compare logical content, not the raw backing arrays,
/// since vacated slots keep stale data until overwritten.
///
/// # Example
///
/// ```
/// use sparsering::ds::SparseRing;
///
/// let mut ring = SparseRing::new(100);
/// ring.put(10, 1i32).unwrap();
/// ring.put(20, 2).unwrap();
///
/// assert_eq!(ring.len(), 2);
/// assert_eq!(format!("{ring:?}"), "{10:1,20:2}");
///
/// ring.remove_before(15);
/// assert_eq!(format!("{ring:?}"), "{20:2}");
/// ```
#[derive(Clone)]
pub struct SparseRing<V> {
    capacity: usize,
    /// Indexed by `key % capacity`.
    values: Box<[V]>,
    /// Indexed by `key % capacity`; `Some(j)` links to the slot holding the
    /// next-larger live key, `None` means end of chain or not live.
    next: Box<[Option<usize>]>,
    /// Write epoch per slot; a slot is live only if its epoch is current.
    epochs: Box<[u64]>,
    epoch: u64,
    window: Option<Window>,
    len: usize,
}

impl<V: Copy + Default> SparseRing<V> {
    /// Creates an empty buffer, or fails if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    ///
    /// let ring = SparseRing::<u64>::try_new(100).unwrap();
    /// assert!(ring.is_empty());
    /// assert!(SparseRing::<u64>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(Self {
            capacity,
            values: vec![V::default(); capacity].into_boxed_slice(),
            next: vec![None; capacity].into_boxed_slice(),
            epochs: vec![0; capacity].into_boxed_slice(),
            // Slots start at epoch 0, so epoch 1 marks them all stale.
            epoch: 1,
            window: None,
            len: 0,
        })
    }

    /// Creates an empty buffer with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; use [`try_new`](Self::try_new) for a
    /// fallible variant.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    ///
    /// let ring: SparseRing<u64> = SparseRing::new(100);
    /// assert_eq!(ring.capacity(), 100);
    /// assert_eq!(ring.len(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(ring) => ring,
            Err(err) => panic!("SparseRing::new: {err}"),
        }
    }

    /// Returns the configured capacity (window width in key units).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the smallest live key, or `None` if empty.
    pub fn first_key(&self) -> Option<u64> {
        self.window.map(|w| w.first_key)
    }

    /// Returns the largest live key, or `None` if empty.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    ///
    /// let mut ring = SparseRing::new(100);
    /// assert_eq!(ring.last_key(), None);
    ///
    /// ring.put(10, 1u64).unwrap();
    /// ring.put(20, 2).unwrap();
    /// assert_eq!(ring.first_key(), Some(10));
    /// assert_eq!(ring.last_key(), Some(20));
    /// ```
    pub fn last_key(&self) -> Option<u64> {
        self.window.map(|w| w.key_for_slot(w.last, self.capacity))
    }

    /// Resets the buffer to empty in O(1).
    ///
    /// The backing arrays are not wiped; bumping the buffer epoch invalidates
    /// every slot at once, so stale chain pointers can never resurrect an
    /// entry after a clear.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    ///
    /// let mut ring = SparseRing::new(100);
    /// ring.put(10, 1u64).unwrap();
    /// ring.clear();
    ///
    /// assert!(ring.is_empty());
    /// assert!(!ring.contains_key(10));
    /// ```
    pub fn clear(&mut self) {
        self.window = None;
        self.len = 0;
        self.epoch += 1;
    }

    /// Clears the buffer (no heap allocations to shrink).
    ///
    /// Equivalent to [`clear`](Self::clear) since the backing arrays are
    /// fixed at construction.
    pub fn clear_shrink(&mut self) {
        self.clear();
    }

    /// Returns `true` if `key` is currently live.
    ///
    /// A key is live when it falls inside the half-open window
    /// `[first_key, first_key + capacity)` and its slot is part of the live
    /// chain. The chain test guards against stale slot data left over from
    /// an evicted entry that has not been overwritten yet.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    ///
    /// let mut ring = SparseRing::new(100);
    /// ring.put(10, 1u64).unwrap();
    ///
    /// assert!(ring.contains_key(10));
    /// assert!(!ring.contains_key(11));
    /// ```
    pub fn contains_key(&self, key: u64) -> bool {
        let Some(w) = self.window else {
            return false;
        };
        if key < w.first_key || key - w.first_key >= self.capacity as u64 {
            return false;
        }
        let mut index = (key - w.start) as usize;
        if index >= self.capacity {
            index -= self.capacity;
        }
        self.epochs[index] == self.epoch && (index == w.last || self.next[index].is_some())
    }

    /// Returns the value for `key`, or [`SampleError::NotFound`].
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    /// use sparsering::error::SampleError;
    ///
    /// let mut ring = SparseRing::new(100);
    /// ring.put(10, 1u64).unwrap();
    ///
    /// assert_eq!(ring.get(10), Ok(1));
    /// assert_eq!(ring.get(99), Err(SampleError::NotFound { key: 99 }));
    /// ```
    pub fn get(&self, key: u64) -> Result<V, SampleError> {
        if !self.contains_key(key) {
            return Err(SampleError::NotFound { key });
        }
        Ok(self.values[self.slot_of(key)])
    }

    /// Returns the value for `key`, or `None` if absent.
    ///
    /// Option-returning twin of [`get`](Self::get).
    pub fn peek(&self, key: u64) -> Option<V> {
        self.get(key).ok()
    }

    /// Sets the entry at `key` to `value`, evicting everything that falls
    /// out of the window `[key - capacity + 1, key]` when `key` becomes the
    /// new maximum.
    ///
    /// Keys need not arrive in increasing order:
    ///
    /// - a key above the current maximum appends in O(1) (the common case);
    /// - re-putting a live key overwrites its value in place;
    /// - a key below the current minimum prepends in O(1);
    /// - a key strictly between minimum and maximum is spliced into the
    ///   chain after an O(position) forward scan.
    ///
    /// # Errors
    ///
    /// [`SampleError::OutOfRange`] if `key` is more than `capacity - 1`
    /// below the current maximum key: no eviction could make the window
    /// admit it. The buffer is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    ///
    /// let mut ring = SparseRing::new(100);
    /// ring.put(10, 1u64).unwrap();
    /// ring.put(20, 2).unwrap();
    /// ring.put(15, 3).unwrap(); // spliced between 10 and 20
    ///
    /// assert_eq!(ring.to_vec(), vec![(10, 1), (15, 3), (20, 2)]);
    ///
    /// // 100 below the maximum: unrepresentable
    /// ring.put(120, 4).unwrap();
    /// assert!(ring.put(20, 9).is_err());
    /// ```
    pub fn put(&mut self, key: u64, value: V) -> Result<(), SampleError> {
        let cap = self.capacity as u64;
        if let Some(last_key) = self.last_key() {
            if last_key.saturating_sub(key) >= cap {
                return Err(SampleError::OutOfRange {
                    key,
                    min_admissible: last_key - (cap - 1),
                });
            }
        }
        // Admitting `key` narrows the window: nothing at or below
        // `key - capacity` may survive.
        self.remove_before(key.saturating_sub(cap - 1));

        let index = self.slot_of(key);
        let Some(mut w) = self.window else {
            // initial entry into an empty buffer
            self.values[index] = value;
            self.next[index] = None;
            self.epochs[index] = self.epoch;
            let mut w = Window {
                start: 0,
                first: index,
                last: index,
                first_key: key,
            };
            w.align_to(key, self.capacity);
            self.window = Some(w);
            self.len = 1;
            return Ok(());
        };

        let last_key = w.key_for_slot(w.last, self.capacity);
        if key > last_key {
            // append (the common case)
            self.values[index] = value;
            self.next[index] = None;
            self.epochs[index] = self.epoch;
            self.next[w.last] = Some(index);
            w.last = index;
            self.len += 1;
        } else if key == last_key {
            // refresh the newest sample in place
            self.values[index] = value;
        } else if key < w.first_key {
            // prepend, before the previous first entry
            self.values[index] = value;
            self.next[index] = Some(w.first);
            self.epochs[index] = self.epoch;
            w.align_to(key, self.capacity);
            self.len += 1;
        } else {
            // first_key <= key < last_key: scan forward to the splice point
            let mut prev: Option<usize> = None;
            let mut cur = w.first;
            while w.key_for_slot(cur, self.capacity) < key {
                let Some(next) = self.next[cur] else {
                    debug_assert!(false, "live chain ended before its last entry");
                    break;
                };
                prev = Some(cur);
                cur = next;
            }
            if cur == index {
                // key already live: overwrite without relinking
                self.values[index] = value;
            } else {
                self.values[index] = value;
                self.next[index] = Some(cur);
                self.epochs[index] = self.epoch;
                debug_assert!(prev.is_some(), "splice below first_key");
                if let Some(prev) = prev {
                    self.next[prev] = Some(index);
                }
                self.len += 1;
            }
        }
        self.window = Some(w);
        Ok(())
    }

    /// Removes every live entry whose key is strictly less than `threshold`.
    ///
    /// Entries with key `>= threshold` are untouched; a no-op on an empty
    /// buffer. Cost is O(number of entries removed), or O(1) when the whole
    /// buffer falls below the threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    ///
    /// let mut ring = SparseRing::new(100);
    /// for key in [10, 20, 30] {
    ///     ring.put(key, key as u32).unwrap();
    /// }
    ///
    /// ring.remove_before(25);
    /// assert_eq!(ring.to_vec(), vec![(30, 30)]);
    /// ```
    pub fn remove_before(&mut self, threshold: u64) {
        let Some(w) = self.window else {
            return;
        };
        // Fast path: the entire buffer falls below the threshold. The epoch
        // bump inside clear() retires every chain pointer at once, so this
        // stays O(1) instead of popping entry by entry.
        if w.key_for_slot(w.last, self.capacity) < threshold {
            self.clear();
            return;
        }
        while let Some(w) = self.window {
            if w.first_key >= threshold {
                break;
            }
            self.pop_first();
        }
    }

    /// Returns all live entries as `(key, value)` pairs in increasing key
    /// order.
    pub fn to_vec(&self) -> Vec<(u64, V)> {
        self.iter().collect()
    }

    /// Returns an iterator over `(key, value)` pairs in strictly increasing
    /// key order.
    ///
    /// Each item is an owned pair and stays valid after the iterator
    /// advances. Every call starts a fresh traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsering::ds::SparseRing;
    ///
    /// let mut ring = SparseRing::new(100);
    /// ring.put(20, 2u64).unwrap();
    /// ring.put(10, 1).unwrap();
    ///
    /// let entries: Vec<_> = ring.iter().collect();
    /// assert_eq!(entries, vec![(10, 1), (20, 2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            ring: self,
            current: self.window.map(|w| w.first),
            remaining: self.len,
        }
    }

    /// Returns an approximate memory footprint in bytes.
    ///
    /// Constant for a given capacity regardless of how many entries are
    /// live.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.values.len() * std::mem::size_of::<V>()
            + self.next.len() * std::mem::size_of::<Option<usize>>()
            + self.epochs.len() * std::mem::size_of::<u64>()
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns a debug snapshot of all entries in increasing key order.
    pub fn debug_snapshot(&self) -> Vec<(u64, V)> {
        self.to_vec()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.len <= self.capacity);
        let Some(w) = self.window else {
            assert_eq!(self.len, 0);
            return;
        };
        assert!(self.len > 0);
        assert!(w.first < self.capacity);
        assert!(w.last < self.capacity);
        assert_eq!(w.first, (w.first_key % self.capacity as u64) as usize);
        assert_eq!(w.start, w.first_key - w.first_key % self.capacity as u64);

        let mut count = 0usize;
        let mut cur = Some(w.first);
        let mut prev_key: Option<u64> = None;
        while let Some(index) = cur {
            let key = w.key_for_slot(index, self.capacity);
            assert_eq!((key % self.capacity as u64) as usize, index);
            assert!(key >= w.first_key);
            assert!(key - w.first_key < self.capacity as u64, "window span overflow");
            if let Some(prev) = prev_key {
                assert!(key > prev, "chain keys must be strictly increasing");
            }
            assert_eq!(self.epochs[index], self.epoch);
            if self.next[index].is_none() {
                assert_eq!(index, w.last);
            }
            prev_key = Some(key);
            count += 1;
            assert!(count <= self.len, "chain longer than len");
            cur = self.next[index];
        }
        assert_eq!(count, self.len);
    }

    /// Candidate slot for a key.
    fn slot_of(&self, key: u64) -> usize {
        (key % self.capacity as u64) as usize
    }

    /// Pops the entry with the smallest key and rebases the window on the
    /// new first entry.
    fn pop_first(&mut self) {
        let Some(mut w) = self.window else {
            return;
        };
        let popped = w.first;
        let next = self.next[popped];
        self.next[popped] = None;
        self.len -= 1;
        match next {
            None => {
                debug_assert_eq!(self.len, 0);
                self.window = None;
            }
            Some(new_first) => {
                let new_first_key = w.key_for_slot(new_first, self.capacity);
                w.align_to(new_first_key, self.capacity);
                debug_assert_eq!(w.first, new_first);
                self.window = Some(w);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Debug — `{k1:v1,k2:v2}` in key order; part of the observable contract
// ---------------------------------------------------------------------------

impl<V: Copy + Default + fmt::Debug> fmt::Debug for SparseRing<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut sep = "";
        for (key, value) in self.iter() {
            write!(f, "{sep}{key}:{value:?}")?;
            sep = ",";
        }
        f.write_str("}")
    }
}

// ---------------------------------------------------------------------------
// PartialEq, Eq, Hash — compare logical content, not the raw backing arrays
// (raw derive would flag stale slots as differences)
// ---------------------------------------------------------------------------

impl<V: Copy + Default + PartialEq> PartialEq for SparseRing<V> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<V: Copy + Default + Eq> Eq for SparseRing<V> {}

impl<V: Copy + Default + std::hash::Hash> std::hash::Hash for SparseRing<V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.len.hash(state);
        for entry in self.iter() {
            entry.hash(state);
        }
    }
}

// ---------------------------------------------------------------------------
// Iterator types
// ---------------------------------------------------------------------------

/// Borrowed iterator over a [`SparseRing`], yielding owned `(key, value)`
/// pairs in strictly increasing key order.
///
/// Created by [`SparseRing::iter`].
#[derive(Clone)]
pub struct Iter<'a, V> {
    ring: &'a SparseRing<V>,
    current: Option<usize>,
    remaining: usize,
}

impl<V: Copy + Default> Iterator for Iter<'_, V> {
    type Item = (u64, V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let w = self.ring.window?;
        let key = w.key_for_slot(index, self.ring.capacity);
        let value = self.ring.values[index];
        self.current = self.ring.next[index];
        self.remaining = self.remaining.saturating_sub(1);
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Copy + Default> ExactSizeIterator for Iter<'_, V> {}

/// Owning iterator over a [`SparseRing`], yielding `(key, value)` pairs in
/// strictly increasing key order.
///
/// Created by calling [`IntoIterator::into_iter`] on a `SparseRing`.
#[derive(Clone)]
pub struct IntoIter<V> {
    ring: SparseRing<V>,
    current: Option<usize>,
    remaining: usize,
}

impl<V: Copy + Default> Iterator for IntoIter<V> {
    type Item = (u64, V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let w = self.ring.window?;
        let key = w.key_for_slot(index, self.ring.capacity);
        let value = self.ring.values[index];
        self.current = self.ring.next[index];
        self.remaining = self.remaining.saturating_sub(1);
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Copy + Default> ExactSizeIterator for IntoIter<V> {}

impl<V: Copy + Default> IntoIterator for SparseRing<V> {
    type Item = (u64, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            current: self.window.map(|w| w.first),
            remaining: self.len,
            ring: self,
        }
    }
}

impl<'a, V: Copy + Default> IntoIterator for &'a SparseRing<V> {
    type Item = (u64, V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
