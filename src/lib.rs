//! sparsering: a fixed-capacity, time-indexed sample buffer.
//!
//! The crate provides [`SparseRing`](crate::ds::SparseRing), a ring buffer
//! that is sparse in time, not space: two fixed-size arrays hold at most
//! `capacity` samples whose keys fall within a sliding window of width
//! `capacity`, threaded into an ordered chain by slot index. Insertion and
//! lookup are O(1); iteration yields `(key, value)` pairs in increasing key
//! order; keys that fall out of the window are evicted automatically.
//!
//! See `src/ds/sparse_ring.rs` for the data-structure internals and
//! invariants.

pub mod ds;
pub mod error;
pub mod prelude;
