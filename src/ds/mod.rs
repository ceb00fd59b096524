pub mod sparse_ring;

pub use sparse_ring::{IntoIter, Iter, SparseRing};
