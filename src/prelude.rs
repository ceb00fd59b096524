pub use crate::ds::{IntoIter, Iter, SparseRing};
pub use crate::error::{ConfigError, SampleError};
