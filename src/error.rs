//! Error types for the sparsering library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (zero capacity).
//! - [`SampleError`]: Returned by [`SparseRing::get`] and [`SparseRing::put`]
//!   for per-key failures (absent key, key too old to represent).
//!
//! ## Example Usage
//!
//! ```
//! use sparsering::error::ConfigError;
//! use sparsering::ds::SparseRing;
//!
//! // Fallible constructor for user-configurable parameters
//! let ring: Result<SparseRing<u64>, ConfigError> = SparseRing::try_new(100);
//! assert!(ring.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = SparseRing::<u64>::try_new(0);
//! assert!(bad.is_err());
//! ```
//!
//! [`SparseRing::get`]: crate::ds::SparseRing::get
//! [`SparseRing::put`]: crate::ds::SparseRing::put

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by [`SparseRing::try_new`](crate::ds::SparseRing::try_new).
/// Carries a human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use sparsering::ds::SparseRing;
///
/// let err = SparseRing::<u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// SampleError
// ---------------------------------------------------------------------------

/// Per-key error returned by [`SparseRing`](crate::ds::SparseRing) operations.
///
/// - [`NotFound`](SampleError::NotFound) is recoverable: the caller decides
///   the fallback for a key that is absent or already evicted.
/// - [`OutOfRange`](SampleError::OutOfRange) signals misuse of the window
///   ordering assumptions: the key is more than `capacity - 1` below the
///   largest retained key, so no eviction could make room for it. The buffer
///   is left untouched.
///
/// # Example
///
/// ```
/// use sparsering::ds::SparseRing;
/// use sparsering::error::SampleError;
///
/// let mut ring = SparseRing::new(100);
/// ring.put(250, 7u64).unwrap();
///
/// assert_eq!(ring.get(10), Err(SampleError::NotFound { key: 10 }));
/// assert_eq!(
///     ring.put(150, 1),
///     Err(SampleError::OutOfRange { key: 150, min_admissible: 151 }),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// Lookup of a key that is not currently live.
    NotFound {
        /// The key that was looked up.
        key: u64,
    },
    /// Insertion of a key too far in the past to be represented.
    OutOfRange {
        /// The key that was rejected.
        key: u64,
        /// The smallest key the current window can still admit.
        min_admissible: u64,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::NotFound { key } => {
                write!(f, "no entry for key {key}")
            }
            SampleError::OutOfRange {
                key,
                min_admissible,
            } => {
                write!(
                    f,
                    "key {key} is older than the representable window \
                     (smallest admissible key is {min_admissible})"
                )
            }
        }
    }
}

impl std::error::Error for SampleError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- SampleError ------------------------------------------------------

    #[test]
    fn not_found_display_names_key() {
        let err = SampleError::NotFound { key: 42 };
        assert_eq!(err.to_string(), "no entry for key 42");
    }

    #[test]
    fn out_of_range_display_names_bounds() {
        let err = SampleError::OutOfRange {
            key: 5,
            min_admissible: 11,
        };
        let msg = err.to_string();
        assert!(msg.contains("key 5"));
        assert!(msg.contains("11"));
    }

    #[test]
    fn sample_error_is_copy_and_eq() {
        let a = SampleError::NotFound { key: 1 };
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, SampleError::NotFound { key: 2 });
    }

    #[test]
    fn sample_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<SampleError>();
    }
}
