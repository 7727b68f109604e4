//! Construction errors.
use core::fmt;

/// Errors that can occur when building sequences.
///
/// Each variant shows an example of how it can be produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `Zip::spread([[1], [2], [3]], |[a, b]| a + b)`
    ///
    /// A combiner taking a fixed number of values
    /// was given a different number of sources.
    Arity {
        /// number of values the combiner takes
        expected: usize,
        /// number of sources
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Arity { expected, found } => write!(
                f,
                "combiner takes {expected} values, but {found} sources were given"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
