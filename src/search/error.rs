//! Error types for the search entry points.
//!
//! The searches themselves are total: a missing pair is `None` and an empty
//! result set is an empty `Vec`. The only recognized error is an invalid
//! argument to the arity-dispatching entry point.

/// Represents a request for a combination arity the searches do not cover.
///
/// Only pairs (arity 2) and quadruplets (arity 4) can be searched; any other
/// arity is rejected before the input sequence is examined.
///
/// # Examples
///
/// ```rust
/// use sumscan::search::UnsupportedArityError;
///
/// let error = UnsupportedArityError { arity: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "combination arity 3 is not supported; only pairs (2) and quadruplets (4) can be searched"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedArityError {
    /// The arity that was requested.
    pub arity: usize,
}

impl std::fmt::Display for UnsupportedArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "combination arity {} is not supported; only pairs (2) and quadruplets (4) can be searched",
            self.arity
        )
    }
}

impl std::error::Error for UnsupportedArityError {}

/// Represents errors that can occur when searching for combinations.
///
/// This enum provides a unified error type for the search entry points.
/// Currently, it only contains `UnsupportedArity`, but it is designed to be
/// extensible for future error types.
///
/// # Examples
///
/// ```rust
/// use sumscan::search::{SearchError, UnsupportedArityError};
///
/// let error = SearchError::UnsupportedArity(UnsupportedArityError { arity: 5 });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The requested combination arity is not 2 or 4.
    UnsupportedArity(UnsupportedArityError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedArity(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SearchError {}

static_assertions::assert_impl_all!(SearchError: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_arity_error_display() {
        let error = UnsupportedArityError { arity: 3 };
        assert_eq!(
            format!("{error}"),
            "combination arity 3 is not supported; only pairs (2) and quadruplets (4) can be searched"
        );
    }

    #[test]
    fn test_unsupported_arity_error_display_zero() {
        let error = UnsupportedArityError { arity: 0 };
        assert_eq!(
            format!("{error}"),
            "combination arity 0 is not supported; only pairs (2) and quadruplets (4) can be searched"
        );
    }

    #[test]
    fn test_search_error_display() {
        let error = SearchError::UnsupportedArity(UnsupportedArityError { arity: 5 });
        assert_eq!(
            format!("{error}"),
            "combination arity 5 is not supported; only pairs (2) and quadruplets (4) can be searched"
        );
    }

    #[test]
    fn test_unsupported_arity_error_equality() {
        let error1 = UnsupportedArityError { arity: 3 };
        let error2 = UnsupportedArityError { arity: 3 };
        let error3 = UnsupportedArityError { arity: 5 };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_search_error_equality() {
        let error1 = SearchError::UnsupportedArity(UnsupportedArityError { arity: 3 });
        let error2 = SearchError::UnsupportedArity(UnsupportedArityError { arity: 3 });
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_unsupported_arity_error_clone() {
        let error = UnsupportedArityError { arity: 3 };
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_search_error_clone() {
        let error = SearchError::UnsupportedArity(UnsupportedArityError { arity: 3 });
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_unsupported_arity_error_debug() {
        let error = UnsupportedArityError { arity: 3 };
        let debug_string = format!("{error:?}");
        assert!(debug_string.contains("UnsupportedArityError"));
        assert!(debug_string.contains('3'));
    }

    #[test]
    fn test_search_error_debug() {
        let error = SearchError::UnsupportedArity(UnsupportedArityError { arity: 3 });
        let debug_string = format!("{error:?}");
        assert!(debug_string.contains("UnsupportedArity"));
    }

    #[test]
    fn test_search_error_source() {
        use std::error::Error;

        let error = SearchError::UnsupportedArity(UnsupportedArityError { arity: 3 });
        assert!(error.source().is_none());
    }

    #[test]
    fn test_unsupported_arity_error_is_error() {
        use std::error::Error;

        let error = UnsupportedArityError { arity: 3 };
        let _: &dyn Error = &error;
    }
}
