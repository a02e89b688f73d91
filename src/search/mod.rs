//! Fixed-size sum combination search.
//!
//! This module finds combinations of a fixed size (2 or 4) inside an integer
//! sequence whose elements sum to a target value:
//!
//! - [`find_pair`]: first-found pair of positions (two-sum)
//! - [`find_pairs`]: all unique value pairs (exhaustive two-sum)
//! - [`find_quadruplets`]: all unique value quadruplets (four-sum)
//! - [`find_combinations`]: arity-dispatching entry point
//!
//! # Duplicate Suppression
//!
//! The exhaustive searches operate on a sorted copy of the input and skip
//! loop iterations whose leading value repeats the previous one, so a
//! sequence with repeated values never yields two combinations with the same
//! value multiset. The skips are guard conditions on adjacent sorted values,
//! which also fixes the emission order: combinations come out in ascending
//! lexicographic order of their values.
//!
//! # Examples
//!
//! ## First-found pair
//!
//! ```rust
//! use sumscan::search::find_pair;
//!
//! // The earliest matching positions win
//! assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some((0, 1)));
//!
//! // An element never pairs with itself at one position
//! assert_eq!(find_pair(&[5], 10), None);
//! assert_eq!(find_pair(&[3, 3], 6), Some((0, 1)));
//! ```
//!
//! ## Exhaustive quadruplet search
//!
//! ```rust
//! use sumscan::search::{Combination, find_quadruplets};
//!
//! let quadruplets = find_quadruplets(&[1, 0, -1, 0, -2, 2], 0);
//!
//! assert_eq!(
//!     quadruplets,
//!     vec![
//!         Combination::quadruplet(-2, -1, 1, 2),
//!         Combination::quadruplet(-2, 0, 0, 2),
//!         Combination::quadruplet(-1, 0, 0, 1),
//!     ]
//! );
//! ```
//!
//! ## Arity dispatch
//!
//! ```rust
//! use sumscan::search::{SearchError, find_combinations};
//!
//! let pairs = find_combinations(&[1, 2, 3], 5, 2).unwrap();
//! assert_eq!(pairs.len(), 1);
//!
//! // Only pairs and quadruplets are supported
//! assert!(matches!(
//!     find_combinations(&[1, 2, 3], 5, 3),
//!     Err(SearchError::UnsupportedArity(_))
//! ));
//! ```

mod combination;
mod error;
mod pair;
mod quadruplet;

pub use combination::Combination;
pub use error::SearchError;
pub use error::UnsupportedArityError;
pub use pair::find_pair;
pub use pair::find_pairs;
pub use quadruplet::find_quadruplets;

/// Finds all unique combinations of the requested arity summing to `target`.
///
/// Dispatches to [`find_pairs`] for arity 2 and [`find_quadruplets`] for
/// arity 4. Any other arity is rejected before the sequence is examined.
///
/// # Arguments
///
/// * `sequence` - The integers to search; read-only, may contain duplicates
/// * `target` - The sum every returned combination must reach
/// * `arity` - The combination size, either 2 or 4
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedArity`] when `arity` is not 2 or 4.
///
/// # Examples
///
/// ```rust
/// use sumscan::search::{Combination, find_combinations};
///
/// let quadruplets = find_combinations(&[2, 2, 2, 2, 2], 8, 4).unwrap();
/// assert_eq!(quadruplets, vec![Combination::quadruplet(2, 2, 2, 2)]);
///
/// let unsupported = find_combinations(&[2, 2, 2], 6, 3);
/// assert!(unsupported.is_err());
/// ```
pub fn find_combinations(
    sequence: &[i64],
    target: i64,
    arity: usize,
) -> Result<Vec<Combination>, SearchError> {
    match arity {
        2 => Ok(find_pairs(sequence, target)),
        4 => Ok(find_quadruplets(sequence, target)),
        unsupported => Err(SearchError::UnsupportedArity(UnsupportedArityError {
            arity: unsupported,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_find_combinations_dispatches_pairs() {
        let combinations = find_combinations(&[1, 2, 3, 4], 5, 2).unwrap();
        assert_eq!(
            combinations,
            vec![Combination::pair(1, 4), Combination::pair(2, 3)]
        );
    }

    #[rstest]
    fn test_find_combinations_dispatches_quadruplets() {
        let combinations = find_combinations(&[1, 0, -1, 0, -2, 2], 0, 4).unwrap();
        assert_eq!(combinations.len(), 3);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn test_find_combinations_rejects_unsupported_arity(#[case] arity: usize) {
        let result = find_combinations(&[1, 2, 3, 4], 5, arity);
        match result {
            Err(SearchError::UnsupportedArity(error)) => assert_eq!(error.arity, arity),
            other => panic!("expected UnsupportedArity, got {other:?}"),
        }
    }

    #[rstest]
    fn test_find_combinations_rejects_arity_before_reading_sequence() {
        // The arity check fires even for an empty sequence
        let result = find_combinations(&[], 0, 7);
        assert!(result.is_err());
    }
}
