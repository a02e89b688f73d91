//! Exhaustive quadruplet search over a sorted copy of the input.

use super::combination::Combination;
use std::cmp::Ordering;

/// Finds all unique value quadruplets summing to `target`.
///
/// Sorts a copy of the sequence, then fixes the first two values with a pair
/// of nested loops and closes each candidate with a two-pointer scan of the
/// remaining suffix. Three duplicate skips keep the result free of repeated
/// combinations:
///
/// - the outer index skips a value equal to the previous outer value
/// - the second index skips a value equal to the previous second value,
///   but only past its first position within the current outer pass
/// - on a match, both pointers step past every duplicate of the values they
///   matched at
///
/// All four positions stay strictly ordered, so the scan terminates within
/// O(n³) comparisons. The four-way sum is computed in `i128`, which holds any
/// sum of four `i64` values exactly.
///
/// # Complexity
///
/// O(n³) time, O(n) space for the sorted copy.
///
/// # Examples
///
/// ```rust
/// use sumscan::search::{Combination, find_quadruplets};
///
/// let quadruplets = find_quadruplets(&[1, 0, -1, 0, -2, 2], 0);
/// assert_eq!(
///     quadruplets,
///     vec![
///         Combination::quadruplet(-2, -1, 1, 2),
///         Combination::quadruplet(-2, 0, 0, 2),
///         Combination::quadruplet(-1, 0, 0, 1),
///     ]
/// );
///
/// // Fewer than four elements can never match
/// assert_eq!(find_quadruplets(&[1, 2, 3], 6), vec![]);
///
/// // All-equal input collapses to a single combination
/// assert_eq!(
///     find_quadruplets(&[2, 2, 2, 2, 2], 8),
///     vec![Combination::quadruplet(2, 2, 2, 2)]
/// );
/// ```
#[must_use]
pub fn find_quadruplets(sequence: &[i64], target: i64) -> Vec<Combination> {
    let mut sorted = sequence.to_vec();
    sorted.sort_unstable();

    let length = sorted.len();
    let mut combinations = Vec::new();
    if length < 4 {
        return combinations;
    }
    let target = i128::from(target);

    for first in 0..=(length - 4) {
        if first > 0 && sorted[first] == sorted[first - 1] {
            continue;
        }
        for second in (first + 1)..=(length - 3) {
            if second > first + 1 && sorted[second] == sorted[second - 1] {
                continue;
            }
            let mut low = second + 1;
            let mut high = length - 1;
            while low < high {
                let sum = i128::from(sorted[first])
                    + i128::from(sorted[second])
                    + i128::from(sorted[low])
                    + i128::from(sorted[high]);
                match sum.cmp(&target) {
                    Ordering::Less => low += 1,
                    Ordering::Greater => high -= 1,
                    Ordering::Equal => {
                        combinations.push(Combination::from_sorted_values(&[
                            sorted[first],
                            sorted[second],
                            sorted[low],
                            sorted[high],
                        ]));
                        let low_value = sorted[low];
                        let high_value = sorted[high];
                        while low < high && sorted[low] == low_value {
                            low += 1;
                        }
                        while low < high && sorted[high] == high_value {
                            high -= 1;
                        }
                    }
                }
            }
        }
    }
    combinations
}
