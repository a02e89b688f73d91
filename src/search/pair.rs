//! Pair search: first-found positions and exhaustive unique value pairs.

use super::combination::Combination;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Finds the first pair of positions whose values sum to `target`.
///
/// Scans the sequence once, keeping a map from each value seen so far to its
/// earliest position. At each position the complement `target - value` is
/// looked up; on a hit the stored position and the current one are returned
/// immediately. The map only ever holds positions earlier than the current
/// one, so the two returned positions are always distinct and an element
/// never pairs with itself.
///
/// The result is order-dependent on the scan: it is the first satisfying
/// pair encountered by position, not necessarily the lexicographically
/// smallest one.
///
/// The complement is computed in `i128`; a complement outside the `i64`
/// range cannot occur in the sequence and is skipped without wrapping.
///
/// # Complexity
///
/// O(n) time, O(n) space.
///
/// # Examples
///
/// ```rust
/// use sumscan::search::find_pair;
///
/// assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(find_pair(&[3, 3], 6), Some((0, 1)));
/// assert_eq!(find_pair(&[1, 2, 3], 100), None);
/// assert_eq!(find_pair(&[], 0), None);
/// ```
#[must_use]
pub fn find_pair(sequence: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(sequence.len());
    for (position, &value) in sequence.iter().enumerate() {
        let complement = i128::from(target) - i128::from(value);
        if let Ok(complement) = i64::try_from(complement) {
            if let Some(&earlier) = first_seen.get(&complement) {
                return Some((earlier, position));
            }
        }
        // First occurrence wins; later duplicates never shadow it
        first_seen.entry(value).or_insert(position);
    }
    None
}

/// Finds all unique value pairs summing to `target`.
///
/// Sorts a copy of the sequence and narrows it with a two-pointer scan. On a
/// match both pointers step past every duplicate of the matched values, so a
/// sequence with repeated values never yields the same pair twice. Pairs come
/// out in ascending order of their smaller value.
///
/// # Complexity
///
/// O(n log n) time for the sort, O(n) space for the copy.
///
/// # Examples
///
/// ```rust
/// use sumscan::search::{Combination, find_pairs};
///
/// let pairs = find_pairs(&[1, 2, 3, 2, 4, 0], 4);
/// assert_eq!(
///     pairs,
///     vec![
///         Combination::pair(0, 4),
///         Combination::pair(1, 3),
///         Combination::pair(2, 2),
///     ]
/// );
///
/// // Duplicates collapse to one combination
/// assert_eq!(find_pairs(&[2, 2, 2, 2], 4), vec![Combination::pair(2, 2)]);
/// ```
#[must_use]
pub fn find_pairs(sequence: &[i64], target: i64) -> Vec<Combination> {
    let mut sorted = sequence.to_vec();
    sorted.sort_unstable();

    let mut combinations = Vec::new();
    let Some(mut high) = sorted.len().checked_sub(1) else {
        return combinations;
    };
    let mut low = 0;
    let target = i128::from(target);

    while low < high {
        let sum = i128::from(sorted[low]) + i128::from(sorted[high]);
        match sum.cmp(&target) {
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
            Ordering::Equal => {
                combinations.push(Combination::from_sorted_values(&[sorted[low], sorted[high]]));
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
    combinations
}
