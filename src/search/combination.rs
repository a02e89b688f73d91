//! The combination value type shared by the exhaustive searches.
//!
//! A [`Combination`] is an unordered selection of 2 or 4 integers, stored as
//! a sorted sequence so that two combinations compare equal exactly when
//! their value multisets are equal. Values live inline in a
//! `SmallVec<[i64; 4]>`, so no combination ever touches the heap.
//!
//! # Invariant
//!
//! The stored values are always in non-decreasing order. The public
//! constructors normalize their arguments; the crate-internal constructor
//! used by the search loops asserts the order in debug builds instead,
//! because those loops emit values straight out of an already-sorted copy.

use smallvec::SmallVec;
use std::fmt;

/// The largest combination size the searches produce.
pub(crate) const MAX_ARITY: usize = 4;

const ORDER_INVARIANT_PANIC_MESSAGE: &str =
    "combination values must be in non-decreasing order";

/// Returns `true` if `values` is sorted in non-decreasing order.
fn is_non_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|window| window[0] <= window[1])
}

/// An unordered selection of 2 or 4 integers, compared as a sorted sequence.
///
/// Equality, ordering, and hashing are all derived from the sorted values,
/// so a `Combination` identifies a value multiset: `pair(2, 1)` and
/// `pair(1, 2)` are the same combination.
///
/// # Examples
///
/// ```rust
/// use sumscan::search::Combination;
///
/// let combination = Combination::quadruplet(2, -2, 1, -1);
///
/// // Values are stored in non-decreasing order regardless of argument order
/// assert_eq!(combination.values(), &[-2, -1, 1, 2]);
/// assert_eq!(combination.arity(), 4);
/// assert_eq!(combination.sum(), 0);
/// assert_eq!(combination.to_string(), "[-2, -1, 1, 2]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination {
    values: SmallVec<[i64; MAX_ARITY]>,
}

impl Combination {
    /// Creates a pair combination from two values in any order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumscan::search::Combination;
    ///
    /// assert_eq!(Combination::pair(7, 2), Combination::pair(2, 7));
    /// assert_eq!(Combination::pair(7, 2).values(), &[2, 7]);
    /// ```
    #[must_use]
    pub fn pair(first: i64, second: i64) -> Self {
        let mut values = SmallVec::new();
        values.push(first.min(second));
        values.push(first.max(second));
        Self { values }
    }

    /// Creates a quadruplet combination from four values in any order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumscan::search::Combination;
    ///
    /// let combination = Combination::quadruplet(2, 0, 0, -2);
    /// assert_eq!(combination.values(), &[-2, 0, 0, 2]);
    /// ```
    #[must_use]
    pub fn quadruplet(first: i64, second: i64, third: i64, fourth: i64) -> Self {
        let mut values: SmallVec<[i64; MAX_ARITY]> =
            SmallVec::from_slice(&[first, second, third, fourth]);
        values.sort_unstable();
        Self { values }
    }

    /// Creates a combination from values already in non-decreasing order.
    ///
    /// The search loops emit values straight out of a sorted copy of the
    /// input, so re-sorting here would be wasted work.
    pub(crate) fn from_sorted_values(values: &[i64]) -> Self {
        debug_assert!(is_non_decreasing(values), "{ORDER_INVARIANT_PANIC_MESSAGE}");
        Self {
            values: SmallVec::from_slice(values),
        }
    }

    /// Returns the values in non-decreasing order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns the number of values in the combination (2 or 4).
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.values.len()
    }

    /// Returns the sum of the values, widened to `i128`.
    ///
    /// Widening keeps the sum exact even when the combination holds values
    /// near `i64::MIN` or `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumscan::search::Combination;
    ///
    /// let extremes = Combination::pair(i64::MAX, i64::MAX);
    /// assert_eq!(extremes.sum(), 2 * i128::from(i64::MAX));
    /// ```
    #[must_use]
    pub fn sum(&self) -> i128 {
        self.values.iter().copied().map(i128::from).sum()
    }

    /// Returns an iterator over the values in non-decreasing order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, value) in self.values.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Combination {
    type Item = i64;
    type IntoIter = smallvec::IntoIter<[i64; MAX_ARITY]>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Combination {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.values.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Combination {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<i64>::deserialize(deserializer)?;
        match values.as_slice() {
            &[first, second] => Ok(Self::pair(first, second)),
            &[first, second, third, fourth] => {
                Ok(Self::quadruplet(first, second, third, fourth))
            }
            other => Err(serde::de::Error::invalid_length(
                other.len(),
                &"a combination of exactly 2 or 4 values",
            )),
        }
    }
}

static_assertions::assert_impl_all!(Combination: Send, Sync, Clone);
