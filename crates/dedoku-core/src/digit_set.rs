//! Candidate digit sets.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Digit;

const ALL_BITS: u16 = 0x1ff;

/// A set of digits 1-9, backed by a 9-bit mask.
///
/// Bits 0-8 represent digits 1-9 respectively. This is the candidate set of
/// a single cell: the digits the cell could still hold.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::new(5).unwrap());
/// candidates.remove(Digit::new(7).unwrap());
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::new(5).unwrap()));
/// assert!(candidates.contains(Digit::new(1).unwrap()));
/// ```
///
/// # Set operations
///
/// ```
/// use dedoku_core::{Digit, DigitSet};
///
/// let a: DigitSet = [1, 2, 3].into_iter().filter_map(Digit::new).collect();
/// let b: DigitSet = [2, 3, 4].into_iter().filter_map(Digit::new).collect();
///
/// assert_eq!((a | b).len(), 4);
/// assert_eq!((a & b).len(), 2);
/// assert_eq!(a.difference(b).len(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(ALL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(bit(digit))
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !bit(digit);
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member of the set, or `None` if the set does not
    /// contain exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use dedoku_core::{Digit, DigitSet};
    ///
    /// let five = Digit::new(5).unwrap();
    /// assert_eq!(DigitSet::from_elem(five).single(), Some(five));
    /// assert_eq!(DigitSet::FULL.single(), None);
    /// assert_eq!(DigitSet::EMPTY.single(), None);
    /// ```
    #[must_use]
    pub fn single(self) -> Option<Digit> {
        if self.len() != 1 {
            return None;
        }
        u8::try_from(self.0.trailing_zeros() + 1)
            .ok()
            .and_then(Digit::new)
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }

    #[cfg(test)]
    pub(crate) const fn from_bits(bits: u16) -> Self {
        Self(bits & ALL_BITS)
    }
}

const fn bit(digit: Digit) -> u16 {
    1 << (digit.value() - 1)
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        u8::try_from(index + 1).ok().and_then(Digit::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSet")?;
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(digit(1));
        set.insert(digit(9));
        assert!(set.contains(digit(1)));
        assert!(set.contains(digit(9)));
        assert!(!set.contains(digit(5)));
        assert_eq!(set.len(), 2);

        set.remove(digit(1));
        assert!(!set.contains(digit(1)));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op.
        set.remove(digit(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_single() {
        assert_eq!(DigitSet::from_elem(digit(7)).single(), Some(digit(7)));
        assert_eq!(DigitSet::EMPTY.single(), None);
        assert_eq!(DigitSet::FULL.single(), None);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set: DigitSet = [9, 1, 5, 3].into_iter().filter_map(Digit::new).collect();
        let collected: Vec<_> = set.iter().map(Digit::value).collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_set_operations() {
        let a: DigitSet = [1, 2, 3].into_iter().filter_map(Digit::new).collect();
        let b: DigitSet = [2, 3, 4].into_iter().filter_map(Digit::new).collect();

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b), DigitSet::from_elem(digit(1)));
    }

    #[test]
    fn test_display() {
        let set: DigitSet = [1, 3, 5].into_iter().filter_map(Digit::new).collect();
        assert_eq!(format!("{set}"), "{1, 3, 5}");
        assert_eq!(format!("{}", DigitSet::EMPTY), "{}");
    }

    fn any_digit_set() -> impl Strategy<Value = DigitSet> {
        (0u16..512).prop_map(DigitSet::from_bits)
    }

    fn any_digit() -> impl Strategy<Value = Digit> {
        (1u8..=9).prop_map(|value| Digit::new(value).unwrap())
    }

    proptest! {
        #[test]
        fn prop_remove_never_grows(set in any_digit_set(), digit in any_digit()) {
            let mut removed = set;
            removed.remove(digit);
            prop_assert!(removed.len() <= set.len());
            prop_assert!(!removed.contains(digit));
        }

        #[test]
        fn prop_difference_is_subset(a in any_digit_set(), b in any_digit_set()) {
            let diff = a.difference(b);
            prop_assert_eq!(diff.union(a), a);
            prop_assert!(diff.intersection(b).is_empty());
        }

        #[test]
        fn prop_union_contains_both(a in any_digit_set(), b in any_digit_set()) {
            let union = a.union(b);
            for digit in a.iter().chain(b.iter()) {
                prop_assert!(union.contains(digit));
            }
            prop_assert_eq!(union.len(), union.iter().count());
        }

        #[test]
        fn prop_single_iff_len_one(set in any_digit_set()) {
            prop_assert_eq!(set.single().is_some(), set.len() == 1);
        }
    }
}
