//! Total-order comparison capability supplied to the tree containers at
//! construction time.

use std::cmp::Ordering;

/// A three-way total order over values of type `T`.
///
/// A tree consults its comparator for every key comparison it makes. All keys
/// inserted into one tree must be mutually comparable under the same order for
/// the lifetime of the tree; the comparator is trusted, not validated, and an
/// inconsistent order silently voids every ordering invariant of the
/// container.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::with_comparator(|lhs: &u32, rhs: &u32| rhs.cmp(lhs));
/// map.insert(1, 'a');
/// map.insert(3, 'c');
///
/// assert_eq!(map.min(), Some((&3, &'c')));
/// assert_eq!(map.max(), Some((&1, &'a')));
/// ```
pub trait Comparator<T> {
    /// Returns the ordering of `lhs` relative to `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// A comparator that delegates to the key's `Ord` implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::{Comparator, NaturalOrder};
    use std::cmp::Ordering;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_closure_comparator() {
        let reverse = |lhs: &u32, rhs: &u32| rhs.cmp(lhs);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(reverse.compare(&2, &1), Ordering::Less);
    }
}
