//! Document-order comparison capability.
//!
//! The container never inspects a tree. Whoever owns the tree supplies a
//! [`DocumentOrder`] when two independently built sets have to be merged.

use std::cmp::Ordering;

/// A total order over node handles, consistent with document position.
///
/// Implemented for every `Fn(&N, &N) -> Ordering`, so a closure over the
/// tree is usually all a caller needs.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use xpath_nodeset::DocumentOrder;
///
/// // Node ids listed in document order.
/// let positions = [10_u32, 4, 7];
/// let order = |left: &u32, right: &u32| {
///     let position = |id: &u32| positions.iter().position(|candidate| candidate == id);
///     position(left).cmp(&position(right))
/// };
///
/// assert_eq!(order.compare(&4, &7), Ordering::Less);
/// assert!(order.precedes(&10, &4));
/// assert!(!order.precedes(&7, &10));
/// ```
pub trait DocumentOrder<N: ?Sized> {
    /// Compares the document positions of two nodes.
    fn compare(&self, left: &N, right: &N) -> Ordering;

    /// Returns `true` if `left` comes strictly before `right`.
    #[inline]
    fn precedes(&self, left: &N, right: &N) -> bool {
        self.compare(left, right) == Ordering::Less
    }
}

impl<N: ?Sized, F> DocumentOrder<N> for F
where
    F: Fn(&N, &N) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &N, right: &N) -> Ordering {
        self(left, right)
    }
}

/// Uses the handle's own `Ord` as document order.
///
/// Suitable for handles that already encode position, such as pre-order
/// node indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<N: Ord + ?Sized> DocumentOrder<N> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &N, right: &N) -> Ordering {
        left.cmp(right)
    }
}
