//! Identity handles for externally owned tree nodes.
//!
//! A [`NodeSet`](crate::NodeSet) deduplicates by `Eq` and `Hash`. Tree nodes
//! usually compare by value, so storing `&Node` directly would collapse two
//! distinct nodes that happen to look alike. [`NodeRef`] wraps the borrow and
//! compares by address instead.

use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// A non-owning handle to a node, compared and hashed by address.
///
/// `NodeRef` is `Copy` regardless of `T`, so it can be stored in any number
/// of node sets without touching the node itself.
///
/// # Examples
///
/// ```rust
/// use xpath_nodeset::NodeRef;
///
/// #[derive(Debug, PartialEq)]
/// struct Element {
///     name: &'static str,
/// }
///
/// let first = Element { name: "div" };
/// let second = Element { name: "div" };
///
/// // Equal by value, distinct by identity.
/// assert!(first == second);
/// assert_ne!(NodeRef::new(&first), NodeRef::new(&second));
/// assert_eq!(NodeRef::new(&first), NodeRef::new(&first));
/// assert_eq!(NodeRef::new(&first).name, "div");
/// ```
pub struct NodeRef<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> NodeRef<'a, T> {
    /// Creates a handle to `node`.
    #[inline]
    #[must_use]
    pub const fn new(node: &'a T) -> Self {
        Self(node)
    }

    /// Returns the underlying borrow with its full lifetime.
    #[inline]
    #[must_use]
    pub const fn get(self) -> &'a T {
        self.0
    }

    /// Returns `true` if both handles point at the same node.
    #[inline]
    #[must_use]
    pub fn same_node(self, other: Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<T: ?Sized> Clone for NodeRef<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NodeRef<'_, T> {}

impl<T: ?Sized> PartialEq for NodeRef<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same_node(*other)
    }
}

impl<T: ?Sized> Eq for NodeRef<'_, T> {}

impl<T: ?Sized> Hash for NodeRef<'_, T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

impl<T: ?Sized> Deref for NodeRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.0
    }
}

impl<'a, T: ?Sized> From<&'a T> for NodeRef<'a, T> {
    #[inline]
    fn from(node: &'a T) -> Self {
        Self::new(node)
    }
}

impl<T: ?Sized + std::fmt::Debug> std::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("NodeRef").field(&self.0).finish()
    }
}
