//! Document-ordered, duplicate-free node sets.
//!
//! This module provides [`NodeSet`], the container an XPath evaluator uses to
//! accumulate the nodes selected by a location path.
//!
//! # Overview
//!
//! A `NodeSet` holds non-owning node handles in document order:
//!
//! - [`NodeSet::add`] and [`NodeSet::unshift`] insert at either end and trust
//!   the caller to respect document order
//! - [`NodeSet::merge_by`] combines two independently built sets, using a
//!   caller-supplied [`DocumentOrder`](crate::DocumentOrder)
//! - [`NodeSet::cursor_mut`] walks the set in either direction and can remove
//!   the element it just yielded
//!
//! Identity is whatever the handle's `Eq` and `Hash` say. Use
//! [`NodeRef`](crate::NodeRef) for borrowed tree nodes.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity          |
//! |----------------------|---------------------|
//! | `add` / `unshift`    | O(1) amortized      |
//! | `len` / `first`      | O(1)                |
//! | `contains`           | O(1) expected       |
//! | `merge_by`           | O(n + m)            |
//! | `CursorMut::next`    | O(1)                |
//! | `CursorMut::remove`  | O(1) expected       |
//!
//! # Examples
//!
//! ```rust
//! use xpath_nodeset::{Direction, NodeSet};
//!
//! let mut set = NodeSet::new();
//! set.add(2);
//! set.add(3);
//! set.unshift(1);
//! assert!(!set.add(3));
//! assert_eq!(set.to_vec(), vec![1, 2, 3]);
//!
//! let mut cursor = set.cursor_mut(Direction::Reverse);
//! assert_eq!(cursor.next(), Some(&3));
//! assert_eq!(cursor.remove(), Ok(3));
//! assert_eq!(cursor.next(), Some(&2));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.first(), Some(&1));
//! ```
//!
//! # Cursor States
//!
//! ```text
//!            next() -> Some                 next() -> Some
//!     Fresh ───────────────► Positioned ◄────────────┐
//!       │                      │    │                │
//!       │ next() -> None       │    └────────────────┘
//!       ▼                      │ next() -> None
//!   Exhausted ◄────────────────┘
//! ```
//!
//! `remove()` is only accepted in `Positioned`, once per `next()`.

mod arena;
mod cursor;
mod iter;
mod merge;

pub use cursor::{Cursor, CursorMut, CursorState, Direction};
pub use iter::{IntoIter, Iter};

use arena::{LinkedArena, SlotIndex};
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::hash::Hash;

/// An ordered, duplicate-free collection of node handles.
///
/// Elements are kept in the order the caller established: `add` appends,
/// `unshift` prepends, and `merge_by` interleaves two sets with an explicit
/// document order. No two elements share an identity.
///
/// # Type Parameters
///
/// * `N` - The node handle. `Eq` and `Hash` must describe node identity, and
///   `Clone` must be cheap (handles, not nodes).
///
/// # Examples
///
/// ```rust
/// use xpath_nodeset::{NodeRef, NodeSet};
///
/// let nodes = ["a", "b", "c"];
/// let mut set = NodeSet::new();
/// for node in &nodes {
///     set.add(NodeRef::new(node));
/// }
/// set.add(NodeRef::new(&nodes[0]));
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.first().map(|node| **node), Some("a"));
/// ```
#[derive(Clone)]
pub struct NodeSet<N> {
    arena: LinkedArena<N>,
    slots_by_node: FxHashMap<N, SlotIndex>,
}

impl<N> NodeSet<N> {
    /// Returns the number of nodes in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the set contains no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Returns the first node in document order, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xpath_nodeset::NodeSet;
    ///
    /// let mut set = NodeSet::new();
    /// assert_eq!(set.first(), None);
    ///
    /// set.add(10);
    /// set.add(20);
    /// assert_eq!(set.first(), Some(&10));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&N> {
        self.arena.head().and_then(|slot| self.arena.node(slot))
    }

    /// Returns the last node in document order, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&N> {
        self.arena.tail().and_then(|slot| self.arena.node(slot))
    }

    /// Returns a front-to-back iterator over the nodes.
    ///
    /// The iterator is double-ended, so `iter().rev()` walks the set in
    /// reverse document order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(&self.arena)
    }

    /// Returns a read-only cursor travelling in `direction`.
    ///
    /// Any number of read-only cursors may be alive at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xpath_nodeset::{Direction, NodeSet};
    ///
    /// let set: NodeSet<u32> = [0, 1, 2].into_iter().collect();
    /// let mut forward = set.cursor(Direction::Forward);
    /// let mut reverse = set.cursor(Direction::Reverse);
    ///
    /// assert_eq!(forward.next(), Some(&0));
    /// assert_eq!(reverse.next(), Some(&2));
    /// ```
    #[inline]
    pub fn cursor(&self, direction: Direction) -> Cursor<'_, N> {
        Cursor::new(self, direction)
    }

    /// Copies the handles into a `Vec`, in document order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<N>
    where
        N: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<N: Clone + Eq + Hash> NodeSet<N> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: LinkedArena::new(),
            slots_by_node: FxHashMap::default(),
        }
    }

    /// Creates an empty set with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: LinkedArena::with_capacity(capacity),
            slots_by_node: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Returns `true` if a node with the same identity is in the set.
    ///
    /// # Complexity
    ///
    /// O(1) expected
    #[inline]
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.slots_by_node.contains_key(node)
    }

    /// Appends `node` to the end of the set.
    ///
    /// The caller guarantees that `node` comes after every node already in the
    /// set in document order; the set does not check. Returns `false` and
    /// leaves the set untouched if the node is already present.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xpath_nodeset::NodeSet;
    ///
    /// let mut set = NodeSet::new();
    /// assert!(set.add(1));
    /// assert!(set.add(2));
    /// assert!(!set.add(1));
    /// assert_eq!(set.to_vec(), vec![1, 2]);
    /// ```
    pub fn add(&mut self, node: N) -> bool {
        if self.slots_by_node.contains_key(&node) {
            return false;
        }
        let slot = self.arena.push_back(node.clone());
        self.slots_by_node.insert(node, slot);
        true
    }

    /// Prepends `node` to the front of the set.
    ///
    /// The caller guarantees that `node` comes before every node already in
    /// the set in document order. Returns `false` and leaves the set untouched
    /// if the node is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xpath_nodeset::NodeSet;
    ///
    /// let mut set = NodeSet::new();
    /// set.unshift(3);
    /// set.unshift(2);
    /// set.unshift(1);
    /// assert!(!set.unshift(2));
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn unshift(&mut self, node: N) -> bool {
        if self.slots_by_node.contains_key(&node) {
            return false;
        }
        let slot = self.arena.push_front(node.clone());
        self.slots_by_node.insert(node, slot);
        true
    }

    /// Returns a cursor travelling in `direction` that can remove the node it
    /// last yielded.
    ///
    /// The cursor borrows the set mutably, so nothing else can touch the set
    /// while it is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xpath_nodeset::{Direction, NodeSet};
    ///
    /// let mut set: NodeSet<u32> = (0..5).collect();
    /// let mut cursor = set.cursor_mut(Direction::Forward);
    /// while let Some(&node) = cursor.next() {
    ///     if node % 2 == 1 {
    ///         cursor.remove().unwrap();
    ///     }
    /// }
    /// assert_eq!(set.to_vec(), vec![0, 2, 4]);
    /// ```
    ///
    /// A read-only cursor cannot outlive a removal made through a
    /// `CursorMut`:
    ///
    /// ```compile_fail
    /// use xpath_nodeset::{Direction, NodeSet};
    ///
    /// let mut set: NodeSet<u32> = (0..3).collect();
    /// let mut reader = set.cursor(Direction::Forward);
    /// let mut writer = set.cursor_mut(Direction::Forward);
    /// writer.next();
    /// writer.remove().unwrap();
    /// assert_eq!(reader.next(), Some(&1));
    /// ```
    ///
    /// Nor can the set be modified between `next()` and `remove()`:
    ///
    /// ```compile_fail
    /// use xpath_nodeset::{Direction, NodeSet};
    ///
    /// let mut set: NodeSet<u32> = (0..3).collect();
    /// let mut cursor = set.cursor_mut(Direction::Forward);
    /// cursor.next();
    /// set.add(3);
    /// cursor.remove().unwrap();
    /// ```
    #[inline]
    pub fn cursor_mut(&mut self, direction: Direction) -> CursorMut<'_, N> {
        CursorMut::new(self, direction)
    }

    /// Keeps only the nodes for which `keep` returns `true`, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xpath_nodeset::NodeSet;
    ///
    /// let mut set: NodeSet<u32> = (1..=6).collect();
    /// set.retain(|node| node % 3 != 0);
    /// assert_eq!(set.to_vec(), vec![1, 2, 4, 5]);
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&N) -> bool,
    {
        let mut cursor = self.cursor_mut(Direction::Forward);
        while let Some(node) = cursor.next() {
            if !keep(node) {
                let removed = cursor.remove();
                debug_assert!(removed.is_ok(), "a yielded node is always removable");
            }
        }
    }

    /// Removes every node from the set.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.slots_by_node.clear();
    }

    /// Unlinks the node stored in `slot` and drops it from the identity index.
    fn remove_slot(&mut self, slot: SlotIndex) -> Option<N> {
        let node = self.arena.unlink(slot)?;
        self.slots_by_node.remove(&node);
        Some(node)
    }
}

impl<N: Clone + Eq + Hash> Default for NodeSet<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<N: std::fmt::Debug> std::fmt::Debug for NodeSet<N> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<N: PartialEq> PartialEq for NodeSet<N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<N: Eq> Eq for NodeSet<N> {}

impl<N: Clone + Eq + Hash> Extend<N> for NodeSet<N> {
    /// Appends each node with [`NodeSet::add`]; the input must already be in
    /// document order.
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for node in iter {
            self.add(node);
        }
    }
}

impl<N: Clone + Eq + Hash> FromIterator<N> for NodeSet<N> {
    /// Builds a set by appending each node in turn; the input must already be
    /// in document order.
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<'a, N> IntoIterator for &'a NodeSet<N> {
    type Item = &'a N;
    type IntoIter = Iter<'a, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N> IntoIterator for NodeSet<N> {
    type Item = N;
    type IntoIter = IntoIter<N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.arena)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<N: serde::Serialize> serde::Serialize for NodeSet<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for node in self {
            seq.serialize_element(node)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct NodeSetVisitor<N> {
    marker: std::marker::PhantomData<N>,
}

#[cfg(feature = "serde")]
impl<N> NodeSetVisitor<N> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, N> serde::de::Visitor<'de> for NodeSetVisitor<N>
where
    N: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    type Value = NodeSet<N>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of nodes in document order")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut set = NodeSet::with_capacity(capacity);
        while let Some(node) = seq.next_element()? {
            set.add(node);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, N> serde::Deserialize<'de> for NodeSet<N>
where
    N: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(NodeSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let set: NodeSet<u32> = NodeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
    }

    #[rstest]
    fn test_add_keeps_index_in_step_with_arena() {
        let mut set = NodeSet::new();
        for node in [5, 6, 7] {
            assert!(set.add(node));
        }
        assert!(!set.add(6));

        assert_eq!(set.len(), 3);
        assert_eq!(set.slots_by_node.len(), set.arena.len());
    }

    #[rstest]
    fn test_unshift_duplicate_is_a_no_op() {
        let mut set = NodeSet::new();
        set.unshift(2);
        set.unshift(1);

        assert!(!set.unshift(2));
        assert!(!set.unshift(1));
        assert_eq!(set.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_add_and_unshift_share_duplicate_suppression() {
        let mut set = NodeSet::new();
        set.add(2);
        assert!(!set.unshift(2));
        set.unshift(1);
        assert!(!set.add(1));

        assert_eq!(set.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_remove_slot_drops_identity() {
        let mut set = NodeSet::new();
        set.add(1);
        let slot = set.slots_by_node[&1];

        assert_eq!(set.remove_slot(slot), Some(1));
        assert!(!set.contains(&1));
        assert_eq!(set.remove_slot(slot), None);

        // Removed nodes can come back.
        assert!(set.add(1));
        assert_eq!(set.to_vec(), vec![1]);
    }

    #[rstest]
    fn test_first_and_last_follow_mutations() {
        let mut set = NodeSet::new();
        set.add(2);
        set.add(3);
        set.unshift(1);

        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&3));

        set.retain(|node| *node == 2);
        assert_eq!(set.first(), Some(&2));
        assert_eq!(set.last(), Some(&2));
    }

    #[rstest]
    fn test_clear_empties_set_and_index() {
        let mut set: NodeSet<u32> = (0..10).collect();
        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(&3));
        assert!(set.add(3));
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1, 2, 3], vec![1, 3])]
    #[case(vec![2, 4, 6], vec![])]
    fn test_retain_keeps_odd_nodes(#[case] nodes: Vec<u32>, #[case] expected: Vec<u32>) {
        let mut set: NodeSet<u32> = nodes.into_iter().collect();
        set.retain(|node| node % 2 == 1);

        assert_eq!(set.to_vec(), expected);
        assert_eq!(set.len(), expected.len());
    }

    #[rstest]
    fn test_equality_is_order_sensitive() {
        let forward: NodeSet<u32> = [1, 2].into_iter().collect();
        let mut backward = NodeSet::new();
        backward.add(2);
        backward.unshift(1);
        let swapped: NodeSet<u32> = [2, 1].into_iter().collect();

        assert_eq!(forward, backward);
        assert_ne!(forward, swapped);
    }

    #[rstest]
    fn test_debug_formats_as_list() {
        let set: NodeSet<u32> = [3, 1].into_iter().collect();
        assert_eq!(format!("{set:?}"), "[3, 1]");
    }

    #[rstest]
    fn test_from_iterator_collapses_duplicates() {
        let set: NodeSet<u32> = [1, 1, 2, 1, 3].into_iter().collect();
        assert_eq!(set.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_into_iter_by_value_yields_document_order() {
        let mut set = NodeSet::new();
        set.add(2);
        set.unshift(1);
        set.add(3);

        let nodes: Vec<u32> = set.into_iter().collect();
        assert_eq!(nodes, vec![1, 2, 3]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_round_trip_keeps_order() {
        let mut set = NodeSet::new();
        set.add(20_u32);
        set.unshift(10);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[10,20]");

        let restored: NodeSet<u32> = serde_json::from_str("[10,20,10]").unwrap();
        assert_eq!(restored, set);
    }
}
