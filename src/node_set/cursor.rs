//! Directional cursors over a [`NodeSet`].

use std::hash::Hash;
use std::iter::FusedIterator;

use super::NodeSet;
use super::arena::SlotIndex;
use crate::error::NodeSetError;
use crate::trace::trace_event;

/// Traversal direction of a cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Front to back, in document order.
    #[default]
    Forward,
    /// Back to front, in reverse document order.
    Reverse,
}

impl Direction {
    /// Returns `true` for [`Direction::Reverse`].
    #[inline]
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse)
    }

    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

impl From<bool> for Direction {
    /// `true` means reverse.
    #[inline]
    fn from(reverse: bool) -> Self {
        if reverse {
            Self::Reverse
        } else {
            Self::Forward
        }
    }
}

/// Where a cursor is in its traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// Created, `next()` not called yet.
    Fresh,
    /// The last `next()` returned a node.
    Positioned,
    /// `next()` returned `None`; it will keep doing so.
    Exhausted,
}

/// A read-only cursor over a [`NodeSet`].
///
/// Created by [`NodeSet::cursor`]. Also usable as an [`Iterator`].
pub struct Cursor<'a, N> {
    set: &'a NodeSet<N>,
    direction: Direction,
    upcoming: Option<SlotIndex>,
    state: CursorState,
}

impl<'a, N> Cursor<'a, N> {
    pub(crate) const fn new(set: &'a NodeSet<N>, direction: Direction) -> Self {
        Self {
            set,
            direction,
            upcoming: set.arena.start(direction),
            state: CursorState::Fresh,
        }
    }

    /// The direction this cursor travels in.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The current traversal state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> CursorState {
        self.state
    }
}

impl<'a, N> Iterator for Cursor<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = &self.set.arena;
        let Some(slot) = self.upcoming else {
            self.state = CursorState::Exhausted;
            return None;
        };
        self.upcoming = arena.step(slot, self.direction);
        self.state = CursorState::Positioned;
        arena.node(slot)
    }
}

impl<N> FusedIterator for Cursor<'_, N> {}

impl<N> Clone for Cursor<'_, N> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            direction: self.direction,
            upcoming: self.upcoming,
            state: self.state,
        }
    }
}

impl<N> std::fmt::Debug for Cursor<'_, N> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("direction", &self.direction)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// A cursor that can remove the node it last yielded.
///
/// Created by [`NodeSet::cursor_mut`]. Holding the set's unique borrow means
/// no other cursor or insertion can interleave with a removal.
///
/// # Examples
///
/// ```rust
/// use xpath_nodeset::{CursorState, Direction, NodeSet, NodeSetError};
///
/// let mut set: NodeSet<u32> = (0..3).collect();
/// let mut cursor = set.cursor_mut(Direction::Forward);
/// assert_eq!(cursor.state(), CursorState::Fresh);
///
/// assert_eq!(cursor.next(), Some(&0));
/// assert_eq!(cursor.remove(), Ok(0));
/// assert!(matches!(cursor.remove(), Err(NodeSetError::InvalidState { .. })));
///
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.next(), None);
/// assert_eq!(cursor.state(), CursorState::Exhausted);
///
/// assert_eq!(set.to_vec(), vec![1, 2]);
/// ```
pub struct CursorMut<'a, N> {
    set: &'a mut NodeSet<N>,
    direction: Direction,
    upcoming: Option<SlotIndex>,
    removable: Option<SlotIndex>,
    state: CursorState,
}

impl<'a, N: Clone + Eq + Hash> CursorMut<'a, N> {
    pub(crate) fn new(set: &'a mut NodeSet<N>, direction: Direction) -> Self {
        let upcoming = set.arena.start(direction);
        Self {
            set,
            direction,
            upcoming,
            removable: None,
            state: CursorState::Fresh,
        }
    }

    /// The direction this cursor travels in.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The current traversal state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Returns `true` if [`CursorMut::remove`] would succeed.
    #[inline]
    #[must_use]
    pub const fn can_remove(&self) -> bool {
        self.removable.is_some()
    }

    /// Advances the cursor and returns the next node, or `None` once the
    /// traversal is exhausted.
    ///
    /// The returned node becomes eligible for [`CursorMut::remove`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&N> {
        let Some(slot) = self.upcoming else {
            self.state = CursorState::Exhausted;
            self.removable = None;
            return None;
        };
        // The neighbour is captured before the caller gets a chance to
        // unlink `slot`.
        self.upcoming = self.set.arena.step(slot, self.direction);
        self.removable = Some(slot);
        self.state = CursorState::Positioned;
        self.set.arena.node(slot)
    }

    /// Removes the node most recently returned by [`CursorMut::next`] and
    /// returns its handle.
    ///
    /// The following `next()` yields the removed node's neighbour in the
    /// cursor's direction.
    ///
    /// # Errors
    ///
    /// Returns [`NodeSetError::InvalidState`] if `next()` has not yielded a
    /// node since the last removal (or at all). The set is left unchanged.
    pub fn remove(&mut self) -> Result<N, NodeSetError> {
        let invalid = NodeSetError::InvalidState {
            operation: "CursorMut::remove",
        };
        let Some(slot) = self.removable.take() else {
            trace_event!(debug, state = ?self.state, "rejected remove() without a pending node");
            return Err(invalid);
        };
        self.set.remove_slot(slot).ok_or(invalid)
    }
}

impl<N> std::fmt::Debug for CursorMut<'_, N> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CursorMut")
            .field("direction", &self.direction)
            .field("state", &self.state)
            .field("removable", &self.removable.is_some())
            .finish_non_exhaustive()
    }
}
