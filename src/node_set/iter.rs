//! Standard iterators over a [`NodeSet`](super::NodeSet).

use std::iter::FusedIterator;

use super::Direction;
use super::arena::{LinkedArena, SlotIndex};

/// Iterator over references to the nodes of a set, in document order.
///
/// Double-ended: `next_back` walks from the last node.
pub struct Iter<'a, N> {
    arena: &'a LinkedArena<N>,
    front: Option<SlotIndex>,
    back: Option<SlotIndex>,
    remaining: usize,
}

impl<'a, N> Iter<'a, N> {
    pub(crate) const fn new(arena: &'a LinkedArena<N>) -> Self {
        Self {
            arena,
            front: arena.head(),
            back: arena.tail(),
            remaining: arena.len(),
        }
    }
}

impl<'a, N> Iterator for Iter<'a, N> {
    type Item = &'a N;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front?;
        self.front = self.arena.step(slot, Direction::Forward);
        self.remaining -= 1;
        self.arena.node(slot)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N> DoubleEndedIterator for Iter<'_, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back?;
        self.back = self.arena.step(slot, Direction::Reverse);
        self.remaining -= 1;
        self.arena.node(slot)
    }
}

impl<N> ExactSizeIterator for Iter<'_, N> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<N> FusedIterator for Iter<'_, N> {}

impl<N> Clone for Iter<'_, N> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over the nodes of a set, in document order.
pub struct IntoIter<N> {
    arena: LinkedArena<N>,
}

impl<N> IntoIter<N> {
    pub(crate) const fn new(arena: LinkedArena<N>) -> Self {
        Self { arena }
    }
}

impl<N> Iterator for IntoIter<N> {
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let head = self.arena.head()?;
        self.arena.unlink(head)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.arena.len(), Some(self.arena.len()))
    }
}

impl<N> DoubleEndedIterator for IntoIter<N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let tail = self.arena.tail()?;
        self.arena.unlink(tail)
    }
}

impl<N> ExactSizeIterator for IntoIter<N> {}

impl<N> FusedIterator for IntoIter<N> {}
