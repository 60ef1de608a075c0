//! Slab storage for the node sequence.
//!
//! Elements live in a `Vec` of slots linked through `prev`/`next` indices.
//! Vacated slots are threaded onto a free list and reused, so unlinking an
//! element never shifts its neighbours and never invalidates the slot index
//! a cursor is holding for the next element.

use super::Direction;

/// Index of a slot inside a [`LinkedArena`].
pub(crate) type SlotIndex = usize;

#[derive(Clone, Debug)]
struct Link<N> {
    node: N,
    prev: Option<SlotIndex>,
    next: Option<SlotIndex>,
}

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(Link<N>),
    Vacant { next_free: Option<SlotIndex> },
}

/// A doubly linked list whose links are slab indices.
#[derive(Clone, Debug)]
pub(crate) struct LinkedArena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<SlotIndex>,
    head: Option<SlotIndex>,
    tail: Option<SlotIndex>,
    len: usize,
}

impl<N> LinkedArena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn head(&self) -> Option<SlotIndex> {
        self.head
    }

    #[inline]
    pub(crate) const fn tail(&self) -> Option<SlotIndex> {
        self.tail
    }

    /// First slot in `direction`: the head going forward, the tail in reverse.
    #[inline]
    pub(crate) const fn start(&self, direction: Direction) -> Option<SlotIndex> {
        match direction {
            Direction::Forward => self.head,
            Direction::Reverse => self.tail,
        }
    }

    #[inline]
    fn link(&self, slot: SlotIndex) -> Option<&Link<N>> {
        match self.slots.get(slot) {
            Some(Slot::Occupied(link)) => Some(link),
            _ => None,
        }
    }

    #[inline]
    fn link_mut(&mut self, slot: SlotIndex) -> Option<&mut Link<N>> {
        match self.slots.get_mut(slot) {
            Some(Slot::Occupied(link)) => Some(link),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn node(&self, slot: SlotIndex) -> Option<&N> {
        self.link(slot).map(|link| &link.node)
    }

    /// The slot after `slot` when travelling in `direction`.
    #[inline]
    pub(crate) fn step(&self, slot: SlotIndex, direction: Direction) -> Option<SlotIndex> {
        self.link(slot).and_then(|link| match direction {
            Direction::Forward => link.next,
            Direction::Reverse => link.prev,
        })
    }

    fn allocate(&mut self, link: Link<N>) -> SlotIndex {
        match self.free_head {
            Some(slot) => {
                let previous = std::mem::replace(&mut self.slots[slot], Slot::Occupied(link));
                if let Slot::Vacant { next_free } = previous {
                    self.free_head = next_free;
                }
                slot
            }
            None => {
                self.slots.push(Slot::Occupied(link));
                self.slots.len() - 1
            }
        }
    }

    pub(crate) fn push_back(&mut self, node: N) -> SlotIndex {
        let old_tail = self.tail;
        let slot = self.allocate(Link {
            node,
            prev: old_tail,
            next: None,
        });
        match old_tail.and_then(|tail| self.link_mut(tail)) {
            Some(link) => link.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        slot
    }

    pub(crate) fn push_front(&mut self, node: N) -> SlotIndex {
        let old_head = self.head;
        let slot = self.allocate(Link {
            node,
            prev: None,
            next: old_head,
        });
        match old_head.and_then(|head| self.link_mut(head)) {
            Some(link) => link.prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
        slot
    }

    /// Splices `slot` out of the list and returns its node.
    ///
    /// Returns `None` if the slot is vacant or out of range.
    pub(crate) fn unlink(&mut self, slot: SlotIndex) -> Option<N> {
        self.link(slot)?;
        let vacated = std::mem::replace(
            &mut self.slots[slot],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        let Slot::Occupied(Link { node, prev, next }) = vacated else {
            return None;
        };
        self.free_head = Some(slot);

        match prev.and_then(|prev| self.link_mut(prev)) {
            Some(link) => link.next = next,
            None => self.head = next,
        }
        match next.and_then(|next| self.link_mut(next)) {
            Some(link) => link.prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        Some(node)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}
