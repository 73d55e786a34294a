use std::fmt;
use std::num::NonZeroU32;
use std::ops::Index;
use std::ops::IndexMut;

use crate::dictionary::Entry;

#[cold]
#[inline(never)]
fn vacant_slot() -> ! {
    panic!("Attempted to access a vacant slot");
}

/// An opaque handle identifying a node in the arena.
///
/// Non-generational: once a node is freed, its handle may be re-used for a
/// later allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct Ptr(NonZeroU32);

impl fmt::Debug for Ptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// One node of the entry chain: the stored entry plus its links.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) prev: Option<Ptr>,
    pub(crate) next: Option<Ptr>,
    pub(crate) entry: Entry,
}

#[derive(Debug, Clone)]
enum Slot {
    Vacant { next_free: Option<Ptr> },
    Occupied(Node),
}

/// Slab storage for chain nodes. Freed slots go on a free list and are
/// re-used by later allocations, so handles stay stable across removals.
#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free_head: Option<Ptr>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn alloc(&mut self, node: Node) -> Ptr {
        match self.free_head {
            Some(ptr) => {
                let old = std::mem::replace(&mut self.slots[ptr.index()], Slot::Occupied(node));
                match old {
                    Slot::Vacant { next_free } => self.free_head = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                ptr
            }
            None => {
                let ptr = Ptr::from_index(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                ptr
            }
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        matches!(self.slots.get(ptr.index()), Some(Slot::Occupied(_)))
    }

    pub(crate) fn free(&mut self, ptr: Ptr) -> Node {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let old = std::mem::replace(
            &mut self.slots[ptr.index()],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(ptr);
        match old {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => vacant_slot(),
        }
    }
}

impl Index<Ptr> for Arena {
    type Output = Node;

    fn index(&self, ptr: Ptr) -> &Node {
        match &self.slots[ptr.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => vacant_slot(),
        }
    }
}

impl IndexMut<Ptr> for Arena {
    fn index_mut(&mut self, ptr: Ptr) -> &mut Node {
        match &mut self.slots[ptr.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => vacant_slot(),
        }
    }
}
