//! The iterator-cursor protocol.
//!
//! The cursor is the dictionary's own traversal state, distinct from the
//! structural head and tail pointers. Every derived traversal operation
//! (`get`, `remove`, `for_each`, `map`, `to_array`) starts with a full
//! `rewind` and advances to exhaustion; none assumes the position left
//! behind by a prior call.

use crate::arena::Ptr;
use crate::dictionary::Dictionary;
use crate::dictionary::Entry;
use crate::error::DictError;
use crate::error::Result;
use crate::value::Value;

/// Where the cursor stands within the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorState {
    /// No traversal has started since construction or the last reset.
    Unstarted,
    /// The cursor sits on a live entry.
    Positioned(Ptr),
    /// The cursor walked past the tail (or rewound over an empty chain).
    Exhausted,
}

impl Dictionary {
    /// Moves the cursor to the first entry.
    ///
    /// O(1): the head is tracked independently of the cursor. On an empty
    /// dictionary the cursor becomes exhausted and [`valid`](Self::valid)
    /// reports false.
    pub fn rewind(&mut self) {
        self.cursor = match self.head {
            Some(head) => CursorState::Positioned(head),
            None => CursorState::Exhausted,
        };
    }

    /// True iff the cursor sits on an entry.
    pub fn valid(&self) -> bool {
        matches!(self.cursor, CursorState::Positioned(_))
    }

    /// Returns the entry at the cursor.
    ///
    /// Fails with [`DictError::IterationError`] when the cursor has not been
    /// rewound yet or has run past the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdict::Dictionary;
    /// use tagdict::Value;
    ///
    /// let mut dict = Dictionary::new();
    /// dict.add("a", 1).unwrap();
    ///
    /// assert!(dict.current().is_err());
    /// dict.rewind();
    /// assert_eq!(dict.current().unwrap().key, Value::from("a"));
    /// ```
    pub fn current(&self) -> Result<&Entry> {
        match self.cursor {
            CursorState::Positioned(ptr) => Ok(&self.nodes[ptr].entry),
            _ => Err(DictError::IterationError),
        }
    }

    /// Returns the entry at the cursor for in-place editing.
    ///
    /// Fails with [`DictError::IterationError`] when the cursor is not
    /// positioned on an entry.
    pub fn current_mut(&mut self) -> Result<&mut Entry> {
        match self.cursor {
            CursorState::Positioned(ptr) => Ok(&mut self.nodes[ptr].entry),
            _ => Err(DictError::IterationError),
        }
    }

    /// Returns the key of the entry at the cursor.
    pub fn current_key(&self) -> Result<&Value> {
        Ok(&self.current()?.key)
    }

    /// Moves the cursor one entry forward.
    ///
    /// From a positioned cursor this steps to the next entry, or exhausts
    /// the cursor at the tail. From any other state the cursor is exhausted.
    pub fn advance(&mut self) {
        self.cursor = match self.cursor {
            CursorState::Positioned(ptr) => match self.nodes[ptr].next {
                Some(next) => CursorState::Positioned(next),
                None => CursorState::Exhausted,
            },
            _ => CursorState::Exhausted,
        };
    }
}
