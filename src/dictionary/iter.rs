use crate::arena::Arena;
use crate::arena::Ptr;
use crate::dictionary::Entry;

/// A borrowing iterator over the entries of a [`Dictionary`].
///
/// Created by [`Dictionary::iter`]. Yields entries in insertion order and
/// walks the chain links directly, leaving the dictionary's cursor alone.
///
/// [`Dictionary`]: crate::Dictionary
/// [`Dictionary::iter`]: crate::Dictionary::iter
///
/// # Examples
///
/// ```
/// use tagdict::Dictionary;
/// use tagdict::Value;
///
/// let mut dict = Dictionary::new();
/// dict.add("a", 1).unwrap();
/// dict.add("b", 2).unwrap();
///
/// let values: Vec<_> = dict.iter().map(|e| e.value.clone()).collect();
/// assert_eq!(values, [Value::from(1), Value::from(2)]);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    pub(crate) forward: Option<Ptr>,
    pub(crate) back: Option<Ptr>,
    pub(crate) nodes: &'a Arena,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.forward?;
        let node = &self.nodes[ptr];
        if self.forward == self.back {
            self.forward = None;
            self.back = None;
        } else {
            self.forward = node.next;
        }
        Some(&node.entry)
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let ptr = self.back?;
        let node = &self.nodes[ptr];
        if self.back == self.forward {
            self.back = None;
            self.forward = None;
        } else {
            self.back = node.prev;
        }
        Some(&node.entry)
    }
}

/// An owning iterator over the entries of a [`Dictionary`].
///
/// Created by the [`IntoIterator`] implementation on `Dictionary`. Frees each
/// chain node as it is yielded.
///
/// [`Dictionary`]: crate::Dictionary
#[derive(Debug)]
pub struct IntoIter {
    pub(crate) forward: Option<Ptr>,
    pub(crate) back: Option<Ptr>,
    pub(crate) nodes: Arena,
}

impl Iterator for IntoIter {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.forward?;
        let node = self.nodes.free(ptr);
        if Some(ptr) == self.back {
            self.forward = None;
            self.back = None;
        } else {
            self.forward = node.next;
        }
        Some(node.entry)
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        let ptr = self.back?;
        let node = self.nodes.free(ptr);
        if Some(ptr) == self.forward {
            self.back = None;
            self.forward = None;
        } else {
            self.back = node.prev;
        }
        Some(node.entry)
    }
}
