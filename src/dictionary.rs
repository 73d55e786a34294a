//! Insertion-ordered dictionary with runtime type-tag checked entries.
//!
//! This module provides the core [`Dictionary`] type. Entries form a
//! doubly-linked chain in insertion order; every traversal operation
//! (lookup, removal, visiting, mapping, materialization) drives the same
//! cursor protocol exposed as `rewind`/`valid`/`current`/`advance`.
//!
//! # Examples
//!
//! ```
//! use tagdict::Dictionary;
//! use tagdict::TypeTag;
//! use tagdict::Value;
//!
//! let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::String);
//! dict.add("first", "1").unwrap();
//! dict.add("second", "2").unwrap();
//!
//! // Iteration preserves insertion order
//! let keys: Vec<_> = dict.iter().map(|e| e.key.clone()).collect();
//! assert_eq!(keys, [Value::from("first"), Value::from("second")]);
//! ```

mod cursor;
mod iter;

use std::fmt;

use indexmap::IndexMap;

use cursor::CursorState;
pub use iter::IntoIter;
pub use iter::Iter;

use crate::arena::Arena;
use crate::arena::Node;
use crate::arena::Ptr;
use crate::error::DictError;
use crate::error::Result;
use crate::value::TypeTag;
use crate::value::Value;

/// One stored key/value association.
///
/// Fields are public so that [`Dictionary::for_each`] visitors and
/// [`Dictionary::map`] transforms can rewrite them in place. Whether such
/// edits persist depends on the operation: `for_each` hands out the real
/// entry, `map` hands out a scratch copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The entry's key.
    pub key: Value,
    /// The entry's value.
    pub value: Value,
}

/// Verdict returned by a [`Dictionary::map`] transform for each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Append the (possibly rewritten) entry to the output dictionary.
    Emit,
    /// Skip this entry; nothing is appended. Named for the sentinel tag
    /// the filtering convention is built on.
    Undefined,
}

/// An insertion-ordered dictionary whose keys and values are runtime-typed
/// [`Value`]s validated against a pair of declared [`TypeTag`]s.
///
/// The chain of entries is doubly-linked and singly-owned forward: each node
/// owns its successor, and carries a non-owning back link. Lookup and removal
/// are linear scans in insertion order where the first strict match wins.
///
/// # Examples
///
/// ```
/// use tagdict::Dictionary;
/// use tagdict::TypeTag;
/// use tagdict::Value;
///
/// let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::String);
/// dict.add("wow", "3").unwrap();
/// dict.add("1", "one").unwrap();
/// dict.add("oho", "noice").unwrap();
///
/// assert_eq!(dict.get("1").unwrap(), &Value::from("one"));
/// assert!(dict.add("nope", 7).is_err());
/// ```
pub struct Dictionary {
    key_type: TypeTag,
    value_type: TypeTag,
    head: Option<Ptr>,
    tail: Option<Ptr>,
    len: usize,
    cursor: CursorState,
    nodes: Arena,
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::new()
    }
}

impl Dictionary {
    /// Creates an empty dictionary accepting any key and value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdict::Dictionary;
    ///
    /// let mut dict = Dictionary::new();
    /// dict.add("anything", 1).unwrap();
    /// dict.add(2, "goes").unwrap();
    /// assert_eq!(dict.len(), 2);
    /// ```
    pub fn new() -> Self {
        Dictionary::with_types(TypeTag::Mixed, TypeTag::Mixed)
    }

    /// Creates an empty dictionary with the given key and value constraints.
    ///
    /// The tags are fixed for the dictionary's lifetime.
    pub fn with_types(key_type: TypeTag, value_type: TypeTag) -> Self {
        Dictionary {
            key_type,
            value_type,
            head: None,
            tail: None,
            len: 0,
            cursor: CursorState::Unstarted,
            nodes: Arena::new(),
        }
    }

    /// The declared key constraint.
    pub fn key_type(&self) -> TypeTag {
        self.key_type
    }

    /// The declared value constraint.
    pub fn value_type(&self) -> TypeTag {
        self.value_type
    }

    /// The number of entries in the dictionary.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends the entry at the tail without type checking.
    ///
    /// Callers must have validated `entry` against the declared tags.
    fn push_entry(&mut self, entry: Entry) {
        let ptr = self.nodes.alloc(Node {
            prev: self.tail,
            next: None,
            entry,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(ptr),
            None => self.head = Some(ptr),
        }
        self.tail = Some(ptr);
        self.len += 1;
    }

    fn type_mismatch(&self, given: &Value) -> DictError {
        DictError::TypeMismatch {
            key_type: self.key_type,
            value_type: self.value_type,
            given: given.type_name(),
        }
    }

    /// Appends a key/value pair at the tail, preserving insertion order.
    ///
    /// O(1). Fails with [`DictError::TypeMismatch`] when the key or the value
    /// does not satisfy the declared tags; the chain is untouched on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdict::Dictionary;
    /// use tagdict::TypeTag;
    ///
    /// let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::Integer);
    /// assert!(dict.add("a", 1).is_ok());
    /// assert!(dict.add("b", "not an integer").is_err());
    /// assert_eq!(dict.len(), 1);
    /// ```
    pub fn add(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        if !self.key_type.matches(&key) {
            return Err(self.type_mismatch(&key));
        }
        if !self.value_type.matches(&value) {
            return Err(self.type_mismatch(&value));
        }
        self.push_entry(Entry { key, value });
        Ok(())
    }

    /// Returns the value of the first entry whose key strictly equals `key`.
    ///
    /// Scans in insertion order; strict equality means same runtime type and
    /// same content, no coercion. Fails with [`DictError::NotFound`] when no
    /// entry matches, including on an empty dictionary.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdict::DictError;
    /// use tagdict::Dictionary;
    /// use tagdict::Value;
    ///
    /// let mut dict = Dictionary::new();
    /// dict.add(1, "int key").unwrap();
    /// assert_eq!(dict.get(1).unwrap(), &Value::from("int key"));
    /// // Strict lookup: a float key is a different key.
    /// assert_eq!(dict.get(1.0), Err(DictError::NotFound));
    /// ```
    pub fn get(&mut self, key: impl Into<Value>) -> Result<&Value> {
        let key = key.into();
        self.rewind();
        while let CursorState::Positioned(ptr) = self.cursor {
            if self.nodes[ptr].entry.key == key {
                return Ok(&self.nodes[ptr].entry.value);
            }
            self.advance();
        }
        Err(DictError::NotFound)
    }

    /// Removes the first entry whose key strictly equals `key` and returns it.
    ///
    /// The matched node is spliced out by relinking its neighbors; head and
    /// tail are adjusted when the removed entry sat at either end. Later
    /// duplicates of the key are untouched. Fails with
    /// [`DictError::NotFound`] when no entry matches.
    ///
    /// The cursor is reset afterwards, since its position may have been the
    /// removed entry.
    pub fn remove(&mut self, key: impl Into<Value>) -> Result<Entry> {
        let key = key.into();
        self.rewind();
        while let CursorState::Positioned(ptr) = self.cursor {
            if self.nodes[ptr].entry.key != key {
                self.advance();
                continue;
            }
            let node = self.nodes.free(ptr);
            match node.prev {
                Some(prev) => self.nodes[prev].next = node.next,
                None => self.head = node.next,
            }
            match node.next {
                Some(next) => self.nodes[next].prev = node.prev,
                None => self.tail = node.prev,
            }
            self.len -= 1;
            self.cursor = CursorState::Unstarted;
            return Ok(node.entry);
        }
        Err(DictError::NotFound)
    }

    /// Invokes `visitor` once per entry, in insertion order.
    ///
    /// The visitor receives the real stored entry; any edits to its key or
    /// value persist in the dictionary. Contrast with [`Dictionary::map`],
    /// whose transform only ever sees a scratch copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdict::Dictionary;
    /// use tagdict::Value;
    ///
    /// let mut dict = Dictionary::new();
    /// dict.add("n", 1).unwrap();
    /// dict.for_each(|entry| entry.value = Value::from(2));
    /// assert_eq!(dict.get("n").unwrap(), &Value::from(2));
    /// ```
    pub fn for_each<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Entry),
    {
        self.rewind();
        while let CursorState::Positioned(ptr) = self.cursor {
            visitor(&mut self.nodes[ptr].entry);
            self.advance();
        }
    }

    /// Builds a new dictionary with the same type constraints by running
    /// `transform` over every entry.
    ///
    /// See [`Dictionary::map_with_types`] for the full contract.
    pub fn map<F>(&mut self, transform: F) -> Result<Dictionary>
    where
        F: FnMut(&mut Entry) -> Verdict,
    {
        self.map_with_types(self.key_type, self.value_type, transform)
    }

    /// Builds a new dictionary with the given type constraints by running
    /// `transform` over every entry in insertion order.
    ///
    /// The transform receives a scratch copy of each entry and may rewrite
    /// its key and value freely; the source dictionary is never modified.
    /// When the transform returns [`Verdict::Emit`], the scratch entry as the
    /// transform left it is appended to the output through the output's own
    /// type-checked [`add`](Dictionary::add). When it returns
    /// [`Verdict::Undefined`], the entry is skipped; this is the filtering
    /// mechanism.
    ///
    /// Not transactional: if a rewritten entry violates the output's
    /// constraints, the call fails with [`DictError::TypeMismatch`] and the
    /// partially built output is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdict::Dictionary;
    /// use tagdict::TypeTag;
    /// use tagdict::Value;
    /// use tagdict::Verdict;
    ///
    /// let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::String);
    /// dict.add("wow", "3").unwrap();
    /// dict.add("1", "one").unwrap();
    ///
    /// let mut suffixed = dict
    ///     .map(|entry| {
    ///         if let Value::String(s) = &mut entry.value {
    ///             s.push_str("_added");
    ///         }
    ///         Verdict::Emit
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(suffixed.get("wow").unwrap(), &Value::from("3_added"));
    /// // The source keeps its original values.
    /// assert_eq!(dict.get("wow").unwrap(), &Value::from("3"));
    /// ```
    pub fn map_with_types<F>(
        &mut self,
        key_type: TypeTag,
        value_type: TypeTag,
        mut transform: F,
    ) -> Result<Dictionary>
    where
        F: FnMut(&mut Entry) -> Verdict,
    {
        let mut out = Dictionary::with_types(key_type, value_type);
        self.rewind();
        while let CursorState::Positioned(ptr) = self.cursor {
            let mut scratch = self.nodes[ptr].entry.clone();
            if transform(&mut scratch) == Verdict::Emit {
                out.add(scratch.key, scratch.value)?;
            }
            self.advance();
        }
        Ok(out)
    }

    /// Materializes the dictionary as an insertion-ordered key→value mapping.
    ///
    /// Duplicate keys collapse with last-write-wins: a later entry overwrites
    /// the value stored under the key, at the position of the first
    /// occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdict::Dictionary;
    /// use tagdict::Value;
    ///
    /// let mut dict = Dictionary::new();
    /// dict.add("k", 1).unwrap();
    /// dict.add("k", 2).unwrap();
    ///
    /// let array = dict.to_array();
    /// assert_eq!(array.len(), 1);
    /// assert_eq!(array.get(&Value::from("k")), Some(&Value::from(2)));
    /// ```
    pub fn to_array(&mut self) -> IndexMap<Value, Value> {
        let mut array = IndexMap::with_capacity(self.len);
        self.rewind();
        while let CursorState::Positioned(ptr) = self.cursor {
            let entry = &self.nodes[ptr].entry;
            array.insert(entry.key.clone(), entry.value.clone());
            self.advance();
        }
        array
    }

    /// Returns a borrowing iterator over the entries in insertion order.
    ///
    /// Independent of the cursor protocol; the cursor state is untouched.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            forward: self.head,
            back: self.tail,
            nodes: &self.nodes,
        }
    }
}

impl Clone for Dictionary {
    fn clone(&self) -> Self {
        let mut new = Dictionary::with_types(self.key_type, self.value_type);
        for entry in self.iter() {
            new.push_entry(entry.clone());
        }
        new
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<_> = self.iter().map(|e| (&e.key, &e.value)).collect();
        f.debug_struct("Dictionary")
            .field("key_type", &self.key_type)
            .field("value_type", &self.value_type)
            .field("len", &self.len)
            .field("entries", &entries)
            .finish()
    }
}

impl IntoIterator for Dictionary {
    type Item = Entry;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            forward: self.head,
            back: self.tail,
            nodes: self.nodes,
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::String);
        dict.add("wow", "3").unwrap();
        dict.add("1", "one").unwrap();
        dict.add("oho", "noice").unwrap();
        dict
    }

    fn keys_of(dict: &Dictionary) -> Vec<Value> {
        dict.iter().map(|e| e.key.clone()).collect()
    }

    #[test]
    fn test_to_array_insertion_order() {
        let mut dict = sample();
        let array = dict.to_array();

        let pairs: Vec<_> = array.iter().collect();
        assert_eq!(
            pairs,
            [
                (&Value::from("wow"), &Value::from("3")),
                (&Value::from("1"), &Value::from("one")),
                (&Value::from("oho"), &Value::from("noice")),
            ]
        );
    }

    #[test]
    fn test_to_array_last_write_wins() {
        let mut dict = Dictionary::new();
        dict.add("a", 1).unwrap();
        dict.add("b", 2).unwrap();
        dict.add("a", 3).unwrap();

        assert_eq!(dict.len(), 3);
        let array = dict.to_array();
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(&Value::from("a")), Some(&Value::from(3)));
        // The collapsed key keeps its first position.
        let keys: Vec<_> = array.keys().collect();
        assert_eq!(keys, [&Value::from("a"), &Value::from("b")]);
    }

    #[test]
    fn test_add_type_mismatch_key() {
        let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::String);
        let err = dict.add(7, "value").unwrap_err();
        assert_eq!(
            err,
            DictError::TypeMismatch {
                key_type: TypeTag::String,
                value_type: TypeTag::String,
                given: "integer",
            }
        );
        assert!(dict.is_empty());
    }

    #[test]
    fn test_add_type_mismatch_value_leaves_chain_untouched() {
        let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::Integer);
        dict.add("ok", 1).unwrap();
        assert!(dict.add("bad", "nope").is_err());

        assert_eq!(dict.len(), 1);
        assert_eq!(keys_of(&dict), [Value::from("ok")]);
    }

    #[test]
    fn test_add_mixed_accepts_heterogeneous_values() {
        let mut dict = Dictionary::new();
        dict.add("s", "string").unwrap();
        dict.add(1, 1.5).unwrap();
        dict.add(true, Value::Null).unwrap();
        dict.add(Value::Resource(9), false).unwrap();
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_get_first_match_wins() {
        let mut dict = Dictionary::new();
        dict.add("k", "first").unwrap();
        dict.add("k", "second").unwrap();
        assert_eq!(dict.get("k").unwrap(), &Value::from("first"));
    }

    #[test]
    fn test_get_on_empty_fails() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.get("anything"), Err(DictError::NotFound));
    }

    #[test]
    fn test_get_strict_equality() {
        let mut dict = Dictionary::new();
        dict.add(1, "int").unwrap();
        assert_eq!(dict.get(1.0), Err(DictError::NotFound));
        assert_eq!(dict.get("1"), Err(DictError::NotFound));
        assert_eq!(dict.get(1).unwrap(), &Value::from("int"));
    }

    #[test]
    fn test_remove_on_empty_fails() {
        let mut dict = Dictionary::new();
        assert!(matches!(dict.remove("k"), Err(DictError::NotFound)));
    }

    #[test]
    fn test_remove_head() {
        let mut dict = sample();
        let removed = dict.remove("wow").unwrap();
        assert_eq!(removed.value, Value::from("3"));
        assert_eq!(dict.len(), 2);
        assert_eq!(keys_of(&dict), [Value::from("1"), Value::from("oho")]);
        assert_eq!(dict.get("wow"), Err(DictError::NotFound));
    }

    #[test]
    fn test_remove_middle() {
        let mut dict = sample();
        dict.remove("1").unwrap();
        assert_eq!(keys_of(&dict), [Value::from("wow"), Value::from("oho")]);
    }

    #[test]
    fn test_remove_tail() {
        let mut dict = sample();
        dict.remove("oho").unwrap();
        assert_eq!(keys_of(&dict), [Value::from("wow"), Value::from("1")]);
        // The tail is updated, so appends land after the surviving entries.
        dict.add("new", "tail").unwrap();
        assert_eq!(
            keys_of(&dict),
            [Value::from("wow"), Value::from("1"), Value::from("new")]
        );
    }

    #[test]
    fn test_remove_only_entry() {
        let mut dict = Dictionary::new();
        dict.add("solo", 1).unwrap();
        dict.remove("solo").unwrap();
        assert!(dict.is_empty());
        assert!(keys_of(&dict).is_empty());
        // Empty chain accepts new entries again.
        dict.add("again", 2).unwrap();
        assert_eq!(dict.get("again").unwrap(), &Value::from(2));
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut dict = Dictionary::new();
        dict.add("dup", 1).unwrap();
        dict.add("mid", 2).unwrap();
        dict.add("dup", 3).unwrap();

        dict.remove("dup").unwrap();
        assert_eq!(dict.len(), 2);
        // The later duplicate is now the first match.
        assert_eq!(dict.get("dup").unwrap(), &Value::from(3));

        dict.remove("dup").unwrap();
        assert_eq!(dict.get("dup"), Err(DictError::NotFound));
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut dict = sample();
        let mut seen = Vec::new();
        dict.for_each(|entry| seen.push(entry.key.clone()));
        assert_eq!(
            seen,
            [Value::from("wow"), Value::from("1"), Value::from("oho")]
        );
    }

    #[test]
    fn test_for_each_mutations_persist() {
        let mut dict = sample();
        dict.for_each(|entry| {
            if let Value::String(s) = &mut entry.value {
                s.push('!');
            }
        });
        assert_eq!(dict.get("wow").unwrap(), &Value::from("3!"));
        assert_eq!(dict.get("oho").unwrap(), &Value::from("noice!"));
    }

    #[test]
    fn test_map_rewrites_only_the_output() {
        let mut dict = sample();
        let mut mapped = dict
            .map(|entry| {
                if let Value::String(s) = &mut entry.value {
                    s.push_str("_added");
                }
                Verdict::Emit
            })
            .unwrap();

        let array = mapped.to_array();
        let pairs: Vec<_> = array.iter().collect();
        assert_eq!(
            pairs,
            [
                (&Value::from("wow"), &Value::from("3_added")),
                (&Value::from("1"), &Value::from("one_added")),
                (&Value::from("oho"), &Value::from("noice_added")),
            ]
        );

        // The source is unchanged, key and value alike.
        let original = dict.to_array();
        assert_eq!(original.get(&Value::from("wow")), Some(&Value::from("3")));
        assert_eq!(
            original.get(&Value::from("oho")),
            Some(&Value::from("noice"))
        );
    }

    #[test]
    fn test_map_filters_on_undefined_verdict() {
        let mut dict = sample();
        let mut numbers = dict
            .map_with_types(TypeTag::String, TypeTag::Integer, |entry| {
                let parsed = entry.value.as_str().and_then(|s| s.parse::<i64>().ok());
                match parsed {
                    Some(n) => {
                        entry.value = Value::from(n);
                        Verdict::Emit
                    }
                    None => Verdict::Undefined,
                }
            })
            .unwrap();

        assert_eq!(numbers.key_type(), TypeTag::String);
        assert_eq!(numbers.value_type(), TypeTag::Integer);
        // Only "3" parses; "one" and "noice" do not, so their entries are
        // dropped regardless of what their keys look like.
        let array = numbers.to_array();
        let pairs: Vec<_> = array.iter().collect();
        assert_eq!(pairs, [(&Value::from("wow"), &Value::from(3))]);
        assert_eq!(dict.get("1").unwrap(), &Value::from("one"));
    }

    #[test]
    fn test_map_output_never_longer_than_input() {
        let mut dict = sample();
        let all = dict.map(|_| Verdict::Emit).unwrap();
        assert_eq!(all.len(), dict.len());
        let none = dict.map(|_| Verdict::Undefined).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_map_type_mismatch_fails() {
        let mut dict = sample();
        // The transform keeps string values but the output demands integers.
        let err = dict
            .map_with_types(TypeTag::String, TypeTag::Integer, |_| Verdict::Emit)
            .unwrap_err();
        assert_eq!(
            err,
            DictError::TypeMismatch {
                key_type: TypeTag::String,
                value_type: TypeTag::Integer,
                given: "string",
            }
        );
        // The source survives the failed call.
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_map_inherits_types_by_default() {
        let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::Integer);
        dict.add("a", 1).unwrap();
        let mapped = dict.map(|_| Verdict::Emit).unwrap();
        assert_eq!(mapped.key_type(), TypeTag::String);
        assert_eq!(mapped.value_type(), TypeTag::Integer);
    }

    #[test]
    fn test_clone_is_deep_and_ordered() {
        let dict = sample();
        let mut cloned = dict.clone();
        assert_eq!(keys_of(&cloned), keys_of(&dict));
        cloned.remove("wow").unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(cloned.len(), 2);
    }

    #[test]
    fn test_into_iter_drains_in_order() {
        let dict = sample();
        let keys: Vec<_> = dict.into_iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            [Value::from("wow"), Value::from("1"), Value::from("oho")]
        );
    }

    #[test]
    fn test_debug_output_mentions_types_and_len() {
        let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::Integer);
        dict.add("a", 1).unwrap();
        let rendered = format!("{dict:?}");
        assert!(rendered.contains("String"));
        assert!(rendered.contains("Integer"));
        assert!(rendered.contains("len: 1"));
    }

    #[test]
    fn test_removed_slot_is_reused() {
        let mut dict = Dictionary::new();
        for i in 0..8 {
            dict.add(i, i).unwrap();
        }
        for i in 0..8 {
            dict.remove(i).unwrap();
        }
        // Re-adding after a full drain rebuilds the chain from scratch.
        for i in 0..8 {
            dict.add(i, i * 10).unwrap();
        }
        assert_eq!(dict.len(), 8);
        assert_eq!(dict.get(7).unwrap(), &Value::from(70));
    }
}
