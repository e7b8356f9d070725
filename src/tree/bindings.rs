use std::fmt;
use std::ops::Index;

/// One named value extracted by a parameter or catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Bindings in traversal order, root to leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<KeyValue>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Value of the first binding named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|kv| kv.key == key)
            .map(|kv| kv.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyValue> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[KeyValue] {
        &self.entries
    }

    pub fn push(&mut self, key: &str, value: &str) {
        self.entries.push(KeyValue::new(key, value));
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    /// A fresh, exactly sized copy with one more binding appended. The
    /// receiver is left untouched, so no two branches share a tail.
    pub(crate) fn extended(&self, key: &str, value: &str) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(KeyValue::new(key, value));
        Self { entries }
    }

    /// Exactly sized snapshot handed out with a match result.
    pub(crate) fn snapshot(&self) -> Self {
        Self {
            entries: self.entries.to_vec(),
        }
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}

impl Index<usize> for Bindings {
    type Output = KeyValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = &'a KeyValue;
    type IntoIter = std::slice::Iter<'a, KeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, kv) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", kv.key, kv.value)?;
        }
        f.write_str("}")
    }
}

/// A registered route that matched a path.
#[derive(Debug)]
pub struct Match<'t, H> {
    pub bindings: Bindings,
    pub handler: &'t H,
    depth: usize,
    sequence: usize,
}

impl<'t, H> Match<'t, H> {
    pub(crate) fn new(bindings: Bindings, handler: &'t H, depth: usize, sequence: usize) -> Self {
        Self {
            bindings,
            handler,
            depth,
            sequence,
        }
    }

    /// Segments consumed to reach the match. A catch-all consumes the whole
    /// remainder, so every result of one lookup reports the same depth and
    /// results are ordered by [`Match::sequence`].
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Discovery order within the lookup that produced this match.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    #[inline]
    pub(crate) fn rank(&self) -> (usize, usize) {
        (self.depth, self.sequence)
    }
}

impl<H> Clone for Match<'_, H> {
    fn clone(&self) -> Self {
        Self {
            bindings: self.bindings.clone(),
            handler: self.handler,
            depth: self.depth,
            sequence: self.sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_first_binding_with_name() {
        let mut b = Bindings::new();
        b.push("id", "1");
        b.push("id", "2");
        assert_eq!(b.get("id"), Some("1"));
        assert_eq!(b.get("missing"), None);
    }

    #[test]
    fn extended_copies_and_leaves_source_alone() {
        let mut base = Bindings::with_capacity(8);
        base.push("a", "1");
        let next = base.extended("b", "2");

        assert_eq!(base.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next.capacity(), 2);
        assert_eq!(next[1], KeyValue::new("b", "2"));
    }

    #[test]
    fn snapshot_is_exactly_sized() {
        let mut base = Bindings::with_capacity(16);
        base.push("a", "1");
        assert_eq!(base.snapshot().capacity(), 1);
    }

    #[test]
    fn display_lists_bindings_in_order() {
        let mut b = Bindings::new();
        b.push("b", "x");
        b.push("rest", "x/c");
        assert_eq!(b.to_string(), "{b: \"x\", rest: \"x/c\"}");
    }
}
