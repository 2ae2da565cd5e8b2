//! Exact descent through the trie.

use std::ops::Range;

use crate::trie::structure::{NodeId, TrieStructure};

impl TrieStructure {
    /// Child of `node` along the edge labelled `ch`.
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        let children = self.children(node);
        children
            .binary_search_by(|edge| edge.ch.cmp(&ch))
            .ok()
            .map(|i| children[i].node)
    }

    /// Node reached by spelling out `query` from the root, or None if the
    /// trie has no such path. The node need not own a value.
    pub fn exact_node(&self, query: &[char]) -> Option<NodeId> {
        query
            .iter()
            .try_fold(self.root(), |node, &ch| self.child(node, ch))
    }

    /// [`exact_node`](Self::exact_node) for a string query.
    pub fn find(&self, query: &str) -> Option<NodeId> {
        query
            .chars()
            .try_fold(self.root(), |node, ch| self.child(node, ch))
    }

    /// Dictionary index of `query`, if it is one of the values.
    pub fn index_of(&self, query: &str) -> Option<usize> {
        let node = self.find(query)?;
        let range = self.values_range(node);
        (!range.is_empty()).then_some(range.start)
    }

    /// Whether `query` is one of the values.
    pub fn contains(&self, query: &str) -> bool {
        self.index_of(query).is_some()
    }

    /// Dictionary indices of every value starting with `prefix`.
    pub fn prefix_range(&self, prefix: &str) -> Range<usize> {
        match self.find(prefix) {
            Some(node) => self.subtree_range(node),
            None => 0..0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> Vec<&'static str> {
        vec!["apple", "apples", "apply", "banana", "band", "bandana"]
    }

    #[test]
    fn test_round_trip() {
        let values = values();
        let trie = TrieStructure::build(&values);
        for (index, value) in values.iter().enumerate() {
            let query: Vec<char> = value.chars().collect();
            let node = trie.exact_node(&query).unwrap();
            assert!(trie.values_range(node).contains(&index), "{value}");
            assert_eq!(trie.index_of(value), Some(index));
        }
    }

    #[test]
    fn test_missing_paths() {
        let trie = TrieStructure::build(&values());
        assert_eq!(trie.find("applz"), None);
        assert_eq!(trie.find("bandanas"), None);
        assert!(trie.find("ban").is_some());
        assert!(!trie.contains("ban"));
        assert!(trie.contains("band"));
    }

    #[test]
    fn test_empty_query_is_root() {
        let trie = TrieStructure::build(&values());
        assert_eq!(trie.exact_node(&[]), Some(trie.root()));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_prefix_range() {
        let values = values();
        let trie = TrieStructure::build(&values);
        assert_eq!(trie.prefix_range("appl"), 0..3);
        assert_eq!(trie.prefix_range("band"), 4..6);
        assert_eq!(trie.prefix_range("b"), 3..6);
        assert_eq!(trie.prefix_range(""), 0..6);
        assert!(trie.prefix_range("c").is_empty());
    }
}
