//! Flat, index-addressed prefix trie over a sorted dictionary.
//!
//! ```text
//! dictionary: ["a", "ab", "ac"]
//!
//!   node 0 (root)  values [0, 0)   children: 'a' -> 1
//!   node 1 "a"     values [0, 1)   children: 'b' -> 2, 'c' -> 3
//!   node 2 "ab"    values [1, 2)
//!   node 3 "ac"    values [2, 3)
//!   node 4         sentinel, values_start = 3
//! ```
//!
//! Every node owns the dictionary range from its own `values_start` up to the
//! next node's. Nodes are numbered in pre-order, so a subtree is a contiguous
//! run of node ids and a contiguous run of dictionary entries.

pub mod lookup;
pub mod structure;

pub use structure::{Edge, NodeId, TrieStructure};
