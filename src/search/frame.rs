//! Per-depth state of the trie walk.

use crate::trie::NodeId;

/// Search state for one trie node on the current path.
#[derive(Debug, Clone, Default)]
pub struct SearchFrame {
    pub(crate) node: NodeId,
    /// Index of the next child to visit.
    pub(crate) next_child: usize,
    pub(crate) child_count: usize,
    /// Distance from this node's prefix to every prefix of the typed string.
    pub(crate) row: Vec<f32>,
    /// `row[typed.len()]`: distance of the prefix itself.
    pub(crate) distance: f32,
    /// Lower bound on the distance of any string extending the prefix.
    pub(crate) min_distance: f32,
}

impl SearchFrame {
    /// Resize the row for a typed string of `typed_len` characters.
    pub(crate) fn reset_row(&mut self, typed_len: usize) {
        self.row.clear();
        self.row.resize(typed_len + 1, 0.0);
    }

    /// Point this frame at `node` with no children visited yet.
    pub(crate) fn enter(&mut self, node: NodeId, child_count: usize) {
        self.node = node;
        self.next_child = 0;
        self.child_count = child_count;
    }

    pub(crate) fn has_next_child(&self) -> bool {
        self.next_child < self.child_count
    }
}
