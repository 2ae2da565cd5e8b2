//! Construction of the flat trie encoding.

use std::ops::Range;

/// Index of a node in a [`TrieStructure`].
pub type NodeId = u32;

/// A labelled edge from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Character on the edge.
    pub ch: char,
    /// Child node the edge leads to.
    pub node: NodeId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Node {
    /// First dictionary index owned by this node.
    values_start: u32,
    /// Offset of this node's children in the shared edge array.
    edges_start: u32,
    child_count: u32,
}

/// Immutable trie over a sorted, duplicate-free dictionary.
///
/// Nodes live in one array (plus a trailing sentinel) and all edges in
/// another, each node's children stored contiguously and sorted by character.
/// Size is linear in the total number of dictionary characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieStructure {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    max_depth: usize,
}

/// Number of leading characters `a` and `b` share.
pub(crate) fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn reload(buffer: &mut Vec<char>, value: &str) {
    buffer.clear();
    buffer.extend(value.chars());
}

impl TrieStructure {
    /// Build the trie for `values`.
    ///
    /// `values` must be sorted ascending and free of duplicates. This is not
    /// checked in release builds: violating it yields a well-formed trie that
    /// answers lookups incorrectly.
    pub fn build<S: AsRef<str>>(values: &[S]) -> Self {
        debug_assert!(
            values.windows(2).all(|w| w[0].as_ref() < w[1].as_ref()),
            "trie input must be sorted and duplicate-free"
        );

        let mut prev: Vec<char> = Vec::new();
        let mut cur: Vec<char> = Vec::new();

        // Count nodes and determine maximum depth
        let mut node_count = 1usize;
        let mut max_depth = 0usize;
        for value in values {
            reload(&mut cur, value.as_ref());
            max_depth = max_depth.max(cur.len());
            node_count += cur.len() - common_prefix(&prev, &cur);
            std::mem::swap(&mut prev, &mut cur);
        }

        // Child counts and value starts, in node creation order.
        // stack[d] is the node at depth d on the path of the previous value.
        let mut nodes = vec![Node::default(); node_count + 1];
        let mut stack: Vec<NodeId> = vec![0; max_depth + 1];
        prev.clear();
        let mut n = 1usize;
        for (i, value) in values.iter().enumerate() {
            reload(&mut cur, value.as_ref());
            let c = common_prefix(&prev, &cur);
            if c < cur.len() {
                nodes[stack[c] as usize].child_count += 1;
                for slot in stack.iter_mut().take(cur.len()).skip(c + 1) {
                    nodes[n].child_count += 1;
                    nodes[n].values_start = i as u32;
                    *slot = n as NodeId;
                    n += 1;
                }
                nodes[n].values_start = i as u32;
                stack[cur.len()] = n as NodeId;
                n += 1;
            }
            std::mem::swap(&mut prev, &mut cur);
        }
        debug_assert_eq!(n, node_count);

        // Accumulate child counts into edge offsets; counts restart at zero
        // and are rebuilt while the edges are filled in.
        let mut total = 0u32;
        for node in &mut nodes[..node_count] {
            node.edges_start = total;
            total += node.child_count;
            node.child_count = 0;
        }
        nodes[node_count] = Node {
            values_start: values.len() as u32,
            edges_start: total,
            child_count: 0,
        };

        let mut edges = vec![Edge { ch: '\0', node: 0 }; total as usize];
        let mut attach = |nodes: &mut [Node], parent: NodeId, ch: char, child: usize| {
            let parent = &mut nodes[parent as usize];
            edges[(parent.edges_start + parent.child_count) as usize] = Edge {
                ch,
                node: child as NodeId,
            };
            parent.child_count += 1;
        };

        prev.clear();
        n = 1;
        for value in values {
            reload(&mut cur, value.as_ref());
            let c = common_prefix(&prev, &cur);
            if c < cur.len() {
                attach(&mut nodes, stack[c], cur[c], n);
                n += 1;
                for j in c + 1..cur.len() {
                    stack[j] = (n - 1) as NodeId;
                    attach(&mut nodes, stack[j], cur[j], n);
                    n += 1;
                }
                stack[cur.len()] = (n - 1) as NodeId;
            }
            std::mem::swap(&mut prev, &mut cur);
        }
        debug_assert_eq!(n, node_count);

        TrieStructure {
            nodes,
            edges,
            max_depth,
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        0
    }

    /// Number of trie nodes, not counting the sentinel.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Number of dictionary values the trie was built from.
    pub fn len(&self) -> usize {
        self.nodes[self.nodes.len() - 1].values_start as usize
    }

    /// Whether the trie was built from an empty dictionary.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the longest dictionary value, in characters.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Dictionary indices owned by `node`: those whose value ends exactly here.
    pub fn values_range(&self, node: NodeId) -> Range<usize> {
        let node = node as usize;
        self.nodes[node].values_start as usize..self.nodes[node + 1].values_start as usize
    }

    /// Children of `node`, sorted ascending by character.
    pub fn children(&self, node: NodeId) -> &[Edge] {
        let node = &self.nodes[node as usize];
        let start = node.edges_start as usize;
        &self.edges[start..start + node.child_count as usize]
    }

    /// Number of children of `node`.
    pub fn child_count(&self, node: NodeId) -> usize {
        self.nodes[node as usize].child_count as usize
    }

    /// Dictionary indices of every value in the subtree below `node`,
    /// including `node` itself.
    pub fn subtree_range(&self, node: NodeId) -> Range<usize> {
        let mut last = node;
        while let Some(edge) = self.children(last).last() {
            last = edge.node;
        }
        self.nodes[node as usize].values_start as usize
            ..self.nodes[last as usize + 1].values_start as usize
    }
}
