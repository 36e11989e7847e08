//! Multiplicity-aware tracker for the active traversal path.
//!
//! A plain visited-set cannot express "this one node may appear twice", so
//! the counter keeps both the ordered root-to-frontier sequence and an
//! occurrence count per node.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::graph::NodeId;

/// Ordered sequence of visited nodes plus per-node occurrence counts
#[derive(Debug, Clone, Default)]
pub struct VisitCounter {
    stack: SmallVec<[NodeId; 32]>,
    /// Indexed by `NodeId::index()`
    counts: Vec<usize>,
}

impl VisitCounter {
    /// Create an empty counter sized for a graph of `node_count` nodes
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            stack: SmallVec::new(),
            counts: vec![0; node_count],
        }
    }

    /// Counter seeded with a single node (the traversal root)
    pub fn seeded(node_count: usize, root: NodeId) -> Self {
        let mut counter = Self::with_node_count(node_count);
        counter.push(root);
        counter
    }

    pub fn push(&mut self, id: NodeId) {
        let index = id.index();
        if index >= self.counts.len() {
            self.counts.resize(index + 1, 0);
        }
        self.counts[index] += 1;
        self.stack.push(id);
    }

    /// Remove the most recently pushed node.
    ///
    /// # Panics
    ///
    /// Panics if the counter is empty; that means the traversal driver
    /// popped more than it pushed.
    pub fn pop(&mut self) -> NodeId {
        let id = self
            .stack
            .pop()
            .expect("pop on empty VisitCounter: traversal stack out of balance");
        self.counts[id.index()] -= 1;
        id
    }

    pub fn occurrences(&self, id: NodeId) -> usize {
        self.counts.get(id.index()).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Current sequence with `extra` appended; the counter is left untouched
    pub fn snapshot_path(&self, extra: NodeId) -> Path {
        let mut nodes = Vec::with_capacity(self.stack.len() + 1);
        nodes.extend_from_slice(&self.stack);
        nodes.push(extra);
        Path(nodes)
    }
}

/// A completed start-to-end path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<NodeId>);

impl Path {
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    /// How many times `id` appears in the path
    pub fn occurrences(&self, id: NodeId) -> usize {
        self.0.iter().filter(|&&node| node == id).count()
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Path(nodes)
    }
}
