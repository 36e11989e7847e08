//! Undirected cave graph with per-node classes.
//!
//! Nodes live in an arena addressed by [`NodeId`]. Adjacency lists keep edge
//! insertion order so enumeration output is reproducible. The graph is
//! write-once: nothing is ever removed, and traversal only reads it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::visit::Path;

/// Label of the unique start node.
pub const START_LABEL: &str = "start";
/// Label of the unique end node.
pub const END_LABEL: &str = "end";

/// Revisit class of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeClass {
    Start,
    End,
    /// Small cave: all lower-case label
    Restricted,
    /// Big cave: label with an upper-case character
    Unrestricted,
}

impl NodeClass {
    /// Derive the class from a raw label. The boundary labels win over the
    /// case rule.
    pub fn from_label(label: &str) -> Self {
        match label {
            START_LABEL => NodeClass::Start,
            END_LABEL => NodeClass::End,
            _ if label.chars().any(char::is_uppercase) => NodeClass::Unrestricted,
            _ => NodeClass::Restricted,
        }
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, NodeClass::Start | NodeClass::End)
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeClass::Start => "start",
            NodeClass::End => "end",
            NodeClass::Restricted => "restricted",
            NodeClass::Unrestricted => "unrestricted",
        };
        f.write_str(name)
    }
}

/// Arena index of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Node {
    label: String,
    class: NodeClass,
}

#[derive(Debug, Clone, Default)]
pub struct CaveGraph {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<NodeId>>,
    by_label: HashMap<String, NodeId>,
}

impl CaveGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Re-registering with the same class returns the
    /// existing id; a different class is a [`Error::ConflictingAttribute`].
    ///
    /// `start` and `end` may only carry their boundary class, and at most one
    /// node of each boundary class may exist.
    pub fn add_node(&mut self, label: &str, class: NodeClass) -> Result<NodeId> {
        let reserved = match label {
            START_LABEL => Some(NodeClass::Start),
            END_LABEL => Some(NodeClass::End),
            _ => None,
        };
        if let Some(existing) = reserved.filter(|&reserved| reserved != class) {
            return Err(Error::ConflictingAttribute {
                label: label.to_string(),
                existing,
                requested: class,
            });
        }

        if let Some(&id) = self.by_label.get(label) {
            let existing = self.class(id);
            if existing != class {
                return Err(Error::ConflictingAttribute {
                    label: label.to_string(),
                    existing,
                    requested: class,
                });
            }
            return Ok(id);
        }

        if class.is_boundary() {
            if let Some(holder) = self.nodes.iter().find(|node| node.class == class) {
                return Err(Error::DuplicateBoundary {
                    label: label.to_string(),
                    class,
                    existing: holder.label.clone(),
                });
            }
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            label: label.to_string(),
            class,
        });
        self.adjacency.push(Vec::new());
        self.by_label.insert(label.to_string(), id);
        Ok(id)
    }

    /// Connect two registered nodes. Duplicate edges are no-ops.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<()> {
        let a_id = self.id_of(a)?;
        let b_id = self.id_of(b)?;
        if a_id == b_id {
            return Err(Error::SelfLoop {
                label: a.to_string(),
            });
        }
        if self.adjacency[a_id.index()].contains(&b_id) {
            return Ok(());
        }
        self.adjacency[a_id.index()].push(b_id);
        self.adjacency[b_id.index()].push(a_id);
        Ok(())
    }

    pub fn id_of(&self, label: &str) -> Result<NodeId> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| Error::unknown_node(label))
    }

    /// Class of a node looked up by label
    pub fn attribute_of(&self, label: &str) -> Result<NodeClass> {
        self.id_of(label).map(|id| self.class(id))
    }

    /// Whether `id` was issued by this graph
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn class(&self, id: NodeId) -> NodeClass {
        self.nodes[id.index()].class
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].label
    }

    /// Neighbors in the order their edges were added
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Restricted nodes in registration order
    pub fn restricted_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.class == NodeClass::Restricted)
            .map(|(index, _)| NodeId(index as u32))
    }

    /// Render a path as comma-separated labels
    pub fn render(&self, path: &Path) -> String {
        path.nodes()
            .iter()
            .map(|&id| self.label(id))
            .collect::<Vec<_>>()
            .join(",")
    }
}
