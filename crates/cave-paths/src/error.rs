//! Error types for graph construction, parsing and enumeration.
//!
//! Every variant is fatal for the call that produced it. The graph is static,
//! so retrying an operation cannot change its outcome.

use thiserror::Error;

use crate::graph::NodeClass;

/// Errors surfaced by the cave-path engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown node '{label}'")]
    UnknownNode { label: String },

    #[error("node '{label}' already registered as {existing}, cannot re-register as {requested}")]
    ConflictingAttribute {
        label: String,
        existing: NodeClass,
        requested: NodeClass,
    },

    #[error("cannot register '{label}' as {class}: '{existing}' already holds that class")]
    DuplicateBoundary {
        label: String,
        class: NodeClass,
        existing: String,
    },

    #[error("self-loop on node '{label}'")]
    SelfLoop { label: String },

    #[error("malformed edge on line {line}: '{text}'")]
    MalformedEdge { line: usize, text: String },

    #[error("step budget of {limit} exceeded")]
    StepBudgetExceeded { limit: usize },

    #[error("path budget of {limit} exceeded")]
    PathBudgetExceeded { limit: usize },
}

impl Error {
    pub fn unknown_node(label: impl Into<String>) -> Self {
        Self::UnknownNode {
            label: label.into(),
        }
    }

    /// Whether this error came from an exploration budget rather than from
    /// malformed input.
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(
            self,
            Self::StepBudgetExceeded { .. } | Self::PathBudgetExceeded { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
