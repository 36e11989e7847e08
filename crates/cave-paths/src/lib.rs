//! Cave path enumeration library.
//!
//! Counts the paths through a small undirected cave graph from `start` to
//! `end`, where lower-case (restricted) caves may only be revisited as a
//! [`RevisitPolicy`] allows and upper-case caves may be revisited freely.
//! The engine is an exhaustive, non-recursive depth-first enumerator.

pub mod enumerator;
pub mod error;
pub mod graph;
pub mod parse;
pub mod policy;
pub mod solve;
pub mod visit;

#[cfg(test)]
mod fixtures;

// Re-export main types
pub use enumerator::{enumerate_between, enumerate_paths, Enumeration, EnumerationConfig};
pub use error::{Error, Result};
pub use graph::{CaveGraph, NodeClass, NodeId, END_LABEL, START_LABEL};
pub use parse::parse_edges;
pub use policy::RevisitPolicy;
pub use solve::{
    count_one_extra_visit, count_single_visit, distinct_one_extra_visit_paths, paths_with_policy,
};
pub use visit::{Path, VisitCounter};
