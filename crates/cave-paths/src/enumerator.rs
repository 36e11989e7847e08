//! Iterative depth-first enumeration of policy-bounded paths.
//!
//! The traversal keeps an explicit frontier stack with one frame per node on
//! the active path, so path length is never bounded by the native call stack
//! and backtracking is an ordinary pop.
//!
//! Termination relies on the graph having no cycle made only of unrestricted
//! nodes. That is not checked; set [`EnumerationConfig::max_steps`] to fail
//! with [`Error::StepBudgetExceeded`] instead of running forever.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{CaveGraph, NodeId};
use crate::policy::RevisitPolicy;
use crate::visit::{Path, VisitCounter};

/// Exploration limits for a single enumeration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Maximum frontier inspections before giving up
    pub max_steps: Option<usize>,
    /// Maximum number of paths to collect before giving up
    pub max_paths: Option<usize>,
}

impl EnumerationConfig {
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// Output of a completed enumeration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Paths in discovery order
    pub paths: Vec<Path>,
    /// Frontier inspections performed
    pub steps: usize,
}

/// Candidates still to try at one depth of the active path
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next: usize,
}

impl Frame {
    fn new(node: NodeId) -> Self {
        Self { node, next: 0 }
    }
}

/// Enumerate every path from `start` to `end` allowed by `policy`.
///
/// Both labels are resolved before traversal starts; a missing one fails with
/// [`Error::UnknownNode`]. Budget failures discard everything found so far.
pub fn enumerate_paths(
    graph: &CaveGraph,
    start: &str,
    end: &str,
    policy: RevisitPolicy,
    config: &EnumerationConfig,
) -> Result<Enumeration> {
    let start = graph.id_of(start)?;
    let end = graph.id_of(end)?;
    enumerate_between(graph, start, end, policy, config)
}

/// Same as [`enumerate_paths`] with already-resolved node ids.
///
/// Ids not issued by `graph` fail with [`Error::UnknownNode`].
pub fn enumerate_between(
    graph: &CaveGraph,
    start: NodeId,
    end: NodeId,
    policy: RevisitPolicy,
    config: &EnumerationConfig,
) -> Result<Enumeration> {
    for id in [start, end] {
        if !graph.contains(id) {
            return Err(Error::unknown_node(format!("#{}", id.index())));
        }
    }

    let mut frontier: Vec<Frame> = vec![Frame::new(start)];
    let mut visited = VisitCounter::seeded(graph.len(), start);
    let mut paths: Vec<Path> = Vec::new();
    let mut steps: usize = 0;

    while let Some(frame) = frontier.last_mut() {
        if let Some(limit) = config.max_steps {
            if steps >= limit {
                trace!(limit, depth = visited.len(), "step budget exhausted");
                return Err(Error::StepBudgetExceeded { limit });
            }
        }
        steps += 1;

        // Exhausted frame: backtrack one level
        let Some(&child) = graph.neighbors(frame.node).get(frame.next) else {
            frontier.pop();
            visited.pop();
            continue;
        };
        frame.next += 1;

        if policy.rejects(child, graph.class(child), &visited) {
            continue;
        }

        // The end node absorbs: record the path but never expand past it
        if child == end {
            paths.push(visited.snapshot_path(child));
            if let Some(limit) = config.max_paths {
                if paths.len() > limit {
                    trace!(limit, "path budget exhausted");
                    return Err(Error::PathBudgetExceeded { limit });
                }
            }
            continue;
        }

        visited.push(child);
        frontier.push(Frame::new(child));
    }

    debug_assert!(visited.is_empty());
    debug!(?policy, paths = paths.len(), steps, "enumeration finished");

    Ok(Enumeration { paths, steps })
}
