//! Edge-list input parsing.
//!
//! One `a-b` edge per line. Node classes come from the labels themselves
//! (see [`NodeClass::from_label`]).

use crate::error::{Error, Result};
use crate::graph::{CaveGraph, NodeClass};

/// Split a line into its two endpoint labels
fn parse_line(line_no: usize, line: &str) -> Result<(&str, &str)> {
    let malformed = || Error::MalformedEdge {
        line: line_no,
        text: line.to_string(),
    };
    let (a, b) = line.split_once('-').ok_or_else(malformed)?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() || b.contains('-') {
        return Err(malformed());
    }
    Ok((a, b))
}

/// Build a graph from edge-list text.
///
/// Blank lines are skipped. Boundary nodes are only registered if an edge
/// mentions them.
pub fn parse_edges(input: &str) -> Result<CaveGraph> {
    let mut graph = CaveGraph::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (a, b) = parse_line(index + 1, line)?;
        graph.add_node(a, NodeClass::from_label(a))?;
        graph.add_node(b, NodeClass::from_label(b))?;
        graph.add_edge(a, b)?;
    }

    Ok(graph)
}
