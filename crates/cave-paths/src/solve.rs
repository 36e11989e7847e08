//! Path-count reductions over the enumeration engine.
//!
//! Part 1 counts paths under [`RevisitPolicy::SingleVisit`]. Part 2 runs one
//! [`RevisitPolicy::OneExtraVisit`] enumeration per restricted node and
//! counts the distinct paths of the union: different exempt choices rediscover
//! every path that never uses its extra allowance.

use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::enumerator::{enumerate_between, Enumeration, EnumerationConfig};
use crate::error::Result;
use crate::graph::{CaveGraph, NodeId, END_LABEL, START_LABEL};
use crate::policy::RevisitPolicy;
use crate::visit::Path;

fn boundaries(graph: &CaveGraph) -> Result<(NodeId, NodeId)> {
    Ok((graph.id_of(START_LABEL)?, graph.id_of(END_LABEL)?))
}

/// All paths from `start` to `end` under `policy`
pub fn paths_with_policy(
    graph: &CaveGraph,
    policy: RevisitPolicy,
    config: &EnumerationConfig,
) -> Result<Vec<Path>> {
    let (start, end) = boundaries(graph)?;
    enumerate_between(graph, start, end, policy, config).map(|run| run.paths)
}

/// Number of paths visiting each restricted node at most once
pub fn count_single_visit(graph: &CaveGraph, config: &EnumerationConfig) -> Result<usize> {
    paths_with_policy(graph, RevisitPolicy::SingleVisit, config).map(|paths| paths.len())
}

/// Union of the one-extra-visit runs over every restricted node, in
/// first-discovery order.
pub fn distinct_one_extra_visit_paths(
    graph: &CaveGraph,
    config: &EnumerationConfig,
) -> Result<Vec<Path>> {
    let (start, end) = boundaries(graph)?;
    let exempts: Vec<NodeId> = graph.restricted_nodes().collect();

    let run = |&exempt: &NodeId| -> Result<Enumeration> {
        enumerate_between(
            graph,
            start,
            end,
            RevisitPolicy::OneExtraVisit { exempt },
            config,
        )
    };

    #[cfg(feature = "parallel")]
    let runs: Vec<Enumeration> = exempts.par_iter().map(run).collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let runs: Vec<Enumeration> = exempts.iter().map(run).collect::<Result<_>>()?;

    let mut seen: HashSet<Path> = HashSet::new();
    let mut distinct = Vec::new();
    let mut discovered = 0;
    for path in runs.into_iter().flat_map(|run| run.paths) {
        discovered += 1;
        if seen.insert(path.clone()) {
            distinct.push(path);
        }
    }

    debug!(
        exempts = exempts.len(),
        discovered,
        distinct = distinct.len(),
        "merged one-extra-visit runs"
    );
    Ok(distinct)
}

/// Number of distinct paths where a single restricted node may repeat once
pub fn count_one_extra_visit(graph: &CaveGraph, config: &EnumerationConfig) -> Result<usize> {
    distinct_one_extra_visit_paths(graph, config).map(|paths| paths.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fixtures::{self, LARGE, MEDIUM, SMALL};
    use crate::graph::NodeClass;

    #[test]
    fn test_part1_counts() {
        let config = EnumerationConfig::default();
        assert_eq!(count_single_visit(&fixtures::graph(SMALL), &config), Ok(10));
        assert_eq!(count_single_visit(&fixtures::graph(MEDIUM), &config), Ok(19));
        assert_eq!(count_single_visit(&fixtures::graph(LARGE), &config), Ok(226));
    }

    #[test]
    fn test_part2_counts() {
        let config = EnumerationConfig::default();
        assert_eq!(count_one_extra_visit(&fixtures::graph(SMALL), &config), Ok(36));
        assert_eq!(count_one_extra_visit(&fixtures::graph(MEDIUM), &config), Ok(103));
        assert_eq!(count_one_extra_visit(&fixtures::graph(LARGE), &config), Ok(3509));
    }

    #[test]
    fn test_part2_paths_repeat_at_most_one_restricted_node() {
        let graph = fixtures::graph(MEDIUM);
        let paths = distinct_one_extra_visit_paths(&graph, &EnumerationConfig::default()).unwrap();

        let unique: HashSet<&Path> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());

        for path in &paths {
            let repeated: Vec<NodeId> = graph
                .restricted_nodes()
                .filter(|&node| path.occurrences(node) > 1)
                .collect();
            assert!(repeated.len() <= 1, "{}", graph.render(path));
            for &node in &repeated {
                assert_eq!(graph.class(node), NodeClass::Restricted);
                assert_eq!(path.occurrences(node), 2);
            }
        }
    }

    #[test]
    fn test_part2_contains_part1() {
        let graph = fixtures::graph(SMALL);
        let config = EnumerationConfig::default();
        let single = paths_with_policy(&graph, RevisitPolicy::SingleVisit, &config).unwrap();
        let extra: HashSet<Path> = distinct_one_extra_visit_paths(&graph, &config)
            .unwrap()
            .into_iter()
            .collect();
        assert!(single.iter().all(|path| extra.contains(path)));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_union_matches_sequential_order() {
        let config = EnumerationConfig::default();
        for (input, expected) in [(SMALL, 36), (MEDIUM, 103), (LARGE, 3509)] {
            let graph = fixtures::graph(input);
            let (start, end) = boundaries(&graph).unwrap();

            let mut seen = HashSet::new();
            let mut sequential = Vec::new();
            for exempt in graph.restricted_nodes() {
                let policy = RevisitPolicy::OneExtraVisit { exempt };
                for path in enumerate_between(&graph, start, end, policy, &config)
                    .unwrap()
                    .paths
                {
                    if seen.insert(path.clone()) {
                        sequential.push(path);
                    }
                }
            }

            let parallel = distinct_one_extra_visit_paths(&graph, &config).unwrap();
            assert_eq!(parallel.len(), expected);
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_missing_end_is_unknown_node() {
        let graph = fixtures::graph("start-A\nA-b");
        let config = EnumerationConfig::default();
        assert_eq!(
            count_single_visit(&graph, &config),
            Err(Error::unknown_node("end"))
        );
        assert_eq!(
            count_one_extra_visit(&graph, &config),
            Err(Error::unknown_node("end"))
        );
    }

    #[test]
    fn test_budget_error_propagates_from_any_run() {
        let graph = fixtures::graph(LARGE);
        let config = EnumerationConfig {
            max_steps: None,
            max_paths: Some(500),
        };
        assert_eq!(
            count_one_extra_visit(&graph, &config),
            Err(Error::PathBudgetExceeded { limit: 500 })
        );
    }
}
