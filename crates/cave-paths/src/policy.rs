//! Revisit rules deciding whether a candidate node may be entered.

use serde::{Deserialize, Serialize};

use crate::graph::{NodeClass, NodeId};
use crate::visit::VisitCounter;

/// Rule set governing how often each node class may appear in a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevisitPolicy {
    /// Restricted and boundary nodes at most once
    SingleVisit,
    /// Like `SingleVisit`, but `exempt` may be entered a second time
    OneExtraVisit { exempt: NodeId },
}

impl RevisitPolicy {
    /// Returns `true` when entering `candidate` would break the policy.
    pub fn rejects(&self, candidate: NodeId, class: NodeClass, visited: &VisitCounter) -> bool {
        let seen = visited.occurrences(candidate);
        match class {
            NodeClass::Unrestricted => false,
            NodeClass::Start | NodeClass::End => seen > 0,
            NodeClass::Restricted => match *self {
                RevisitPolicy::SingleVisit => seen > 0,
                RevisitPolicy::OneExtraVisit { exempt } => {
                    seen > 0 && (candidate != exempt || seen > 1)
                }
            },
        }
    }

    /// The node allowed a second visit, if any
    pub fn exempt(&self) -> Option<NodeId> {
        match *self {
            RevisitPolicy::SingleVisit => None,
            RevisitPolicy::OneExtraVisit { exempt } => Some(exempt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CaveGraph;

    struct Nodes {
        start: NodeId,
        big: NodeId,
        a: NodeId,
        b: NodeId,
        end: NodeId,
    }

    fn nodes() -> Nodes {
        let mut graph = CaveGraph::new();
        Nodes {
            start: graph.add_node("start", NodeClass::Start).unwrap(),
            big: graph.add_node("A", NodeClass::Unrestricted).unwrap(),
            a: graph.add_node("a", NodeClass::Restricted).unwrap(),
            b: graph.add_node("b", NodeClass::Restricted).unwrap(),
            end: graph.add_node("end", NodeClass::End).unwrap(),
        }
    }

    #[test]
    fn test_single_visit() {
        let n = nodes();
        let policy = RevisitPolicy::SingleVisit;
        let mut visited = VisitCounter::seeded(5, n.start);

        assert!(policy.rejects(n.start, NodeClass::Start, &visited));
        assert!(!policy.rejects(n.a, NodeClass::Restricted, &visited));
        assert!(!policy.rejects(n.end, NodeClass::End, &visited));

        visited.push(n.a);
        visited.push(n.big);
        visited.push(n.big);
        assert!(policy.rejects(n.a, NodeClass::Restricted, &visited));
        assert!(!policy.rejects(n.big, NodeClass::Unrestricted, &visited));
    }

    #[test]
    fn test_one_extra_visit_allows_exempt_twice() {
        let n = nodes();
        let policy = RevisitPolicy::OneExtraVisit { exempt: n.a };
        let mut visited = VisitCounter::seeded(5, n.start);

        visited.push(n.a);
        assert!(!policy.rejects(n.a, NodeClass::Restricted, &visited));
        visited.push(n.a);
        assert!(policy.rejects(n.a, NodeClass::Restricted, &visited));
    }

    #[test]
    fn test_one_extra_visit_other_nodes_once() {
        let n = nodes();
        let policy = RevisitPolicy::OneExtraVisit { exempt: n.a };
        let mut visited = VisitCounter::seeded(5, n.start);

        visited.push(n.b);
        assert!(policy.rejects(n.b, NodeClass::Restricted, &visited));
        assert!(policy.rejects(n.start, NodeClass::Start, &visited));
        assert_eq!(policy.exempt(), Some(n.a));
    }

    #[test]
    fn test_boundary_exempt_still_rejected() {
        let n = nodes();
        let policy = RevisitPolicy::OneExtraVisit { exempt: n.start };
        let visited = VisitCounter::seeded(5, n.start);
        assert!(policy.rejects(n.start, NodeClass::Start, &visited));
    }

    #[test]
    fn test_policy_serializes_as_tagged_value() {
        let n = nodes();
        let json = serde_json::to_string(&RevisitPolicy::OneExtraVisit { exempt: n.b }).unwrap();
        assert_eq!(json, r#"{"kind":"one_extra_visit","exempt":3}"#);
        let back: RevisitPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back.exempt(), Some(n.b));
        assert_eq!(
            serde_json::to_string(&RevisitPolicy::SingleVisit).unwrap(),
            r#"{"kind":"single_visit"}"#
        );
    }
}
