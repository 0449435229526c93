use serde::{Deserialize, Serialize};

use crate::lowbit::{EdgeRule, NodeId};

// ─────────────────────────────────────────────
// Edge
// ─────────────────────────────────────────────

/// A directed edge produced by one application of the jump rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

// ─────────────────────────────────────────────
// LayerGraph
// ─────────────────────────────────────────────

/// Directed graph over the node set `0..node_count` with fan-out ≤ 1.
///
/// Immutable after [`LayerGraph::generate`]. Stored as the successor array
/// (at most one outgoing edge per node) plus the derived incoming
/// adjacency, so both directions answer in O(1) / O(in-degree).
///
/// Invariant: `successors[i] = Some(j)` implies `j < node_count` and
/// `j ≠ i` — the jump landed in range and was not the `i = 0` self-map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerGraph {
    node_count: NodeId,
    rule: EdgeRule,
    successors: Vec<Option<NodeId>>,
    incoming: Vec<Vec<NodeId>>,
}

impl LayerGraph {
    /// Assemble a graph from a validated successor array.
    ///
    /// Crate-internal: [`LayerGraph::generate`] is the public constructor.
    pub(crate) fn from_successors(
        node_count: NodeId,
        rule: EdgeRule,
        successors: Vec<Option<NodeId>>,
    ) -> Self {
        debug_assert_eq!(successors.len(), node_count as usize);

        let mut incoming = vec![Vec::new(); node_count as usize];
        for (i, succ) in successors.iter().enumerate() {
            if let Some(j) = succ {
                incoming[*j as usize].push(i as NodeId);
            }
        }

        Self { node_count, rule, successors, incoming }
    }

    // ── Queries ────────────────────────────────────────

    /// Number of nodes (ids `0..node_count`).
    pub fn node_count(&self) -> NodeId {
        self.node_count
    }

    /// The rule this graph was generated under.
    pub fn rule(&self) -> EdgeRule {
        self.rule
    }

    /// True iff the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// True iff `i` is a node of this graph.
    pub fn contains(&self, i: NodeId) -> bool {
        i < self.node_count
    }

    /// Target of the single outgoing edge of `i`, if any.
    pub fn successor(&self, i: NodeId) -> Option<NodeId> {
        self.successors.get(i as usize).copied().flatten()
    }

    /// Sources of all incoming edges of `i`, in ascending order.
    pub fn predecessors(&self, i: NodeId) -> &[NodeId] {
        self.incoming
            .get(i as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Incoming degree of `i`.
    pub fn in_degree(&self, i: NodeId) -> usize {
        self.predecessors(i).len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().flatten().count()
    }

    /// All node ids, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        0..self.node_count
    }

    /// All edges in ascending `from` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.successors
            .iter()
            .enumerate()
            .filter_map(|(i, succ)| succ.map(|to| Edge { from: i as NodeId, to }))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_graph() -> LayerGraph {
        // 1 → 0, 2 → 0, 3 → 2 over 4 nodes
        LayerGraph::from_successors(
            4,
            EdgeRule::Subtract,
            vec![None, Some(0), Some(0), Some(2)],
        )
    }

    #[test]
    fn successor_and_predecessors_agree() {
        let g = chain_graph();
        assert_eq!(g.successor(1), Some(0));
        assert_eq!(g.successor(0), None);
        assert_eq!(g.predecessors(0), &[1, 2]);
        assert_eq!(g.predecessors(2), &[3]);
        assert_eq!(g.in_degree(0), 2);
        assert_eq!(g.in_degree(3), 0);
    }

    #[test]
    fn edge_count_matches_edges_iterator() {
        let g = chain_graph();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges().count(), 3);
    }

    #[test]
    fn edges_are_in_ascending_from_order() {
        let g = chain_graph();
        let froms: Vec<NodeId> = g.edges().map(|e| e.from).collect();
        assert_eq!(froms, vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let g = chain_graph();
        assert!(!g.contains(4));
        assert_eq!(g.successor(99), None);
        assert!(g.predecessors(99).is_empty());
    }

    #[test]
    fn empty_graph_is_valid() {
        let g = LayerGraph::from_successors(0, EdgeRule::Add, vec![]);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.nodes().count(), 0);
    }
}
