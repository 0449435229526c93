//! Graph construction: one application of the jump rule per node.

use crate::lowbit::{EdgeRule, NodeId};
use crate::model::LayerGraph;

impl LayerGraph {
    /// Build the lowbit-jump graph over nodes `0..node_count`.
    ///
    /// For each node `i` the candidate target `j` comes from
    /// [`EdgeRule::successor`]; the edge `i → j` is kept iff `j` lands in
    /// range and `j ≠ i`. The `j ≠ i` guard suppresses the self-loop at
    /// node 0, where `lowbit(0) = 0` maps the node to itself under both
    /// rules.
    ///
    /// Deterministic: repeated calls with the same arguments produce
    /// structurally identical graphs. `node_count = 0` yields the valid
    /// empty graph.
    pub fn generate(node_count: NodeId, rule: EdgeRule) -> Self {
        let successors = (0..node_count)
            .map(|i| {
                rule.successor(i)
                    .filter(|&j| j < node_count && j != i)
            })
            .collect();

        Self::from_successors(node_count, rule, successors)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rule_n9_doubling_chain() {
        let g = LayerGraph::generate(9, EdgeRule::Add);
        assert_eq!(g.successor(1), Some(2));
        assert_eq!(g.successor(2), Some(4));
        assert_eq!(g.successor(4), Some(8));
        // 8 + lowbit(8) = 16 is out of range
        assert_eq!(g.successor(8), None);
        // self-loop at 0 suppressed
        assert_eq!(g.successor(0), None);
    }

    #[test]
    fn add_rule_n9_edge_count() {
        // One edge per node except 0 (self-loop) and 8 (target out of range)
        let g = LayerGraph::generate(9, EdgeRule::Add);
        assert_eq!(g.edge_count(), 7);
    }

    #[test]
    fn subtract_rule_n9_all_chains_reach_zero() {
        let g = LayerGraph::generate(9, EdgeRule::Subtract);
        assert_eq!(g.successor(0), None);
        for start in 1..9 {
            let mut i = start;
            while let Some(j) = g.successor(i) {
                assert!(j < i, "subtract jump must decrease: {i} → {j}");
                i = j;
            }
            assert_eq!(i, 0, "chain from {start} ended at {i}, not 0");
        }
    }

    #[test]
    fn subtract_rule_edge_count_is_n_minus_one() {
        // Every node but 0 has an in-range decreasing target
        let g = LayerGraph::generate(9, EdgeRule::Subtract);
        assert_eq!(g.edge_count(), 8);
    }

    #[test]
    fn fan_out_is_at_most_one() {
        for rule in [EdgeRule::Add, EdgeRule::Subtract] {
            let g = LayerGraph::generate(33, rule);
            for i in g.nodes() {
                let out: Vec<_> = g.edges().filter(|e| e.from == i).collect();
                assert!(out.len() <= 1);
            }
        }
    }

    #[test]
    fn no_self_loops_under_either_rule() {
        for rule in [EdgeRule::Add, EdgeRule::Subtract] {
            let g = LayerGraph::generate(17, rule);
            assert!(g.edges().all(|e| e.from != e.to));
        }
    }

    #[test]
    fn generate_is_idempotent() {
        let a = LayerGraph::generate(33, EdgeRule::Add);
        let b = LayerGraph::generate(33, EdgeRule::Add);
        assert_eq!(a, b);
    }

    #[test]
    fn serialized_form_is_stable() {
        let a = LayerGraph::generate(9, EdgeRule::Subtract);
        let b = LayerGraph::generate(9, EdgeRule::Subtract);
        let ja = serde_json::to_string(&a).unwrap();
        let jb = serde_json::to_string(&b).unwrap();
        assert_eq!(ja, jb);
    }

    #[test]
    fn single_node_graph_has_no_edges() {
        for rule in [EdgeRule::Add, EdgeRule::Subtract] {
            let g = LayerGraph::generate(1, rule);
            assert_eq!(g.edge_count(), 0);
        }
    }
}
