//! Chain walks over the jump forest.
//!
//! Fan-out ≤ 1 and a strictly monotone jump make every walk a finite
//! chain: under `Subtract` all chains converge on node 0, under `Add`
//! they converge on the highest in-range power of two above their start.

use crate::error::GraphError;
use crate::lowbit::NodeId;
use crate::model::LayerGraph;

/// Node sequence from `start` following successors to the terminal node.
///
/// The start node is always included. Returns `GraphError::NodeNotFound`
/// when `start` is outside the graph.
pub fn chain(graph: &LayerGraph, start: NodeId) -> Result<Vec<NodeId>, GraphError> {
    if !graph.contains(start) {
        return Err(GraphError::NodeNotFound(start));
    }

    let mut path = vec![start];
    let mut current = start;
    while let Some(next) = graph.successor(current) {
        path.push(next);
        current = next;
    }
    Ok(path)
}

/// Nodes with no outgoing edge, ascending — the sinks every chain ends on.
pub fn terminals(graph: &LayerGraph) -> Vec<NodeId> {
    graph
        .nodes()
        .filter(|&i| graph.successor(i).is_none())
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
