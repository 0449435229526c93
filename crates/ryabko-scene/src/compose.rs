//! The layout pipeline: plan → select → generate + place → result.
//!
//! ## Pipeline protocol
//!
//! 1. **Validate** — fail fast on bounds the boundary should have clamped.
//! 2. **Plan** — enumerate layers from the node-count bounds.
//! 3. **Select** — resolve the selector (`0` = all) against the plan.
//! 4. **Assemble** — per selected layer, build its graph and place its
//!    ring; each layer yields its own immutable slice (no accumulation
//!    shared across layers).
//!
//! Stateless and idempotent: identical requests produce bit-for-bit
//! identical results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use ryabko_graph::{Edge, LayerGraph, NodeId};
use ryabko_layout::{layer_positions, Layer, LayerPlan, LayoutError, Position};

use crate::request::LayoutRequest;

// ─────────────────────────────────────────────
// LayerLayout / LayoutResult
// ─────────────────────────────────────────────

/// One fully laid-out ring: the layer, its node positions, its edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerLayout {
    pub layer: Layer,
    pub nodes: BTreeMap<NodeId, Position>,
    pub edges: Vec<Edge>,
}

/// The artifact crossing the core → presentation boundary: ordered
/// per-layer slices, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub layers: Vec<LayerLayout>,
}

impl LayoutResult {
    /// Total nodes across all layers.
    pub fn node_count(&self) -> usize {
        self.layers.iter().map(|l| l.nodes.len()).sum()
    }

    /// Total edges across all layers.
    pub fn edge_count(&self) -> usize {
        self.layers.iter().map(|l| l.edges.len()).sum()
    }
}

// ─────────────────────────────────────────────
// SelectorOption
// ─────────────────────────────────────────────

/// One entry of the control panel's layer dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOption {
    pub value: u32,
    pub label: String,
}

/// Dropdown entries for `plan`: `"All Layers"` (value 0) followed by one
/// labelled entry per layer. The panel calls this after every bound
/// change to repopulate its selector.
pub fn selector_options(plan: &LayerPlan) -> Vec<SelectorOption> {
    let mut options = vec![SelectorOption { value: 0, label: "All Layers".to_string() }];
    options.extend(plan.iter().map(|layer| SelectorOption {
        value: layer.index,
        label: layer.label(),
    }));
    options
}

// ─────────────────────────────────────────────
// compute_layout
// ─────────────────────────────────────────────

/// Run the full pipeline for one request.
///
/// Pure request → response: no caching, no retained state. An empty plan
/// with selector `0` is a valid empty result, not an error.
pub fn compute_layout(request: &LayoutRequest) -> Result<LayoutResult, LayoutError> {
    request.validate()?;

    let plan = LayerPlan::bounded(request.lower, request.upper);
    let selected = plan.select(request.selected_layer)?;
    debug!(
        rule = %request.edge_rule,
        planned = plan.len(),
        selected = selected.len(),
        "computing layout"
    );

    let layers = selected
        .into_iter()
        .map(|layer| {
            let graph = LayerGraph::generate(layer.node_count, request.edge_rule);
            let nodes = layer_positions(&graph, layer, &request.config);
            let edges = graph.edges().collect();
            LayerLayout { layer, nodes, edges }
        })
        .collect();

    Ok(LayoutResult { layers })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
