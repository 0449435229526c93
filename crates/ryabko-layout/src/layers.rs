//! Layer enumeration: how many rings the stack has and how big each is.
//!
//! ## Semantics
//!
//! The bounded plan starts at `lower + 1` nodes (node 0 is the hub every
//! ring reserves) and grows by the doubling recurrence
//! `next = 2·(count − 1) + 1`, keeping every count ≤ `upper + 1`. The
//! counts therefore walk the `2^k + 1` family. The geometric plan is the
//! fixed powers-of-two progression `start, 2·start, 4·start, …` — the
//! same plan type, hubless sizes.

use serde::{Deserialize, Serialize};

use ryabko_graph::NodeId;

use crate::error::LayoutError;

// ─────────────────────────────────────────────
// Layer
// ─────────────────────────────────────────────

/// One ring of the stack: 1-based index plus its node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layer {
    pub index: u32,
    pub node_count: NodeId,
}

impl Layer {
    /// Human-readable selector label, e.g. `"Layer 3 (17 nodes)"`.
    pub fn label(&self) -> String {
        format!("Layer {} ({} nodes)", self.index, self.node_count)
    }
}

// ─────────────────────────────────────────────
// LayerPlan
// ─────────────────────────────────────────────

/// Ordered, finite list of layers derived from node-count bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPlan {
    layers: Vec<Layer>,
}

impl LayerPlan {
    /// Doubling-recurrence plan over inclusive node-count bounds.
    ///
    /// Starts at `lower + 1` (hub reserved) and applies
    /// `count = 2·(count − 1) + 1` while `count ≤ upper + 1`. Total for
    /// every input: `lower > upper` or `lower = 0` yields the empty plan,
    /// a valid renderable-empty state — strict bound validation lives at
    /// the request boundary.
    pub fn bounded(lower: u32, upper: u32) -> Self {
        let mut layers = Vec::new();
        if lower == 0 || lower > upper {
            return Self { layers };
        }

        let bound = upper as u64 + 1;
        let mut count = lower as u64 + 1;
        while count <= bound {
            let Ok(node_count) = NodeId::try_from(count) else { break };
            layers.push(Layer { index: layers.len() as u32 + 1, node_count });
            count = 2 * (count - 1) + 1;
        }
        Self { layers }
    }

    /// Fixed doubling plan: counts `start, 2·start, 4·start, … ≤ end`.
    ///
    /// `start = 0` yields the empty plan (the progression would not grow).
    pub fn geometric(start: u32, end: u32) -> Self {
        let mut layers = Vec::new();
        if start == 0 {
            return Self { layers };
        }

        let mut count = start as u64;
        while count <= end as u64 {
            let Ok(node_count) = NodeId::try_from(count) else { break };
            layers.push(Layer { index: layers.len() as u32 + 1, node_count });
            count *= 2;
        }
        Self { layers }
    }

    // ── Queries ────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Layer by 1-based index.
    pub fn get(&self, index: u32) -> Option<Layer> {
        if index == 0 {
            return None;
        }
        self.layers.get(index as usize - 1).copied()
    }

    /// Resolve a selector: `0` means every layer, `k ∈ [1, len]` means
    /// that single layer, anything else is out of range.
    pub fn select(&self, selector: u32) -> Result<Vec<Layer>, LayoutError> {
        if selector == 0 {
            return Ok(self.layers.clone());
        }
        self.get(selector).map(|layer| vec![layer]).ok_or(
            LayoutError::IndexOutOfRange { selected: selector, len: self.len() },
        )
    }

    /// Labels in layer order, for selector repopulation.
    pub fn labels(&self) -> Vec<String> {
        self.layers.iter().map(Layer::label).collect()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
