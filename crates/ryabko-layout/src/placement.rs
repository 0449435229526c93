//! Concentric ring placement in 3D.
//!
//! ## Formula
//! ```text
//! angle(i)  = 2π · i / node_count
//! radius    = layer.index
//! z         = layer.index × separation
//! position  = (radius·cos(angle), radius·sin(angle), z)
//! ```
//!
//! Every coordinate is a pure function of `(i, node_count, layer.index,
//! separation)` — repeated calls are bit-for-bit identical, which the
//! renderer and the tests both rely on.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use ryabko_graph::{LayerGraph, NodeId};

use crate::layers::Layer;

// ─────────────────────────────────────────────
// Position
// ─────────────────────────────────────────────

/// A point in the render space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// ─────────────────────────────────────────────
// LayoutConfig
// ─────────────────────────────────────────────

/// Tunable placement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Vertical spacing between consecutive rings. `1.0` collapses to the
    /// plain `z = layer index` placement.
    pub separation: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { separation: 10.0 }
    }
}

// ─────────────────────────────────────────────
// Placement
// ─────────────────────────────────────────────

/// Place node `i` of a ring of `node_count` nodes on the circle of the
/// given `radius` at height `z`.
///
/// `node_count = 0` has no nodes to place; callers never reach it, but a
/// degenerate singleton ring (`node_count = 1`) puts its node at angle 0.
pub fn ring_position(i: NodeId, node_count: NodeId, radius: f64, z: f64) -> Position {
    let angle = TAU * i as f64 / node_count as f64;
    Position {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
        z,
    }
}

/// Positions for every node of `graph` on the ring of `layer`.
///
/// Returns a `BTreeMap` so iteration order (and the serialized form) is
/// stable across calls.
pub fn layer_positions(
    graph: &LayerGraph,
    layer: Layer,
    config: &LayoutConfig,
) -> BTreeMap<NodeId, Position> {
    let radius = layer.index as f64;
    let z = layer.index as f64 * config.separation;
    let node_count = graph.node_count();

    graph
        .nodes()
        .map(|i| (i, ring_position(i, node_count, radius, z)))
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
