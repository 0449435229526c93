//! Renderable primitives: the flat marker/segment lists a plotting
//! backend consumes directly.

use serde::{Deserialize, Serialize};

use ryabko_layout::Position;

use crate::compose::LayoutResult;

// ─────────────────────────────────────────────
// Marker / Segment
// ─────────────────────────────────────────────

/// A single labelled node marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Position,
    /// Node id rendered next to the marker.
    pub label: String,
    pub layer_index: u32,
}

/// A straight segment between two placed nodes of the same layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Position,
    pub to: Position,
    pub layer_index: u32,
}

/// Flat draw lists for one rendered scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenePrimitives {
    pub markers: Vec<Marker>,
    pub segments: Vec<Segment>,
}

// ─────────────────────────────────────────────
// Flattening
// ─────────────────────────────────────────────

/// Flatten a [`LayoutResult`] into draw lists.
///
/// Layers are flattened independently and concatenated in layer order;
/// within a layer, markers follow ascending node id and segments follow
/// ascending edge source.
pub fn flatten(result: &LayoutResult) -> ScenePrimitives {
    let mut scene = ScenePrimitives::default();

    for slice in &result.layers {
        let layer_index = slice.layer.index;

        scene.markers.extend(slice.nodes.iter().map(|(id, position)| Marker {
            position: *position,
            label: id.to_string(),
            layer_index,
        }));

        scene.segments.extend(slice.edges.iter().map(|edge| Segment {
            // Both endpoints are placed: every graph node gets a position
            from: slice.nodes[&edge.from],
            to: slice.nodes[&edge.to],
            layer_index,
        }));
    }

    scene
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compute_layout;
    use crate::request::LayoutRequest;
    use ryabko_graph::EdgeRule;

    #[test]
    fn counts_match_the_layout_totals() {
        let result = compute_layout(&LayoutRequest::default()).unwrap();
        let scene = flatten(&result);
        assert_eq!(scene.markers.len(), result.node_count());
        assert_eq!(scene.segments.len(), result.edge_count());
    }

    #[test]
    fn markers_are_labelled_with_node_ids() {
        let request = LayoutRequest::new(4, 4, 1, EdgeRule::Add);
        let scene = flatten(&compute_layout(&request).unwrap());
        let labels: Vec<&str> = scene.markers.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn segments_keep_their_layer_index() {
        let result = compute_layout(&LayoutRequest::default()).unwrap();
        let scene = flatten(&result);
        for slice in &result.layers {
            let in_layer = scene
                .segments
                .iter()
                .filter(|s| s.layer_index == slice.layer.index)
                .count();
            assert_eq!(in_layer, slice.edges.len());
        }
    }

    #[test]
    fn segments_connect_placed_endpoints() {
        let request = LayoutRequest::new(4, 8, 0, EdgeRule::Subtract);
        let result = compute_layout(&request).unwrap();
        let scene = flatten(&result);
        for slice in &result.layers {
            for (segment, edge) in scene
                .segments
                .iter()
                .filter(|s| s.layer_index == slice.layer.index)
                .zip(&slice.edges)
            {
                assert_eq!(segment.from, slice.nodes[&edge.from]);
                assert_eq!(segment.to, slice.nodes[&edge.to]);
            }
        }
    }

    #[test]
    fn empty_result_flattens_to_empty_scene() {
        let scene = flatten(&LayoutResult { layers: vec![] });
        assert!(scene.markers.is_empty());
        assert!(scene.segments.is_empty());
    }
}
