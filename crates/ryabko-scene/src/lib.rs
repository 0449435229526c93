//! # ryabko-scene
//!
//! The request/response boundary of the layered ring stack. The control
//! panel (or any other presentation adapter) re-invokes
//! [`compute_layout`] afresh on every user action; nothing is retained
//! between calls.
//!
//! | Item                 | Description                                      |
//! |----------------------|--------------------------------------------------|
//! | [`LayoutRequest`]    | bounds + selector + rule, with boundary clamping |
//! | [`compute_layout`]   | plan → select → generate + place → result        |
//! | [`LayoutResult`]     | ordered per-layer slices of positions + edges    |
//! | [`selector_options`] | dropdown entries (`"All Layers"`, per-layer)     |
//! | [`flatten`]          | draw lists: labelled markers + line segments     |
//!
//! ## Quick start
//!
//! ```rust
//! use ryabko_graph::EdgeRule;
//! use ryabko_scene::{compute_layout, flatten, LayoutRequest};
//!
//! let request = LayoutRequest::new(4, 32, 0, EdgeRule::Add).clamped();
//! let result = compute_layout(&request)?;
//! let scene = flatten(&result);
//! assert_eq!(scene.markers.len(), result.node_count());
//! # Ok::<(), ryabko_layout::LayoutError>(())
//! ```

pub mod compose;
pub mod primitives;
pub mod request;

pub use compose::{compute_layout, selector_options, LayerLayout, LayoutResult, SelectorOption};
pub use primitives::{flatten, Marker, ScenePrimitives, Segment};
pub use request::LayoutRequest;
