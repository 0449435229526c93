//! # ryabko-layout
//!
//! Layer enumeration and spatial placement for the ring stack:
//! - [`layers::LayerPlan`]  — bounded (doubling recurrence) and geometric
//!   (fixed powers-of-two) layer progressions, selector resolution
//! - [`placement`]          — concentric ring positions, one per node
//! - [`error::LayoutError`] — selector / bound failures

pub mod error;
pub mod layers;
pub mod placement;

pub use error::LayoutError;
pub use layers::{Layer, LayerPlan};
pub use placement::{layer_positions, ring_position, LayoutConfig, Position};
