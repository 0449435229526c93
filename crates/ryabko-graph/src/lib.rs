//! # ryabko-graph
//!
//! Lowbit-jump directed graphs for the layered ring stack:
//! - [`lowbit::lowbit`]      — least-significant-set-bit value
//! - [`lowbit::EdgeRule`]    — `Add` / `Subtract` jump direction
//! - [`model::LayerGraph`]   — immutable graph with fan-out ≤ 1, built by
//!   [`model::LayerGraph::generate`]
//! - [`traversal`]           — chain walks and terminal detection

pub mod builder;
pub mod error;
pub mod lowbit;
pub mod model;
pub mod traversal;

pub use error::GraphError;
pub use lowbit::{lowbit, EdgeRule, NodeId};
pub use model::{Edge, LayerGraph};
pub use traversal::{chain, terminals};
