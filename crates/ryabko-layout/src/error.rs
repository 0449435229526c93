use thiserror::Error;

use ryabko_graph::GraphError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layer selector {selected} outside valid range 1..={len} (0 selects all)")]
    IndexOutOfRange { selected: u32, len: usize },

    #[error("invalid bounds: lower={lower}, upper={upper} (need 1 ≤ lower ≤ upper)")]
    InvalidBounds { lower: u32, upper: u32 },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
