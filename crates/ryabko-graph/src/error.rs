use thiserror::Error;

use crate::lowbit::NodeId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid edge rule: {0:?} (expected \"add\" or \"subtract\")")]
    InvalidRule(String),

    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}
