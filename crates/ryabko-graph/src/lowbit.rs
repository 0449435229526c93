//! Lowest-set-bit arithmetic and the jump rule built on it.
//!
//! The **lowbit jump** sends a node `i` to `i ± lowbit(i)`, where
//! `lowbit(i) = i & (-i)` is the value of the least-significant set bit.
//! Chains of `Subtract` jumps strictly decrease and converge on 0; chains
//! of `Add` jumps strictly increase and converge on powers of two — the
//! structure underlying binary-indexed (Fenwick) trees.
//!
//! ## Formula
//! ```text
//! lowbit(i) = i & (-i)          lowbit(0) = 0
//! Add:      i ⟼ i + lowbit(i)
//! Subtract: i ⟼ i − lowbit(i)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Node identifier: the rank the jump arithmetic operates on.
pub type NodeId = u32;

// ─────────────────────────────────────────────
// lowbit
// ─────────────────────────────────────────────

/// Value of the least-significant set bit of `i` (0 for `i = 0`).
///
/// `i & (-i)` in two's complement; e.g. `lowbit(6) = 2`, `lowbit(8) = 8`.
#[inline]
pub fn lowbit(i: NodeId) -> NodeId {
    i & i.wrapping_neg()
}

// ─────────────────────────────────────────────
// EdgeRule
// ─────────────────────────────────────────────

/// Direction of the lowbit jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRule {
    /// `i ⟼ i + lowbit(i)` — chains diverge toward the top of the range.
    Add,
    /// `i ⟼ i − lowbit(i)` — chains converge toward 0.
    Subtract,
}

impl EdgeRule {
    /// Candidate successor of `i` under this rule.
    ///
    /// Returns `None` only when `i + lowbit(i)` leaves the representable
    /// range. Note `successor(0) = Some(0)` under both rules — the graph
    /// builder suppresses that self-loop.
    #[inline]
    pub fn successor(self, i: NodeId) -> Option<NodeId> {
        match self {
            EdgeRule::Add => i.checked_add(lowbit(i)),
            EdgeRule::Subtract => Some(i - lowbit(i)),
        }
    }

    /// Wire tag used by the control panel (`"add"` / `"subtract"`).
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeRule::Add => "add",
            EdgeRule::Subtract => "subtract",
        }
    }
}

impl FromStr for EdgeRule {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, GraphError> {
        match s {
            "add" => Ok(EdgeRule::Add),
            "subtract" => Ok(EdgeRule::Subtract),
            other => Err(GraphError::InvalidRule(other.to_string())),
        }
    }
}

impl fmt::Display for EdgeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
