//! Request parameters crossing the control-panel boundary.
//!
//! ## Constraints enforced
//!
//! | Field            | Constraint                                        |
//! |------------------|---------------------------------------------------|
//! | lower            | ≥ 1 (after clamping)                              |
//! | upper            | ≥ lower (after clamping)                          |
//! | selected_layer   | 0 = all layers; otherwise resolved against the plan |
//! | edge_rule        | `add` / `subtract` (parse failures happen upstream) |
//!
//! Clamping is the presentation adapter's job: it calls
//! [`LayoutRequest::clamped`] on raw panel input before handing the
//! request to the core. The core itself only fail-fasts via
//! [`LayoutRequest::validate`].

use serde::{Deserialize, Serialize};

use ryabko_graph::EdgeRule;
use ryabko_layout::{LayoutConfig, LayoutError};

// ─────────────────────────────────────────────
// LayoutRequest
// ─────────────────────────────────────────────

/// One full set of pipeline parameters. Stateless: every invocation is
/// independent, so rapid repeated panel triggers cannot interfere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Inclusive lower node-count bound.
    pub lower: u32,
    /// Inclusive upper node-count bound.
    pub upper: u32,
    /// `0` selects every layer, `k ≥ 1` selects layer `k`.
    pub selected_layer: u32,
    /// Direction of the lowbit jump.
    pub edge_rule: EdgeRule,
    /// Placement tunables.
    #[serde(default)]
    pub config: LayoutConfig,
}

impl LayoutRequest {
    /// Request with the default placement config.
    pub fn new(lower: u32, upper: u32, selected_layer: u32, edge_rule: EdgeRule) -> Self {
        Self { lower, upper, selected_layer, edge_rule, config: LayoutConfig::default() }
    }

    /// Boundary-layer clamping: `lower := max(1, lower)`, then
    /// `upper := max(lower, upper)`.
    pub fn clamped(mut self) -> Self {
        self.lower = self.lower.max(1);
        self.upper = self.upper.max(self.lower);
        self
    }

    /// Fail fast on bounds the boundary should have clamped.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.lower < 1 || self.upper < self.lower {
            return Err(LayoutError::InvalidBounds { lower: self.lower, upper: self.upper });
        }
        Ok(())
    }
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self::new(4, 32, 0, EdgeRule::Add)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping_lifts_zero_lower() {
        let req = LayoutRequest::new(0, 0, 0, EdgeRule::Add).clamped();
        assert_eq!((req.lower, req.upper), (1, 1));
    }

    #[test]
    fn clamping_lifts_upper_to_lower() {
        let req = LayoutRequest::new(8, 3, 0, EdgeRule::Subtract).clamped();
        assert_eq!((req.lower, req.upper), (8, 8));
    }

    #[test]
    fn clamping_leaves_valid_bounds_alone() {
        let req = LayoutRequest::default().clamped();
        assert_eq!((req.lower, req.upper), (4, 32));
    }

    #[test]
    fn validate_accepts_clamped_bounds() {
        assert!(LayoutRequest::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_lower() {
        let req = LayoutRequest::new(0, 5, 0, EdgeRule::Add);
        assert_eq!(
            req.validate().unwrap_err(),
            LayoutError::InvalidBounds { lower: 0, upper: 5 },
        );
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let req = LayoutRequest::new(10, 4, 0, EdgeRule::Add);
        assert!(req.validate().is_err());
    }

    #[test]
    fn request_deserializes_without_config() {
        let req: LayoutRequest = serde_json::from_str(
            r#"{"lower":4,"upper":32,"selected_layer":0,"edge_rule":"subtract"}"#,
        )
        .unwrap();
        assert_eq!(req.edge_rule, EdgeRule::Subtract);
        assert_eq!(req.config, LayoutConfig::default());
    }
}
