//! Heat-source target candidates.

use serde::{Deserialize, Serialize};

use crate::grid::GridPos;

/// Default number of targets kept per frame.
pub const DEFAULT_MAX_TARGETS: usize = 3;

/// One ranked heat-source peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Cell the peak sits on.
    pub position: GridPos,

    /// Per-frame motion in cells. Reserved for temporal tracking; the
    /// single-frame extractors leave it `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<(i32, i32)>,

    /// Reading scaled by 1000, truncated toward zero.
    pub value: i64,
}

impl Target {
    /// A stationary target with no velocity estimate.
    pub fn new(position: GridPos, value: i64) -> Self {
        Self {
            position,
            velocity: None,
            value,
        }
    }

    /// Integer score for a raw reading: `reading * 1000`, truncated toward zero.
    ///
    /// Non-finite readings saturate the way `as` casts do (`NaN` scores 0).
    pub fn score(reading: f64) -> i64 {
        (reading * 1000.0).trunc() as i64
    }
}

/// Targets from one frame, strongest first.
pub type TargetList = Vec<Target>;

/// Whether no two targets in `targets` lie within `radius` cells of each other.
pub fn targets_separated(targets: &[Target], radius: usize) -> bool {
    targets.iter().enumerate().all(|(i, a)| {
        targets[i + 1..]
            .iter()
            .all(|b| a.position.chebyshev_distance(&b.position) > radius)
    })
}
