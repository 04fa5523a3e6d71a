//! Gaze pointing result.

use serde::{Deserialize, Serialize};

/// Upper bound for [`PointingVector::magnitude`].
pub const MAX_MAGNITUDE: f64 = 50.0;

/// Normalized direction toward the dominant heat source plus a strength scalar.
///
/// `x` and `y` lie in `[-1.0, 1.0]`; `magnitude` lies in `[0.0, MAX_MAGNITUDE]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointingVector {
    pub x: f64,
    pub y: f64,
    pub magnitude: f64,
}

impl PointingVector {
    /// Create a pointing vector, clamping every component to its valid range.
    pub fn new(x: f64, y: f64, magnitude: f64) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
            magnitude: magnitude.clamp(0.0, MAX_MAGNITUDE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_components() {
        let v = PointingVector::new(-3.0, 1.5, 75.0);
        assert_eq!(v, PointingVector { x: -1.0, y: 1.0, magnitude: 50.0 });

        let v = PointingVector::new(0.25, -0.5, -4.0);
        assert_eq!(v.magnitude, 0.0);
        assert_eq!(v.x, 0.25);
    }

    #[test]
    fn test_new_keeps_in_range_values() {
        let v = PointingVector::new(-0.765625, 0.765625, 50.0);
        assert_eq!(v, PointingVector { x: -0.765625, y: 0.765625, magnitude: 50.0 });
        assert_eq!(PointingVector::new(0.0, 0.0, 0.0), PointingVector::default());
    }
}
