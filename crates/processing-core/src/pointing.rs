//! Weighted-centroid gaze pointing.
//!
//! Collapses a frame into a single direction toward the dominant heat source.
//!
//! # Algorithm
//!
//! 1. **Weight** every reading by a fixed position pair taken from
//!    [`POSITION_WEIGHTS`]: the column weight from the inner scan position,
//!    the row weight from the outer one.
//! 2. **Accumulate** `weight * value / 10` per axis over all 64 cells.
//! 3. **Normalize** by the cell count and a factor of 5; the x axis is
//!    mirrored to match the sensor's mounting.
//! 4. **Clamp** each axis to `[-1, 1]`.
//! 5. **Magnitude** is the frame maximum minus an ambient floor of 20,
//!    clamped to `[0, 50]`.

use thermeye_frame_model::{Frame, PointingVector, ROW_LENGTH, SIZE};

/// Sensor-to-world weight for each scan position, outermost first.
///
/// Scan position `k` maps to `POSITION_WEIGHTS[k]`:
///
/// | k | 0  | 1  | 2  | 3 | 4  | 5   | 6   | 7   |
/// |---|----|----|----|---|----|-----|-----|-----|
/// | w | 35 | 25 | 15 | 5 | -5 | -15 | -25 | -35 |
///
/// Cell `i` takes `(POSITION_WEIGHTS[i % 8], POSITION_WEIGHTS[i / 8])` as its
/// `(x, y)` weight. This encodes the physical mounting of the sensor and
/// must not be re-derived from pixel coordinates.
pub const POSITION_WEIGHTS: [f64; ROW_LENGTH] = [35.0, 25.0, 15.0, 5.0, -5.0, -15.0, -25.0, -35.0];

/// Readings at or below this level contribute no magnitude.
pub const AMBIENT_FLOOR: f64 = 20.0;

/// Starting value of the running minimum.
const MIN_SEED: f64 = 100.0;

/// Starting value of the running maximum.
const MAX_SEED: f64 = 0.0;

const WEIGHT_DIVISOR: f64 = 10.0;
const AXIS_DIVISOR: f64 = 5.0;

/// Compute the gaze pointing vector for a frame.
///
/// When `debug` is set, the unscaled sums, the scaled values and the
/// clamped values are traced in that order under `thermeye::pointing`.
/// Tracing never feeds back into the result.
pub fn compute_pointing(frame: &Frame, debug: bool) -> PointingVector {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut min_val = MIN_SEED;
    let mut max_val = MAX_SEED;

    for (i, &value) in frame.values().iter().enumerate() {
        let wx = POSITION_WEIGHTS[i % ROW_LENGTH];
        let wy = POSITION_WEIGHTS[i / ROW_LENGTH];
        x += wx * value / WEIGHT_DIVISOR;
        y += wy * value / WEIGHT_DIVISOR;
        min_val = f64::min(min_val, value);
        max_val = f64::max(max_val, value);
    }

    if debug {
        tracing::info!(target: "thermeye::pointing", x, y, min_val, max_val, "unscaled");
    }

    let x = -x / SIZE as f64 / AXIS_DIVISOR;
    let y = y / SIZE as f64 / AXIS_DIVISOR;
    if debug {
        tracing::info!(target: "thermeye::pointing", x, y, "scaled");
    }

    let x = x.clamp(-1.0, 1.0);
    let y = y.clamp(-1.0, 1.0);
    if debug {
        tracing::info!(target: "thermeye::pointing", x, y, "clamped");
    }

    PointingVector::new(x, y, max_val - AMBIENT_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermeye_frame_model::GridPos;

    fn hot_cell(column: usize, row: usize, value: f64) -> Frame {
        Frame::with_cells(0.0, &[(GridPos::new(column, row), value)]).unwrap()
    }

    #[test]
    fn test_zero_frame_is_idle() {
        let v = compute_pointing(&Frame::ZERO, false);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
        assert_eq!(v.magnitude, 0.0);
    }

    #[test]
    fn test_single_hot_corner() {
        let v = compute_pointing(&hot_cell(0, 0, 70.0), false);
        assert_eq!(v.x, -0.765625);
        assert_eq!(v.y, 0.765625);
        assert_eq!(v.magnitude, 50.0);
    }

    #[test]
    fn test_opposite_corner_mirrors() {
        let v = compute_pointing(&hot_cell(7, 7, 70.0), false);
        assert_eq!(v.x, 0.765625);
        assert_eq!(v.y, -0.765625);
    }

    #[test]
    fn test_axes_clamp_to_unit_range() {
        let v = compute_pointing(&hot_cell(0, 0, 1000.0), false);
        assert_eq!(v.x, -1.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(v.magnitude, 50.0);
    }

    #[test]
    fn test_uniform_frame_is_centered() {
        let v = compute_pointing(&Frame::with_cells(30.0, &[]).unwrap(), false);
        assert!(v.x.abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        assert_eq!(v.magnitude, 10.0);
    }

    #[test]
    fn test_magnitude_uses_zero_floor_for_cold_frames() {
        // Every reading below zero: the running max stays at its seed.
        let v = compute_pointing(&Frame::with_cells(-5.0, &[]).unwrap(), false);
        assert_eq!(v.magnitude, 0.0);
    }

    #[test]
    fn test_debug_flag_does_not_change_result() {
        let frame = hot_cell(2, 5, 33.3);
        assert_eq!(compute_pointing(&frame, true), compute_pointing(&frame, false));
    }

    #[test]
    fn test_weight_table_is_symmetric() {
        for k in 0..ROW_LENGTH {
            assert_eq!(POSITION_WEIGHTS[k], -POSITION_WEIGHTS[ROW_LENGTH - 1 - k]);
        }
    }
}
