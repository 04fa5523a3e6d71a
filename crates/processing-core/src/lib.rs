//! Thermeye Processing Core: thermal frame interpretation
//!
//! Turns one 8x8 thermal frame into a steering decision:
//! - **Pointing:** Weighted centroid collapsed into a single gaze vector
//! - **Peaks:** Up to three ranked, mutually non-adjacent heat targets
//!
//! This crate is pure computation with no I/O, no sensor or actuator state.
//! All inputs are data; all outputs are data. Debug diagnostics go through
//! `tracing` and never influence results.

pub mod peaks;
pub mod pointing;

pub use peaks::{extract_targets, PeakConfig, PeakExtractor};
pub use pointing::compute_pointing;
