//! Thermeye Frame Model
//!
//! Defines the shared data contracts for thermal frame interpretation:
//! - **Grid:** Fixed 8x8 sensor geometry and row-major cell addressing
//! - **Frame:** One immutable snapshot of 64 intensity readings
//! - **Pointing:** Normalized gaze direction plus magnitude
//! - **Target:** Ranked, mutually non-adjacent heat-source candidates
//!
//! Both interpretation strategies address cells through [`GridPos`] so they
//! never disagree about which reading sits where.

pub mod frame;
pub mod grid;
pub mod pointing;
pub mod target;

pub use frame::*;
pub use grid::*;
pub use pointing::*;
pub use target::*;
