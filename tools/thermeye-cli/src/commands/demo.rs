//! Built-in sample: a single hot reading in the top-left corner.

use thermeye_frame_model::{Frame, FrameError, GridPos};
use thermeye_processing_core::{compute_pointing, extract_targets};

/// The sample frame: cell 0 reads 70.0, everything else 0.0.
pub fn sample_frame() -> Result<Frame, FrameError> {
    Frame::with_cells(0.0, &[(GridPos::new(0, 0), 70.0)])
}

pub fn run(debug: bool) -> anyhow::Result<()> {
    let frame = sample_frame()?;
    print!("{frame}");

    let pointing = compute_pointing(&frame, debug);
    println!("Pointing: {}", super::format_pointing(&pointing));

    println!("Targets:");
    for (i, target) in extract_targets(&frame, &[], debug).iter().enumerate() {
        println!("  {}", super::format_target(i + 1, target));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_frame_result() {
        let pointing = compute_pointing(&sample_frame().unwrap(), false);
        assert_eq!(pointing.x, -0.765625);
        assert_eq!(pointing.y, 0.765625);
        assert_eq!(pointing.magnitude, 50.0);
    }
}
