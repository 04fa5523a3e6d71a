//! Compute gaze pointing for one frame.

use std::path::PathBuf;

use thermeye_processing_core::compute_pointing;

pub fn run(path: PathBuf, debug: bool, json: bool) -> anyhow::Result<()> {
    let frame = super::load_frame(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load frame {}: {e}", path.display()))?;

    let pointing = compute_pointing(&frame, debug);
    tracing::debug!(?pointing, "computed pointing");

    if json {
        println!("{}", serde_json::to_string(&pointing)?);
    } else {
        println!("{}", super::format_pointing(&pointing));
    }
    Ok(())
}
