//! Extract ranked heat targets from one frame.

use std::path::PathBuf;

use thermeye_processing_core::{PeakConfig, PeakExtractor};

pub fn run(path: PathBuf, debug: bool, config: PeakConfig, json: bool) -> anyhow::Result<()> {
    let frame = super::load_frame(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load frame {}: {e}", path.display()))?;

    let targets = PeakExtractor::new(config).extract(&frame, &[], debug);
    tracing::debug!(count = targets.len(), "extracted targets");

    if json {
        println!("{}", serde_json::to_string(&targets)?);
        return Ok(());
    }

    if targets.is_empty() {
        println!("No targets.");
    }
    for (i, target) in targets.iter().enumerate() {
        println!("{}", super::format_target(i + 1, target));
    }
    Ok(())
}
