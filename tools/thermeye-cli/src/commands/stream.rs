//! Run both strategies over a recorded frame stream.

use std::path::PathBuf;

use serde::Serialize;
use thermeye_frame_model::{parse_frames, PointingVector, TargetList};
use thermeye_processing_core::{compute_pointing, PeakConfig, PeakExtractor};

#[derive(Serialize)]
struct FrameReport {
    frame: usize,
    pointing: PointingVector,
    targets: TargetList,
}

pub fn run(path: PathBuf, debug: bool, config: PeakConfig, json: bool) -> anyhow::Result<()> {
    let content = super::read_input(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read stream {}: {e}", path.display()))?;
    let frames =
        parse_frames(&content).map_err(|e| anyhow::anyhow!("Failed to parse frames: {e}"))?;
    let extractor = PeakExtractor::new(config);
    tracing::info!(
        frames = frames.len(),
        max_targets = extractor.config().max_targets,
        exclusion_radius = extractor.config().exclusion_radius,
        "processing stream"
    );

    let mut previous = TargetList::new();
    for (i, frame) in frames.iter().enumerate() {
        let report = FrameReport {
            frame: i,
            pointing: compute_pointing(frame, debug),
            targets: extractor.extract(frame, &previous, debug),
        };

        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            let peaks = report
                .targets
                .iter()
                .map(|t| format!("({},{})={}", t.position.column, t.position.row, t.value))
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "{:>4} {} targets: {peaks}",
                report.frame,
                super::format_pointing(&report.pointing)
            );
        }
        previous = report.targets;
    }
    Ok(())
}
