pub mod demo;
pub mod init;
pub mod point;
pub mod show;
pub mod stream;
pub mod targets;

use std::io::Read;
use std::path::Path;

use thermeye_common::{ThermeyeError, ThermeyeResult, TrackingConfig};
use thermeye_frame_model::{parse_frame, Frame, PointingVector, Target};
use thermeye_processing_core::PeakConfig;

/// Read a whole input file, or stdin for `-`.
pub fn read_input(path: &Path) -> ThermeyeResult<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    if !path.exists() {
        return Err(ThermeyeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Load a single frame from a file or stdin.
pub fn load_frame(path: &Path) -> ThermeyeResult<Frame> {
    let content = read_input(path)?;
    Ok(parse_frame(&content)?)
}

/// Merge command-line overrides into the configured tracking settings.
pub fn peak_config(
    tracking: &TrackingConfig,
    max_targets: Option<usize>,
    exclusion_radius: Option<usize>,
) -> ThermeyeResult<PeakConfig> {
    let merged = TrackingConfig {
        max_targets: max_targets.unwrap_or(tracking.max_targets),
        exclusion_radius: exclusion_radius.unwrap_or(tracking.exclusion_radius),
        debug: tracking.debug,
    };
    merged.validate()?;
    Ok(PeakConfig {
        max_targets: merged.max_targets,
        exclusion_radius: merged.exclusion_radius,
    })
}

pub fn format_pointing(v: &PointingVector) -> String {
    format!("x={:+.6} y={:+.6} magnitude={:.1}", v.x, v.y, v.magnitude)
}

pub fn format_target(rank: usize, t: &Target) -> String {
    format!(
        "#{rank} column={} row={} value={}",
        t.position.column, t.position.row, t.value
    )
}
