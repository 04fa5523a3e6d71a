//! Print a frame as a table.

use std::path::PathBuf;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let frame = super::load_frame(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load frame {}: {e}", path.display()))?;
    print!("{frame}");
    Ok(())
}
