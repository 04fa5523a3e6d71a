//! Write the effective configuration to disk.

use std::path::PathBuf;

use thermeye_common::AppConfig;

pub fn run(config: &AppConfig, path: Option<PathBuf>) -> anyhow::Result<()> {
    config.tracking.validate()?;
    match path {
        Some(path) => {
            config.save_to(&path)?;
            println!("Config written to: {}", path.display());
        }
        None => {
            config.save()?;
            println!(
                "Config written to: {}",
                thermeye_common::config_file_path().display()
            );
        }
    }
    Ok(())
}
