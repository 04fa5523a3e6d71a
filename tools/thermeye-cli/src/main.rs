//! Thermeye CLI: inspect thermal frames and compute steering decisions.
//!
//! Usage:
//!   thermeye point <FILE>      Weighted-centroid gaze pointing for one frame
//!   thermeye targets <FILE>    Ranked non-adjacent heat targets for one frame
//!   thermeye show <FILE>       Print a frame as a table
//!   thermeye stream <FILE>     Run both strategies over a JSONL frame stream
//!   thermeye demo              Run both strategies on a built-in sample frame
//!   thermeye init              Write the effective config file
//!
//! `-` as FILE reads from stdin.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thermeye_common::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "thermeye",
    about = "Steer an animatronic eye from an 8x8 thermal sensor frame",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/thermeye/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the gaze pointing vector for a frame
    Point {
        /// Frame file: JSON array or whitespace/comma separated readings
        path: PathBuf,

        /// Trace intermediate values
        #[arg(long)]
        debug: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract ranked heat targets from a frame
    Targets {
        /// Frame file: JSON array or whitespace/comma separated readings
        path: PathBuf,

        /// Trace accept/suppress decisions
        #[arg(long)]
        debug: bool,

        /// Maximum number of targets (overrides config)
        #[arg(long)]
        max_targets: Option<usize>,

        /// Suppression radius in cells (overrides config)
        #[arg(long)]
        exclusion_radius: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a frame as an 8-row table
    Show {
        /// Frame file: JSON array or whitespace/comma separated readings
        path: PathBuf,
    },

    /// Process a JSONL stream of frames, one result line per frame
    Stream {
        /// Stream file, one frame per line
        path: PathBuf,

        /// Trace intermediate values
        #[arg(long)]
        debug: bool,

        /// Emit one JSON object per frame
        #[arg(long)]
        json: bool,
    },

    /// Run both strategies on the built-in sample frame
    Demo {
        /// Trace intermediate values
        #[arg(long)]
        debug: bool,
    },

    /// Write the effective configuration (defaults plus any loaded file)
    Init,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    thermeye_common::logging::init_logging(&config.logging);

    let tracking = config.tracking.clone();
    match cli.command {
        Commands::Point { path, debug, json } => {
            commands::point::run(path, debug || tracking.debug, json)
        }
        Commands::Targets {
            path,
            debug,
            max_targets,
            exclusion_radius,
            json,
        } => commands::targets::run(
            path,
            debug || tracking.debug,
            commands::peak_config(&tracking, max_targets, exclusion_radius)?,
            json,
        ),
        Commands::Show { path } => commands::show::run(path),
        Commands::Stream { path, debug, json } => commands::stream::run(
            path,
            debug || tracking.debug,
            commands::peak_config(&tracking, None, None)?,
            json,
        ),
        Commands::Demo { debug } => commands::demo::run(debug || tracking.debug),
        Commands::Init => commands::init::run(&config, cli.config),
    }
}
