//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Generate a room-and-corridor maze and render it to an image
///
/// Every generation flag is optional: unset flags fall back to the config
/// file, then to the built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "mazegen")]
#[command(author, version, about = "Generate a room-and-corridor maze and render it to an image", long_about = None)]
pub struct Args {
    /// Area width in tiles (default: 1000)
    #[arg(long)]
    pub width: Option<usize>,

    /// Area height in tiles (default: 1000)
    #[arg(long)]
    pub height: Option<usize>,

    /// Minimum room width (default: 2)
    #[arg(long)]
    pub min_room_width: Option<usize>,

    /// Minimum room height (default: 2)
    #[arg(long)]
    pub min_room_height: Option<usize>,

    /// Maximum room width (default: 200)
    #[arg(long)]
    pub max_room_width: Option<usize>,

    /// Maximum room height (default: 200)
    #[arg(long)]
    pub max_room_height: Option<usize>,

    /// Room coverage as a percentage (e.g. 50) or fraction (e.g. 0.5); default 50%
    #[arg(long)]
    pub coverage: Option<f64>,

    /// Hallway width in tiles (default: 1)
    #[arg(long)]
    pub hallway_width: Option<usize>,

    /// Generation algorithm (default: rooms_and_corridors)
    #[arg(short = 'a', long)]
    pub algorithm: Option<String>,

    /// Output image path, .png or .ppm (default: maze.png)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Also write the room graph as Graphviz DOT
    #[arg(long)]
    pub graph_output: Option<PathBuf>,

    /// Also write rooms, edges and coverage as JSON
    #[arg(long)]
    pub layout_output: Option<PathBuf>,

    /// Random seed for reproducible mazes
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// JSON file with generation settings
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level for the `-v` count
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
