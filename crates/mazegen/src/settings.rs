//! Run settings: built-in defaults, then the config file, then flags

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use mg_core::{GeneratorKind, MazeConfig};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::cli::Args;

/// Everything one run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(flatten)]
    pub maze: MazeConfig,
    pub algorithm: GeneratorKind,
    pub output: PathBuf,
    pub graph_output: Option<PathBuf>,
    pub layout_output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            algorithm: GeneratorKind::default(),
            output: PathBuf::from("maze.png"),
            graph_output: None,
            layout_output: None,
        }
    }
}

/// Accept a fraction (0.5) or a percentage (50), clamped to [0, 1]
pub fn normalize_coverage(raw: f64) -> f64 {
    let fraction = if raw > 1.0 { raw / 100.0 } else { raw };
    fraction.clamp(0.0, 1.0)
}

fn parse_algorithm(name: &str) -> Result<GeneratorKind> {
    GeneratorKind::from_str(name).map_err(|_| {
        let known: Vec<String> = GeneratorKind::iter().map(|k| k.to_string()).collect();
        anyhow!("Unknown algorithm '{}' (available: {})", name, known.join(", "))
    })
}

impl Settings {
    /// Parse a JSON settings file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        settings.maze.coverage = normalize_coverage(settings.maze.coverage);
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Overwrite every field the user passed on the command line
    pub fn apply_args(&mut self, args: &Args) -> Result<()> {
        let maze = &mut self.maze;
        let fields = [
            (&mut maze.width, args.width),
            (&mut maze.height, args.height),
            (&mut maze.min_room_width, args.min_room_width),
            (&mut maze.min_room_height, args.min_room_height),
            (&mut maze.max_room_width, args.max_room_width),
            (&mut maze.max_room_height, args.max_room_height),
            (&mut maze.hallway_width, args.hallway_width),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(coverage) = args.coverage {
            maze.coverage = normalize_coverage(coverage);
        }
        if args.seed.is_some() {
            maze.seed = args.seed;
        }

        if let Some(name) = &args.algorithm {
            self.algorithm = parse_algorithm(name)?;
        }
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        if args.graph_output.is_some() {
            self.graph_output = args.graph_output.clone();
        }
        if args.layout_output.is_some() {
            self.layout_output = args.layout_output.clone();
        }
        Ok(())
    }

    /// Resolve the settings for a run and check them
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_args(args)?;
        settings.maze.validate().context("invalid maze parameters")?;
        Ok(settings)
    }
}
