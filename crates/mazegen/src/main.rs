//! mazegen: room-and-corridor maze generator
//!
//! Main entry point for the command-line tool.

mod cli;
mod settings;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use mg_core::{CoverageStats, Maze};
use mg_render::{Palette, save_image, write_dot, write_layout_json};

use cli::Args;
use settings::Settings;

fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_outputs(settings: &Settings, maze: &Maze) -> Result<()> {
    save_image(&maze.grid, &Palette::default(), &settings.output)
        .with_context(|| format!("failed to write image {}", settings.output.display()))?;

    if let Some(path) = &settings.graph_output {
        write_dot(&maze.rooms, &maze.edges, create_file(path)?)
            .with_context(|| format!("failed to write room graph {}", path.display()))?;
        log::info!("wrote room graph to {}", path.display());
    }

    if let Some(path) = &settings.layout_output {
        write_layout_json(maze, create_file(path)?)
            .with_context(|| format!("failed to write layout {}", path.display()))?;
        log::info!("wrote layout to {}", path.display());
    }

    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let settings = Settings::resolve(args)?;
    log::debug!("resolved settings: {settings:?}");

    let mut generator = settings.algorithm.create();
    let maze = generator.generate(&settings.maze);
    write_outputs(&settings, &maze)?;

    let coverage = CoverageStats::of(&maze.grid);
    println!(
        "Generated {} rooms with algorithm '{}'. Coverage: {}. Output: {}",
        maze.rooms.len(),
        generator.name(),
        coverage,
        settings.output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);
    run(&args)
}
