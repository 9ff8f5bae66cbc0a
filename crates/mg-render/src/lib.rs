//! mg-render: export for generated mazes
//!
//! Turns a [`mg_core::Maze`] into files: a raster image of the grid (PPM or
//! PNG), a Graphviz DOT graph of the room connections, and a JSON layout
//! document.

mod error;
mod graph;
mod layout;
mod palette;
mod raster;

pub use error::RenderError;
pub use graph::{to_dot, write_dot};
pub use layout::{Layout, write_layout_json};
pub use palette::Palette;
pub use raster::{ImageFormat, save_image, to_rgb_image, write_png, write_ppm};
