//! Graphviz export of the room connection graph

use std::fmt::Write as _;
use std::io::Write;

use mg_core::{Edge, Room};

use crate::error::RenderError;

/// DOT source for `rooms` joined by `edges`.
///
/// One box node per room, labelled with its index, corner and size, and one
/// undirected edge per connection in the order given.
pub fn to_dot(rooms: &[Room], edges: &[Edge]) -> String {
    let mut dot = String::from("graph rooms {\n");
    dot.push_str("  node [shape=box, style=filled, color=gray90];\n");
    for (i, room) in rooms.iter().enumerate() {
        let _ = writeln!(
            dot,
            "  r{i} [label=\"Room {i}\\n({},{}) {}x{}\"];",
            room.x, room.y, room.width, room.height
        );
    }
    for edge in edges {
        let _ = writeln!(dot, "  r{} -- r{};", edge.from, edge.to);
    }
    dot.push_str("}\n");
    dot
}

pub fn write_dot<W: Write>(rooms: &[Room], edges: &[Edge], mut writer: W) -> Result<(), RenderError> {
    writer.write_all(to_dot(rooms, edges).as_bytes())?;
    writer.flush()?;
    Ok(())
}
