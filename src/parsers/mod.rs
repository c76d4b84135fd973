//! Diagram parsers: single grids and named diagram collections.

pub mod collection;
pub mod grid;

pub use collection::{Collection, NamedDiagram};
pub use grid::{GridParser, parse_grid};

use crate::error::Result;
use crate::syntax::types::Diagram;

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for diagram parsers.
pub trait Parser {
    /// Parse the rows of one diagram.
    fn parse(&self, rows: &[String]) -> Result<Diagram>;
}

/// Parse a newline-separated diagram block.
///
/// A single trailing newline is ignored; every other line is a grid row,
/// trailing blanks included.
pub fn parse(text: &str) -> Result<Diagram> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let rows: Vec<String> = if body.is_empty() {
        Vec::new()
    } else {
        body.split('\n').map(str::to_string).collect()
    };
    GridParser.parse(&rows)
}
