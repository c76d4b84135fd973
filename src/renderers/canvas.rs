//! Canvas: 2D character grid for painting ASCII art.

use std::fmt;

use super::sprite::{Sprite, TRANSPARENT, blend};
use crate::error::{Error, Result};

/// A 2D character grid used as a painting surface.
///
/// Coordinates are `(row, col)` and signed so callers can compute positions
/// relative to an anchor without casting; writes outside the grid fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    fn index(&self, row: i64, col: i64) -> Option<(usize, usize)> {
        if row < 0 || col < 0 {
            return None;
        }
        let (r, c) = (row as usize, col as usize);
        (r < self.height && c < self.width).then_some((r, c))
    }

    /// Cell content; blank outside the canvas.
    pub fn get(&self, row: i64, col: i64) -> char {
        self.index(row, col)
            .map(|(r, c)| self.cells[r][c])
            .unwrap_or(' ')
    }

    pub fn set(&mut self, row: i64, col: i64, ch: char) -> Result<()> {
        let (r, c) = self
            .index(row, col)
            .ok_or(Error::CanvasOverflow { row, col })?;
        self.cells[r][c] = ch;
        Ok(())
    }

    /// Compose a sprite so that its anchor lands on `(row, col)`.
    pub fn stamp(&mut self, sprite: &Sprite, row: i64, col: i64) -> Result<()> {
        let (top, left) = (row - sprite.anchor.0, col - sprite.anchor.1);
        for (dr, line) in sprite.rows.iter().enumerate() {
            for (dc, ch) in line.chars().enumerate() {
                if ch == TRANSPARENT {
                    continue;
                }
                let (r, c) = (top + dr as i64, left + dc as i64);
                self.set(r, c, blend(self.get(r, c), ch))?;
            }
        }
        Ok(())
    }

    /// A copy with one blank row and column added on every side.
    pub fn padded(&self) -> Canvas {
        let mut out = Canvas::new(self.height + 2, self.width + 2);
        for (r, line) in self.cells.iter().enumerate() {
            out.cells[r + 1][1..=self.width].copy_from_slice(line);
        }
        out
    }

    /// Rows as strings, trailing blanks kept.
    pub fn rows(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }

    /// Render the canvas to a string, trimming trailing whitespace per line.
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            let line: String = row.iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
