//! Isometric cube renderer.
//!
//! Six phases, each on the same canvas:
//!   1. Fit the projection and allocate the canvas
//!   2. Stroke edges back to front
//!   3. Stamp node sprites
//!   4. Reclassify stray corner marks
//!   5. Pad
//!   6. Stamp entrance and exit digits

use std::collections::HashSet;

use log::{debug, trace};

use super::Renderer;
use super::canvas::Canvas;
use super::projection::Projection;
use super::sprite::{STAMP_ORDER, Stamp};
use crate::error::{Error, Result};
use crate::syntax::types::{Diagram, Direction, Edge, NODE_MARKER};

// ─── Cube corners ────────────────────────────────────────────────────────────

/// Silhouette corners of a cube sprite, relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    Top,
    Left,
    Right,
    Front,
    BottomLeft,
    BottomRight,
    Bottom,
}

impl Corner {
    fn offset(self) -> (i64, i64) {
        match self {
            Corner::Top => (-4, 0),
            Corner::Left => (-2, -2),
            Corner::Right => (-2, 2),
            Corner::Front => (0, 0),
            Corner::BottomLeft => (0, -2),
            Corner::BottomRight => (0, 2),
            Corner::Bottom => (2, 0),
        }
    }
}

/// Rails of an edge as (corner of the upper cube, corner of the lower cube).
fn rails(direction: Direction) -> &'static [(Corner, Corner)] {
    match direction {
        Direction::S => &[
            (Corner::BottomLeft, Corner::Left),
            (Corner::Bottom, Corner::Front),
            (Corner::BottomRight, Corner::Right),
        ],
        Direction::SW => &[(Corner::Left, Corner::Top), (Corner::Front, Corner::Right)],
        Direction::SE => &[(Corner::Right, Corner::Top), (Corner::Front, Corner::Left)],
        _ => &[],
    }
}

fn stroke_for(direction: Direction) -> char {
    match direction {
        Direction::N | Direction::S => '|',
        Direction::NE | Direction::SW => '/',
        Direction::SE | Direction::NW => '\\',
    }
}

/// Digit position relative to the node anchor, per marker direction.
fn marker_offset(direction: Direction) -> (i64, i64) {
    match direction {
        Direction::N => (-5, 0),
        Direction::NE => (-3, 3),
        Direction::SE => (1, 3),
        Direction::S => (3, 0),
        Direction::SW => (1, -3),
        Direction::NW => (-3, -3),
    }
}

/// Neighbour pairs that connect through a stroke, one pair per axis.
const JUNCTION_AXES: [((i64, i64), (i64, i64), char); 3] = [
    ((-1, 0), (1, 0), '|'),
    ((-1, 1), (1, -1), '/'),
    ((-1, -1), (1, 1), '\\'),
];

// ─── IsometricRenderer ───────────────────────────────────────────────────────

/// Renders a diagram as stacked ASCII cubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsometricRenderer {
    /// Extra canvas cells per cube unit.
    pub slack: usize,
}

impl IsometricRenderer {
    pub fn new(slack: usize) -> Self {
        Self { slack }
    }
}

impl Renderer for IsometricRenderer {
    fn render(&self, diagram: &Diagram, order: &[usize]) -> Result<Canvas> {
        let projection = Projection::fit(&diagram.nodes, self.slack)?;
        let (height, width) = projection.canvas_size();
        let mut canvas = Canvas::new(height, width);
        let anchors: Vec<(i64, i64)> = diagram.nodes.iter().map(|n| projection.anchor(n)).collect();
        debug!(height = height, width = width, slack = self.slack; "Rendering diagram");

        for &idx in order {
            let edge = diagram.edges.get(idx).ok_or_else(|| {
                Error::MalformedInput(format!("occlusion order names missing edge {idx}"))
            })?;
            draw_edge(&mut canvas, edge, &anchors)?;
        }

        for (node, syndrome) in diagram.syndromes().into_iter().enumerate() {
            let (row, col) = anchors[node];
            for stamp in STAMP_ORDER {
                let wanted = match stamp {
                    Stamp::Visible => true,
                    Stamp::Face(dir) => syndrome.contains(dir),
                };
                if wanted {
                    canvas.stamp(stamp.sprite(), row, col)?;
                }
            }
        }

        let anchor_set: HashSet<(i64, i64)> = anchors.iter().copied().collect();
        let mut canvas = clean_junctions(&canvas, &anchor_set)?.padded();

        for marker in &diagram.markers {
            let (row, col) = anchors[marker.node];
            let (dr, dc) = marker_offset(marker.direction);
            let digit = char::from_digit(marker.direction.index() as u32, 10).unwrap_or('?');
            canvas.set(row + 1 + dr, col + 1 + dc, digit)?;
        }

        trace!(canvas:%; "Rendered canvas");
        Ok(canvas)
    }
}

/// Stroke every rail of an edge, endpoints excluded.
fn draw_edge(canvas: &mut Canvas, edge: &Edge, anchors: &[(i64, i64)]) -> Result<()> {
    let (a, b) = (anchors[edge.upper], anchors[edge.lower]);
    let ch = stroke_for(edge.direction);
    for &(from, to) in rails(edge.direction) {
        let start = (a.0 + from.offset().0, a.1 + from.offset().1);
        let end = (b.0 + to.offset().0, b.1 + to.offset().1);
        let step = ((end.0 - start.0).signum(), (end.1 - start.1).signum());
        let (mut r, mut c) = (start.0 + step.0, start.1 + step.1);
        while (r, c) != end && r <= end.0 {
            canvas.set(r, c, ch)?;
            r += step.0;
            c += step.1;
        }
    }
    Ok(())
}

/// Turn corner marks left between two strokes of one line into that stroke.
///
/// Reads from the unmodified canvas so the result does not depend on scan
/// order. Node anchors are never touched.
fn clean_junctions(canvas: &Canvas, anchors: &HashSet<(i64, i64)>) -> Result<Canvas> {
    let mut out = canvas.clone();
    for row in 0..canvas.height as i64 {
        for col in 0..canvas.width as i64 {
            if canvas.get(row, col) != NODE_MARKER || anchors.contains(&(row, col)) {
                continue;
            }
            let linked: Vec<(char, bool)> = JUNCTION_AXES
                .iter()
                .filter_map(|&((r1, c1), (r2, c2), stroke)| {
                    let first = canvas.get(row + r1, col + c1) == stroke;
                    let second = canvas.get(row + r2, col + c2) == stroke;
                    (first || second).then_some((stroke, first && second))
                })
                .collect();
            if let [(stroke, true)] = linked.as_slice() {
                out.set(row, col, *stroke)?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_isometric.rs"]
mod tests;
