//! Character-grid parser: nodes, edges, occlusion precedence and markers.
//!
//! The parser is a pure function of the grid. Strokes are walked to the
//! node markers at both ends; a stroke whose own line continues into a
//! different stroke character is hidden behind the edge shown there.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::syntax::types::{
    Diagram, Direction, Edge, Marker, NODE_MARKER, Node, is_stroke, stroke_delta,
};

use super::Parser;

/// Node offsets (row, col) from a marker digit, tried for each direction.
/// The second offset tolerates one extra cell of hand-drawn slack.
const MARKER_CANDIDATES: [(Direction, [(i64, i64); 2]); 6] = [
    (Direction::N, [(1, 0), (2, 0)]),
    (Direction::NE, [(1, -1), (1, -2)]),
    (Direction::SE, [(-1, -1), (-1, -2)]),
    (Direction::S, [(-1, 0), (-2, 0)]),
    (Direction::SW, [(-1, 1), (-1, 2)]),
    (Direction::NW, [(1, 1), (1, 2)]),
];

// ─── Grid ────────────────────────────────────────────────────────────────────

/// A rectangular character grid with signed lookups.
pub struct Grid {
    pub height: usize,
    pub width: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid, rejecting ragged rows and characters outside the alphabet.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        let Some(first) = cells.first() else {
            return Err(Error::MalformedInput("diagram has no rows".to_string()));
        };
        let width = first.len();
        if let Some((i, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::MalformedInput(format!(
                "row {i} has length {}, expected {width}",
                row.len()
            )));
        }
        for (row, line) in cells.iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                let known = ch == ' '
                    || ch == NODE_MARKER
                    || is_stroke(ch)
                    || ch.to_digit(10).is_some_and(|d| d <= 6);
                if !known {
                    return Err(Error::MalformedInput(format!(
                        "unexpected character {ch:?} at row {row}, column {col}"
                    )));
                }
            }
        }
        Ok(Self {
            height: cells.len(),
            width,
            cells,
        })
    }

    pub fn get(&self, row: i64, col: i64) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    pub fn is_node(&self, row: i64, col: i64) -> bool {
        self.get(row, col) == Some(NODE_MARKER)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().map(move |(col, &ch)| (row, col, ch))
        })
    }
}

// ─── GridParser ──────────────────────────────────────────────────────────────

/// Parser for a single diagram given as grid rows.
pub struct GridParser;

impl Parser for GridParser {
    fn parse(&self, rows: &[String]) -> Result<Diagram> {
        parse_grid(rows)
    }
}

/// Parse one diagram grid.
pub fn parse_grid<S: AsRef<str>>(rows: &[S]) -> Result<Diagram> {
    let grid = Grid::new(rows)?;

    let nodes: Vec<Node> = grid
        .cells()
        .filter(|&(_, _, ch)| ch == NODE_MARKER)
        .map(|(row, col, _)| Node::new(row, col))
        .collect();
    if nodes.is_empty() {
        return Err(Error::MalformedInput("diagram has no nodes".to_string()));
    }
    let node_index: HashMap<(usize, usize), usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| ((n.row, n.col), i))
        .collect();

    let (edges, stroke_edge) = find_edges(&grid, &nodes, &node_index)?;
    let precedence = find_precedence(&grid, &stroke_edge);
    let markers = find_markers(&grid, &node_index)?;

    if !(markers.is_empty() || markers.len() == 2) {
        return Err(Error::MalformedInput(format!(
            "expected 0 or 2 entrance/exit markers, found {}",
            markers.len()
        )));
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        precedence = precedence.len(),
        markers = markers.len();
        "Parsed diagram grid"
    );
    trace!(edges:?, precedence:?; "Parsed topology");

    Ok(Diagram {
        height: grid.height,
        width: grid.width,
        nodes,
        edges,
        precedence,
        markers,
    })
}

/// Walk every stroke to its two nodes. Returns the edges in discovery order
/// and the edge each stroke cell belongs to.
fn find_edges(
    grid: &Grid,
    nodes: &[Node],
    node_index: &HashMap<(usize, usize), usize>,
) -> Result<(Vec<Edge>, HashMap<(usize, usize), usize>)> {
    let mut edges: Vec<Edge> = Vec::new();
    let mut edge_index: HashMap<(usize, usize), usize> = HashMap::new();
    let mut stroke_edge: HashMap<(usize, usize), usize> = HashMap::new();

    for (row, col, ch) in grid.cells() {
        let Some((dr, dc)) = stroke_delta(ch) else {
            continue;
        };
        let upper = walk_to_node(grid, row, col, (-dr, -dc))?;
        let lower = walk_to_node(grid, row, col, (dr, dc))?;
        let a = node_index[&upper];
        let b = node_index[&lower];

        let idx = match edge_index.get(&(a, b)) {
            Some(&idx) => idx,
            None => {
                let edge = make_edge(nodes, a, b)?;
                edges.push(edge);
                edge_index.insert((a, b), edges.len() - 1);
                edges.len() - 1
            }
        };
        stroke_edge.insert((row, col), idx);
    }
    Ok((edges, stroke_edge))
}

/// Step from a stroke cell until a node marker; leaving the grid is an error.
fn walk_to_node(grid: &Grid, row: usize, col: usize, step: (i64, i64)) -> Result<(usize, usize)> {
    let (mut r, mut c) = (row as i64, col as i64);
    loop {
        r += step.0;
        c += step.1;
        match grid.get(r, c) {
            Some(NODE_MARKER) => return Ok((r as usize, c as usize)),
            Some(_) => continue,
            None => return Err(Error::OutOfBounds { row, col }),
        }
    }
}

fn make_edge(nodes: &[Node], upper: usize, lower: usize) -> Result<Edge> {
    let (a, b) = (nodes[upper], nodes[lower]);
    let drow = b.row as i64 - a.row as i64;
    let dcol = b.col as i64 - a.col as i64;
    if drow % 2 != 0 || dcol % 2 != 0 {
        return Err(Error::MalformedInput(format!(
            "nodes {upper} and {lower} are {drow} rows and {dcol} columns apart, both must be even"
        )));
    }
    let direction = Direction::from_delta(drow, dcol).ok_or_else(|| {
        Error::MalformedInput(format!("nodes {upper} and {lower} lie on one row"))
    })?;
    Ok(Edge::new(upper, lower, direction))
}

/// A stroke whose line runs on into a different stroke character crosses
/// the edge drawn there, which is in front.
fn find_precedence(grid: &Grid, stroke_edge: &HashMap<(usize, usize), usize>) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for (row, col, ch) in grid.cells() {
        let Some((dr, dc)) = stroke_delta(ch) else {
            continue;
        };
        let behind = stroke_edge[&(row, col)];
        for (sr, sc) in [(dr, dc), (-dr, -dc)] {
            let (nr, nc) = (row as i64 + sr, col as i64 + sc);
            let Some(other) = grid.get(nr, nc) else {
                continue;
            };
            if other == ch || !is_stroke(other) {
                continue;
            }
            let front = stroke_edge[&(nr as usize, nc as usize)];
            if front != behind && !pairs.contains(&(behind, front)) {
                pairs.push((behind, front));
            }
        }
    }
    pairs
}

fn find_markers(grid: &Grid, node_index: &HashMap<(usize, usize), usize>) -> Result<Vec<Marker>> {
    let mut markers = Vec::new();
    for (row, col, ch) in grid.cells() {
        let Some(digit) = ch.to_digit(10) else {
            continue;
        };
        let direction = Direction::from_digit(digit);
        let candidates = MARKER_CANDIDATES
            .iter()
            .find(|(dir, _)| *dir == direction)
            .map(|(_, offsets)| offsets)
            .into_iter()
            .flatten();
        let matches: Vec<usize> = candidates
            .filter_map(|&(dr, dc)| {
                let (r, c) = (row as i64 + dr, col as i64 + dc);
                if grid.is_node(r, c) {
                    node_index.get(&(r as usize, c as usize)).copied()
                } else {
                    None
                }
            })
            .collect();
        match matches.as_slice() {
            [node] => markers.push(Marker {
                node: *node,
                direction,
                row,
                col,
            }),
            _ => {
                return Err(Error::AmbiguousMarker {
                    row,
                    col,
                    digit: ch,
                    matches: matches.len(),
                });
            }
        }
    }
    Ok(markers)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_grid.rs"]
mod tests;
