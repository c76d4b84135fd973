//! Grid-to-canvas projection.
//!
//! Two grid steps between nodes become one cube unit of `6 + slack` canvas
//! cells. The anchor of a node is the front-top corner of its cube.

use crate::error::{Error, Result};
use crate::syntax::types::Node;

/// Canvas cells per cube unit without slack.
pub const BASE_UNIT: usize = 6;

/// Canvas anchor `(row, col)` of the node at grid `(row, col)`.
pub fn to_canvas(row: usize, col: usize, minrow: usize, mincol: usize, slack: usize) -> (i64, i64) {
    let unit = (BASE_UNIT + slack) as i64;
    (
        4 + (row - minrow) as i64 / 2 * unit,
        2 + (col - mincol) as i64 / 2 * unit,
    )
}

/// The projection of one diagram's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub minrow: usize,
    pub mincol: usize,
    pub maxrow: usize,
    pub maxcol: usize,
    pub slack: usize,
}

impl Projection {
    /// Fit a projection to the nodes. Every node must sit an even number of
    /// rows and columns from the top-left node bound.
    pub fn fit(nodes: &[Node], slack: usize) -> Result<Self> {
        let minrow = nodes.iter().map(|n| n.row).min().unwrap_or(0);
        let mincol = nodes.iter().map(|n| n.col).min().unwrap_or(0);
        let maxrow = nodes.iter().map(|n| n.row).max().unwrap_or(0);
        let maxcol = nodes.iter().map(|n| n.col).max().unwrap_or(0);
        if let Some(n) = nodes
            .iter()
            .find(|n| (n.row - minrow) % 2 != 0 || (n.col - mincol) % 2 != 0)
        {
            return Err(Error::UnevenSpan {
                row_offset: n.row - minrow,
                col_offset: n.col - mincol,
            });
        }
        Ok(Self {
            minrow,
            mincol,
            maxrow,
            maxcol,
            slack,
        })
    }

    pub fn unit(&self) -> usize {
        BASE_UNIT + self.slack
    }

    pub fn anchor(&self, node: &Node) -> (i64, i64) {
        to_canvas(node.row, node.col, self.minrow, self.mincol, self.slack)
    }

    /// Canvas `(height, width)` before padding.
    pub fn canvas_size(&self) -> (usize, usize) {
        let unit = self.unit();
        (
            7 + (self.maxrow - self.minrow) / 2 * unit,
            5 + (self.maxcol - self.mincol) / 2 * unit,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_projection.rs"]
mod tests;
