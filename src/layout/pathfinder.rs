//! Breadth-first route finding on the subnode lattice.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use log::{debug, trace};

use super::lattice::{Lattice, Subnode};
use crate::error::{Error, Result};
use crate::syntax::types::{Diagram, Direction, Marker, Node};

// ─── Search ──────────────────────────────────────────────────────────────────

/// Shortest subnode path from `from` to `to`, both ends included.
///
/// Unweighted BFS; the search stops as soon as `to` is dequeued.
pub fn shortest_path(lattice: &Lattice, from: Subnode, to: Subnode) -> Result<Vec<Subnode>> {
    let unsolvable = || Error::Unsolvable { from, to };
    if !lattice.contains(from) || !lattice.contains(to) {
        return Err(unsolvable());
    }

    let mut queue: VecDeque<Subnode> = VecDeque::new();
    queue.push_back(from);
    let mut came_from: HashMap<Subnode, Option<Subnode>> = HashMap::new();
    came_from.insert(from, None);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = Vec::new();
            let mut cur = Some(current);
            while let Some(s) = cur {
                path.push(s);
                cur = came_from.get(&s).copied().flatten();
            }
            path.reverse();
            trace!(steps = path.len(); "Lattice path found");
            return Ok(path);
        }
        // Sorted so ties resolve the same way on every run.
        let mut next: Vec<Subnode> = lattice.neighbors(current).collect();
        next.sort();
        for n in next {
            if !came_from.contains_key(&n) {
                came_from.insert(n, Some(current));
                queue.push_back(n);
            }
        }
    }

    Err(unsolvable())
}

/// Node indices visited by a subnode path, consecutive repeats merged.
pub fn collapse(path: &[Subnode]) -> Vec<usize> {
    let mut nodes: Vec<usize> = path.iter().map(|s| s.node).collect();
    nodes.dedup();
    nodes
}

// ─── Turns ───────────────────────────────────────────────────────────────────

/// One step of a route: move in `direction` to reach node `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub direction: Direction,
    pub node: usize,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "go {} to node {}", self.direction, self.node)
    }
}

/// Turn list for a node sequence. Consecutive nodes are expected to share
/// an edge; a pair with no direction class is skipped.
pub fn turns(nodes: &[Node], route: &[usize]) -> Vec<Turn> {
    route
        .windows(2)
        .filter_map(|pair| {
            let (a, b) = (nodes[pair[0]], nodes[pair[1]]);
            a.direction_to(&b).map(|direction| Turn {
                direction,
                node: pair[1],
            })
        })
        .collect()
}

// ─── Route ───────────────────────────────────────────────────────────────────

/// A solved diagram: the subnode path and its readings in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: Vec<Subnode>,
    pub nodes: Vec<usize>,
    pub forward: Vec<Turn>,
    pub reverse: Vec<Turn>,
}

impl Route {
    /// Solve from the entrance marker to the exit marker.
    pub fn solve(diagram: &Diagram, lattice: &Lattice, entrance: Marker, exit: Marker) -> Result<Self> {
        let from = Subnode::facing(entrance.node, entrance.direction);
        let to = Subnode::facing(exit.node, exit.direction);
        let path = shortest_path(lattice, from, to)?;
        let visited = collapse(&path);
        let forward = turns(&diagram.nodes, &visited);
        let backward: Vec<usize> = visited.iter().rev().copied().collect();
        let reverse = turns(&diagram.nodes, &backward);
        debug!(
            subnodes = path.len(),
            nodes = visited.len(),
            turns = forward.len();
            "Solved route"
        );
        Ok(Self {
            path,
            nodes: visited,
            forward,
            reverse,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_pathfinder.rs"]
mod tests;
