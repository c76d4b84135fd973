//! Subnode lattice: the walkable surface of the cube structure.
//!
//! Each cube is split into subnodes at offsets in `{-1, 0, 1}³`. A face
//! with an edge attached is replaced by the four faces of the beam that
//! leaves it, so walking off a cube onto an edge is a single subedge.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;
use petgraph::graphmap::UnGraphMap;

use crate::syntax::types::{Direction, Edge, Node, Syndrome};

/// Lattice offset within one cube.
pub type Offset = [i8; 3];

fn add(a: Offset, b: Offset) -> Offset {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// True when `a` and `b` differ by one unit on exactly one axis.
fn unit_adjacent(a: Offset, b: Offset) -> bool {
    (0..3).map(|i| (a[i] - b[i]).abs()).sum::<i8>() == 1
}

// ─── Subnode ─────────────────────────────────────────────────────────────────

/// A point on the surface of a node's cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subnode {
    pub node: usize,
    pub offset: Offset,
}

impl Subnode {
    pub fn new(node: usize, offset: Offset) -> Self {
        Self { node, offset }
    }

    /// The face of `node` facing `dir`.
    pub fn facing(node: usize, dir: Direction) -> Self {
        Self::new(node, dir.axis_vector())
    }
}

impl fmt::Display for Subnode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.offset;
        write!(f, "node {} ({x},{y},{z})", self.node)
    }
}

// ─── Lattice ─────────────────────────────────────────────────────────────────

/// Undirected graph of subnodes and the subedges between them.
pub struct Lattice {
    pub graph: UnGraphMap<Subnode, ()>,
}

impl Lattice {
    /// Build the lattice for a parsed diagram.
    ///
    /// `syndromes` must be derived from `edges`, one per node.
    pub fn build(nodes: &[Node], edges: &[Edge], syndromes: &[Syndrome]) -> Self {
        let mut graph: UnGraphMap<Subnode, ()> = UnGraphMap::new();

        for (node, syndrome) in syndromes.iter().enumerate().take(nodes.len()) {
            let offsets = node_offsets(*syndrome);
            for &offset in &offsets {
                graph.add_node(Subnode::new(node, offset));
            }
            let listed: Vec<Offset> = offsets.into_iter().collect();
            for (i, &a) in listed.iter().enumerate() {
                for &b in &listed[i + 1..] {
                    if unit_adjacent(a, b) {
                        graph.add_edge(Subnode::new(node, a), Subnode::new(node, b), ());
                    }
                }
            }
        }

        for edge in edges {
            let d = edge.direction;
            for o in d.orthogonal() {
                let from = Subnode::new(edge.upper, add(d.axis_vector(), o.axis_vector()));
                let to = Subnode::new(edge.lower, add(d.opposite().axis_vector(), o.axis_vector()));
                graph.add_edge(from, to, ());
            }
        }

        debug!(
            subnodes = graph.node_count(),
            subedges = graph.edge_count();
            "Built lattice"
        );
        Self { graph }
    }

    pub fn contains(&self, subnode: Subnode) -> bool {
        self.graph.contains_node(subnode)
    }

    pub fn is_subedge(&self, a: Subnode, b: Subnode) -> bool {
        self.graph.contains_edge(a, b)
    }

    pub fn neighbors(&self, subnode: Subnode) -> impl Iterator<Item = Subnode> + '_ {
        self.graph.neighbors(subnode)
    }

    pub fn subnode_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn subedge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Subnodes of one node in offset order.
    pub fn subnodes_of(&self, node: usize) -> Vec<Subnode> {
        let mut out: Vec<Subnode> = self.graph.nodes().filter(|s| s.node == node).collect();
        out.sort();
        out
    }
}

/// Surface offsets of a cube with the given syndrome.
pub fn node_offsets(syndrome: Syndrome) -> BTreeSet<Offset> {
    let mut offsets = BTreeSet::new();
    for d in Direction::ALL {
        if syndrome.contains(d) {
            for o in d.orthogonal() {
                offsets.insert(add(d.axis_vector(), o.axis_vector()));
            }
        } else {
            offsets.insert(d.axis_vector());
        }
    }
    offsets
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_lattice.rs"]
mod tests;
