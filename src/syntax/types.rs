/// Data structures for parsed cube-lattice diagrams.
///
/// These types represent the parsed form of an ASCII diagram:
/// the compass [`Direction`] classes, [`Node`], [`Edge`], [`Marker`],
/// the per-node [`Syndrome`] and the whole [`Diagram`].
use std::fmt;

// ─── Characters ──────────────────────────────────────────────────────────────

/// Cell character marking a cube vertex.
pub const NODE_MARKER: char = '*';

/// Stroke characters and the grid step each one follows, lower row first.
pub const STROKES: [(char, (i64, i64)); 3] = [('|', (1, 0)), ('/', (1, -1)), ('\\', (1, 1))];

/// Grid step of a stroke character, `None` for anything else.
pub fn stroke_delta(ch: char) -> Option<(i64, i64)> {
    STROKES
        .iter()
        .find(|(stroke, _)| *stroke == ch)
        .map(|(_, delta)| *delta)
}

pub fn is_stroke(ch: char) -> bool {
    stroke_delta(ch).is_some()
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// The six edge directions of the isometric projection, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

impl Direction {
    /// All directions in clockwise order; the index doubles as the marker digit.
    pub const ALL: [Direction; 6] = [
        Direction::N,
        Direction::NE,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::NW,
    ];

    pub fn index(self) -> usize {
        match self {
            Direction::N => 0,
            Direction::NE => 1,
            Direction::SE => 2,
            Direction::S => 3,
            Direction::SW => 4,
            Direction::NW => 5,
        }
    }

    /// Direction encoded by a marker digit. Digits past 5 wrap around.
    pub fn from_digit(digit: u32) -> Self {
        Self::ALL[digit as usize % Self::ALL.len()]
    }

    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// Direction class of a grid delta, by sign only. Horizontal deltas have none.
    pub fn from_delta(drow: i64, dcol: i64) -> Option<Self> {
        match (drow.signum(), dcol.signum()) {
            (1, 0) => Some(Direction::S),
            (1, 1) => Some(Direction::SE),
            (1, -1) => Some(Direction::SW),
            (-1, 0) => Some(Direction::N),
            (-1, 1) => Some(Direction::NE),
            (-1, -1) => Some(Direction::NW),
            _ => None,
        }
    }

    /// Unit step (row, col) on the picture.
    pub fn step(self) -> (i64, i64) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::NW => (-1, -1),
        }
    }

    /// Unit vector of the 3-D lattice: x runs NW→SE, y runs SW→NE, z runs S→N.
    pub fn axis_vector(self) -> [i8; 3] {
        match self {
            Direction::SE => [1, 0, 0],
            Direction::NW => [-1, 0, 0],
            Direction::NE => [0, 1, 0],
            Direction::SW => [0, -1, 0],
            Direction::N => [0, 0, 1],
            Direction::S => [0, 0, -1],
        }
    }

    /// The four directions on the other two axes.
    pub fn orthogonal(self) -> impl Iterator<Item = Direction> {
        Self::ALL
            .into_iter()
            .filter(move |d| *d != self && *d != self.opposite())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

/// A cube vertex. Its index in [`Diagram::nodes`] is its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    pub row: usize,
    pub col: usize,
}

impl Node {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Direction class from this node towards `other`.
    pub fn direction_to(&self, other: &Node) -> Option<Direction> {
        Direction::from_delta(
            other.row as i64 - self.row as i64,
            other.col as i64 - self.col as i64,
        )
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

/// A cube edge between two nodes, upper node first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Index of the node on the lower input row (upper on screen).
    pub upper: usize,
    /// Index of the node on the higher input row.
    pub lower: usize,
    /// Direction from `upper` to `lower`: always `S`, `SE` or `SW`.
    pub direction: Direction,
}

impl Edge {
    pub fn new(upper: usize, lower: usize, direction: Direction) -> Self {
        Self {
            upper,
            lower,
            direction,
        }
    }

    /// Direction of the edge as seen from `node`, if it is an endpoint.
    pub fn direction_from(&self, node: usize) -> Option<Direction> {
        if node == self.upper {
            Some(self.direction)
        } else if node == self.lower {
            Some(self.direction.opposite())
        } else {
            None
        }
    }
}

// ─── Syndrome ────────────────────────────────────────────────────────────────

/// The set of directions in which a node has an incident edge, one bit each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Syndrome(u8);

impl Syndrome {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn with(self, dir: Direction) -> Self {
        Self(self.0 | 1 << dir.index())
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & (1 << dir.index()) != 0
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Syndromes of `node_count` nodes derived from an edge list.
    pub fn of_all(node_count: usize, edges: &[Edge]) -> Vec<Syndrome> {
        let mut out = vec![Syndrome::empty(); node_count];
        for edge in edges {
            out[edge.upper] = out[edge.upper].with(edge.direction);
            out[edge.lower] = out[edge.lower].with(edge.direction.opposite());
        }
        out
    }
}

// ─── Marker ──────────────────────────────────────────────────────────────────

/// An entrance or exit annotation resolved to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub node: usize,
    pub direction: Direction,
    /// Position of the digit cell in the input grid.
    pub row: usize,
    pub col: usize,
}

// ─── Diagram ─────────────────────────────────────────────────────────────────

/// Everything extracted from one character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub height: usize,
    pub width: usize,
    /// Nodes in row-major scan order.
    pub nodes: Vec<Node>,
    /// Edges in discovery order.
    pub edges: Vec<Edge>,
    /// `(behind, front)` edge index pairs in discovery order.
    pub precedence: Vec<(usize, usize)>,
    /// Markers in scan order; the first is the entrance.
    pub markers: Vec<Marker>,
}

impl Diagram {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn syndromes(&self) -> Vec<Syndrome> {
        Syndrome::of_all(self.nodes.len(), &self.edges)
    }

    /// The entrance and exit, when the diagram has both.
    pub fn endpoints(&self) -> Option<(Marker, Marker)> {
        match self.markers.as_slice() {
            [entrance, exit] => Some((*entrance, *exit)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
