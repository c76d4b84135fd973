//! Layout: occlusion order, subnode lattice and route finding.

pub mod lattice;
pub mod occlusion;
pub mod pathfinder;

pub use lattice::{Lattice, Subnode};
pub use occlusion::occlusion_order;
pub use pathfinder::{Route, Turn, collapse, shortest_path, turns};
