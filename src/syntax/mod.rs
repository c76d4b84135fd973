//! Parsed diagram model.

pub mod types;

pub use types::{Diagram, Direction, Edge, Marker, Node, Syndrome};
