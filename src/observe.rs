//! Observation hooks at pipeline boundaries.
//!
//! The core algorithms never call these; the pipeline does, once per stage.

use log::{debug, info, trace};

use crate::layout::lattice::Lattice;
use crate::layout::pathfinder::Route;
use crate::renderers::canvas::Canvas;
use crate::syntax::types::Diagram;

/// Receives each stage's result for one named diagram.
pub trait Observer {
    fn parsed(&mut self, _name: &str, _diagram: &Diagram) {}

    fn sorted(&mut self, _name: &str, _order: &[usize]) {}

    fn rendered(&mut self, _name: &str, _canvas: &Canvas) {}

    fn lattice_built(&mut self, _name: &str, _lattice: &Lattice) {}

    fn solved(&mut self, _name: &str, _route: Option<&Route>) {}
}

/// Ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {}

/// Forwards every stage to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn parsed(&mut self, name: &str, diagram: &Diagram) {
        debug!(
            diagram = name,
            nodes = diagram.node_count(),
            edges = diagram.edge_count(),
            markers = diagram.markers.len();
            "Parsed"
        );
    }

    fn sorted(&mut self, name: &str, order: &[usize]) {
        trace!(diagram = name, order:?; "Sorted edges");
    }

    fn rendered(&mut self, name: &str, canvas: &Canvas) {
        debug!(diagram = name, height = canvas.height, width = canvas.width; "Rendered");
    }

    fn lattice_built(&mut self, name: &str, lattice: &Lattice) {
        debug!(
            diagram = name,
            subnodes = lattice.subnode_count(),
            subedges = lattice.subedge_count();
            "Lattice built"
        );
    }

    fn solved(&mut self, name: &str, route: Option<&Route>) {
        match route {
            Some(route) => info!(diagram = name, turns = route.forward.len(); "Solved"),
            None => info!(diagram = name; "No route"),
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_observe.rs"]
mod tests;
