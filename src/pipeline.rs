//! Per-diagram pipeline and batch driver.
//!
//! parse → sort and render (unless skipped) → build lattice → solve.
//!
//! The occlusion order only feeds the renderer. A diagram excluded from
//! rendering is never sorted.

use std::fmt::Write as _;

use log::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::layout::lattice::Lattice;
use crate::layout::occlusion::occlusion_order;
use crate::layout::pathfinder::Route;
use crate::observe::Observer;
use crate::parsers::{Collection, parse_grid};
use crate::renderers::{Canvas, IsometricRenderer, Renderer};
use crate::syntax::types::Diagram;

/// Everything produced for one diagram.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub name: String,
    pub diagram: Diagram,
    /// Edge drawing order, back to front. Empty when rendering was skipped.
    pub order: Vec<usize>,
    /// `None` when rendering was skipped.
    pub canvas: Option<Canvas>,
    /// `None` when the diagram has no markers or no path joins them.
    pub route: Option<Route>,
}

impl Outcome {
    pub fn has_markers(&self) -> bool {
        self.diagram.endpoints().is_some()
    }

    /// Human-readable summary: name, picture, then the route readings.
    pub fn report(&self) -> String {
        let mut out = format!("[{}]\n", self.name);
        if let Some(canvas) = &self.canvas {
            out.push_str(&canvas.render_to_string());
        }
        match (&self.route, self.has_markers()) {
            (Some(route), _) => {
                out.push_str("forward:\n");
                for turn in &route.forward {
                    let _ = writeln!(out, "  {turn}");
                }
                out.push_str("reverse:\n");
                for turn in &route.reverse {
                    let _ = writeln!(out, "  {turn}");
                }
            }
            (None, true) => out.push_str("no path\n"),
            (None, false) => out.push_str("no markers\n"),
        }
        out
    }
}

/// Run every stage on one diagram.
pub fn process<S: AsRef<str>>(
    name: &str,
    rows: &[S],
    config: &Config,
    observer: &mut dyn Observer,
) -> Result<Outcome> {
    let diagram = parse_grid(rows)?;
    observer.parsed(name, &diagram);

    let (order, canvas) = if config.renders(name) {
        let order = occlusion_order(diagram.edge_count(), &diagram.precedence)?;
        observer.sorted(name, &order);
        let canvas = IsometricRenderer::new(config.slack).render(&diagram, &order)?;
        observer.rendered(name, &canvas);
        (order, Some(canvas))
    } else {
        info!(diagram = name; "Rendering skipped");
        (Vec::new(), None)
    };

    let lattice = Lattice::build(&diagram.nodes, &diagram.edges, &diagram.syndromes());
    observer.lattice_built(name, &lattice);

    let route = match diagram.endpoints() {
        Some((entrance, exit)) => match Route::solve(&diagram, &lattice, entrance, exit) {
            Ok(route) => Some(route),
            Err(Error::Unsolvable { from, to }) => {
                warn!(diagram = name, from:% = from, to:% = to; "No path between markers");
                None
            }
            Err(err) => return Err(err),
        },
        None => None,
    };
    observer.solved(name, route.as_ref());

    Ok(Outcome {
        name: name.to_string(),
        diagram,
        order,
        canvas,
        route,
    })
}

/// Run every diagram of a collection, up to the configured limit.
///
/// A failing diagram yields its error and the batch carries on.
pub fn process_all(
    collection: &Collection,
    config: &Config,
    observer: &mut dyn Observer,
) -> Vec<(String, Result<Outcome>)> {
    let limit = config.limit.unwrap_or(usize::MAX);
    collection
        .iter()
        .take(limit)
        .map(|named| {
            info!(diagram = named.name.as_str(); "Processing diagram");
            let result = process(&named.name, &named.rows, config, observer);
            if let Err(err) = &result {
                warn!(diagram = named.name.as_str(), error:% = err; "Diagram failed");
            }
            (named.name.clone(), result)
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/rust/test_pipeline.rs"]
mod tests;
