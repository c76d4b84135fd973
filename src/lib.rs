//! hocus: isometric ASCII cube-lattice diagrams.
//!
//! A diagram is a character grid of cube vertices (`*`) joined by strokes
//! (`|`, `/`, `\`), with optional entrance and exit digits. This crate
//! parses such grids, renders them as stacked ASCII cubes, and finds the
//! shortest walk over the cube surfaces between the two markers.
//!
//! Public API: [`solve_diagram`], [`pipeline::process`] and
//! [`pipeline::process_all`].

pub mod config;
pub mod error;
pub mod layout;
pub mod observe;
pub mod parsers;
pub mod pipeline;
pub mod renderers;
pub mod syntax;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::Outcome;

use observe::Silent;

/// Parse, render and solve one diagram with the given slack.
pub fn solve_diagram<S: AsRef<str>>(rows: &[S], slack: usize) -> Result<Outcome> {
    let config = Config {
        slack,
        ..Config::default()
    };
    pipeline::process("diagram", rows, &config, &mut Silent)
}
