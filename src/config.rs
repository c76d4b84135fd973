//! Configuration for the diagram pipeline.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Pipeline settings, loadable from TOML. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra canvas cells per cube unit.
    pub slack: usize,
    /// Process at most this many diagrams of a collection.
    pub limit: Option<usize>,
    /// Diagram names whose picture is not rendered.
    pub skip_render: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slack: 1,
            limit: None,
            skip_render: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn renders(&self, name: &str) -> bool {
        !self.skip_render.iter().any(|skipped| skipped == name)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
