//! Collection file loader.
//!
//! A collection holds many named diagrams:
//!
//! ```text
//! # comment
//! [tower]
//! '*'
//! '|'
//! '*'
//! ```
//!
//! Rows are single-quoted so trailing blanks survive editors.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<name>[^\]]+)\]$").expect("valid header regex"));
static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'(?P<row>.*)'$").expect("valid row regex"));

/// One diagram of a collection, still unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDiagram {
    pub name: String,
    pub rows: Vec<String>,
}

/// Named diagrams in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub diagrams: Vec<NamedDiagram>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&NamedDiagram> {
        self.diagrams.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedDiagram> {
        self.diagrams.iter()
    }
}

/// Parse collection text.
pub fn load(text: &str) -> Result<Collection> {
    let mut diagrams: Vec<NamedDiagram> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let lineno = i + 1;
        let line = raw.trim_end_matches('\r');
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(caps) = HEADER.captures(trimmed) {
            let name = caps["name"].trim().to_string();
            if diagrams.iter().any(|d| d.name == name) {
                return Err(Error::MalformedInput(format!(
                    "line {lineno}: duplicate diagram name {name:?}"
                )));
            }
            diagrams.push(NamedDiagram {
                name,
                rows: Vec::new(),
            });
        } else if let Some(caps) = ROW.captures(line) {
            let Some(current) = diagrams.last_mut() else {
                return Err(Error::MalformedInput(format!(
                    "line {lineno}: row before any [name] header"
                )));
            };
            current.rows.push(caps["row"].to_string());
        } else {
            return Err(Error::MalformedInput(format!(
                "line {lineno}: expected a [name] header or a quoted row, found {line:?}"
            )));
        }
    }

    debug!(diagrams = diagrams.len(); "Loaded collection");
    Ok(Collection { diagrams })
}

/// Read and parse a collection file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Collection> {
    let text = fs::read_to_string(path)?;
    load(&text)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_collection.rs"]
mod tests;
