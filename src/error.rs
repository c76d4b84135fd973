//! Error types for diagram processing.
//!
//! Every stage of the pipeline reports failures through [`Error`]. A
//! structural error aborts the diagram it occurred in; the batch driver
//! carries on with the next one.

use std::io;

use thiserror::Error;

use crate::layout::lattice::Subnode;

/// The error type for parsing, sorting, rendering and solving diagrams.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("stroke at row {row}, column {col} runs off the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("marker '{digit}' at row {row}, column {col} matches {matches} nodes, expected exactly one")]
    AmbiguousMarker {
        row: usize,
        col: usize,
        digit: char,
        matches: usize,
    },

    #[error("occlusion cycle through edges {cycle:?}")]
    CycleDetected { cycle: Vec<usize> },

    #[error("no lattice path from {from} to {to}")]
    Unsolvable { from: Subnode, to: Subnode },

    #[error("node offsets must be even, found row offset {row_offset} and column offset {col_offset}")]
    UnevenSpan { row_offset: usize, col_offset: usize },

    #[error("canvas write at row {row}, column {col} falls outside the canvas")]
    CanvasOverflow { row: i64, col: i64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
