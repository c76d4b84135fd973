//! Cube sprites and the rule for composing them onto a canvas.
//!
//! Every sprite is a 7-row by 5-column template whose anchor, row 4 and
//! column 2, is the front-top corner of the cube. `.` cells are transparent;
//! a space is an explicit blank.

use crate::syntax::types::{Direction, is_stroke};

/// Template cell that leaves the canvas untouched.
pub const TRANSPARENT: char = '.';

/// Anchor cell shared by all sprites.
pub const ANCHOR: (i64, i64) = (4, 2);

/// An immutable stamp template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub rows: [&'static str; 7],
    pub anchor: (i64, i64),
}

impl Sprite {
    const fn new(rows: [&'static str; 7]) -> Self {
        Self {
            rows,
            anchor: ANCHOR,
        }
    }
}

/// Compose one template cell over what the canvas holds.
///
/// Transparent cells keep `existing`; a stroke drawn over the identical
/// stroke erases the cell; anything else overwrites.
pub fn blend(existing: char, incoming: char) -> char {
    if incoming == TRANSPARENT {
        existing
    } else if incoming == existing && is_stroke(incoming) {
        ' '
    } else {
        incoming
    }
}

// ─── Templates ───────────────────────────────────────────────────────────────

pub const VISIBLE: Sprite = Sprite::new([
    "..*..",
    "./.\\.",
    "*...*",
    "|\\./|",
    "*.*.*",
    ".\\|/.",
    "..*..",
]);

pub const NORTH_EAST: Sprite = Sprite::new([
    ".....", "...\\.", ".....", ".....", ".....", ".....", ".....",
]);

pub const NORTH_WEST: Sprite = Sprite::new([
    ".....", "./...", ".....", ".....", ".....", ".....", ".....",
]);

pub const SOUTH: Sprite = Sprite::new([
    ".....", ".....", ".....", ".....", ".....", ".\\./.", ".....",
]);

pub const NORTH: Sprite = Sprite::new([
    ".....", "./.\\.", ".....", ".\\./.", ".....", ".....", ".....",
]);

pub const SOUTH_EAST: Sprite = Sprite::new([
    ".....", ".....", ".....", ".../|", ".... ", "...\\.", ".....",
]);

pub const SOUTH_WEST: Sprite = Sprite::new([
    ".....", ".....", ".....", "|\\...", " ....", "./...", ".....",
]);

// ─── Stamp order ─────────────────────────────────────────────────────────────

/// One stamping step of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp {
    Visible,
    Face(Direction),
}

/// Per-node stamping order: back faces, the cube, then front faces.
pub const STAMP_ORDER: [Stamp; 7] = [
    Stamp::Face(Direction::NE),
    Stamp::Face(Direction::NW),
    Stamp::Face(Direction::S),
    Stamp::Visible,
    Stamp::Face(Direction::N),
    Stamp::Face(Direction::SE),
    Stamp::Face(Direction::SW),
];

impl Stamp {
    pub fn sprite(self) -> &'static Sprite {
        match self {
            Stamp::Visible => &VISIBLE,
            Stamp::Face(Direction::N) => &NORTH,
            Stamp::Face(Direction::NE) => &NORTH_EAST,
            Stamp::Face(Direction::SE) => &SOUTH_EAST,
            Stamp::Face(Direction::S) => &SOUTH,
            Stamp::Face(Direction::SW) => &SOUTH_WEST,
            Stamp::Face(Direction::NW) => &NORTH_WEST,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_sprite.rs"]
mod tests;
