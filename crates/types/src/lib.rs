//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the piece geometry core.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry, rendering, dumps).
//!
//! # Coordinates
//!
//! A [`Cell`] is a `(column, row)` pair measured in block units:
//!
//! - **Column** grows to the right, starting at 0
//! - **Row** grows upward, starting at 0 (row 0 is the bottom of the piece)
//!
//! Under this convention the transform `(x, y) -> (height - 1 - y, x)` turns a
//! piece 90° counter-clockwise, and the literal table in [`STANDARD_SHAPES`] is
//! written against it.
//!
//! # Standard Pieces
//!
//! | Index | Kind | Literal |
//! |-------|------|---------|
//! | 0 | I | `0 0  0 1  0 2  0 3` |
//! | 1 | J | `0 0  0 1  0 2  1 0` |
//! | 2 | L | `0 0  1 0  1 1  1 2` |
//! | 3 | S | `0 0  1 0  1 1  2 1` |
//! | 4 | Z | `0 1  1 1  1 0  2 0` |
//! | 5 | O | `0 0  0 1  1 0  1 1` |
//! | 6 | T | `0 0  1 0  1 1  2 0` |
//!
//! # Examples
//!
//! ```
//! use tetris_pieces_types::{Cell, PieceKind, STANDARD_PIECE_COUNT};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(parsed.index(), 6);
//!
//! let cell = Cell::new(1, 2);
//! assert_eq!((cell.x, cell.y), (1, 2));
//!
//! assert_eq!(STANDARD_PIECE_COUNT, 7);
//! ```

use std::fmt;

/// Number of standard tetromino shapes.
pub const STANDARD_PIECE_COUNT: usize = 7;

/// Upper bound on the number of distinct rotation states of any piece.
pub const MAX_ROTATIONS: usize = 4;

/// Literal body of each standard piece in its first orientation.
///
/// Whitespace (spaces or tabs) separated `x y` pairs, indexed by
/// [`PieceKind::index`].
pub const STANDARD_SHAPES: [&str; STANDARD_PIECE_COUNT] = [
    "0 0\t0 1\t0 2\t0 3", // I
    "0 0\t0 1\t0 2\t1 0", // J
    "0 0\t1 0\t1 1\t1 2", // L
    "0 0\t1 0\t1 1\t2 1", // S
    "0 1\t1 1\t1 0\t2 0", // Z
    "0 0\t0 1\t1 0\t1 1", // O
    "0 0\t1 0\t1 1\t2 0", // T
];

/// One occupied unit square of a piece
///
/// Cells order lexicographically by column, then row. That order is the
/// canonical form used when comparing bodies as sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Column, growing to the right.
    pub x: u8,
    /// Row, growing upward.
    pub y: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl From<(u8, u8)> for Cell {
    fn from((x, y): (u8, u8)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The seven tetromino piece kinds
///
/// Declared in the reference order of the standard piece table, so
/// `kind as usize` matches [`STANDARD_SHAPES`]:
/// - **I**: straight line, two rotation states
/// - **J**: four rotation states
/// - **L**: four rotation states (mirror of J)
/// - **S**: two rotation states
/// - **Z**: two rotation states (mirror of S)
/// - **O**: 2x2 square, one rotation state
/// - **T**: four rotation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    S,
    Z,
    O,
    T,
}

impl PieceKind {
    /// All kinds in reference order.
    pub const ALL: [PieceKind; STANDARD_PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::O,
        PieceKind::T,
    ];

    /// Position of this kind in the standard piece table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Literal body of this kind's first orientation.
    pub fn literal(self) -> &'static str {
        STANDARD_SHAPES[self.index()]
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_pieces_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_pieces_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "i");
    /// assert_eq!(PieceKind::T.as_str(), "t");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::O => "o",
            PieceKind::T => "t",
        }
    }
}
