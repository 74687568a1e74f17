//! Core piece geometry - pure, deterministic, and testable
//!
//! This crate models falling-block pieces: which cells a piece occupies, its
//! bounding box, its skirt, and the closed cycle of its quarter-turn
//! rotations. It has **zero dependencies** on rendering, input or board logic;
//! a game only reads from it.
//!
//! # Module Structure
//!
//! - [`shape`]: one immutable rotation state (body, width, height, skirt)
//! - [`rotation`]: rotation cycles and the [`Piece`] handle that walks them
//! - [`piece_set`]: the standard seven tetrominoes, built once and shared
//! - [`parse`]: `"x y  x y ..."` shape literals
//! - [`error`]: what can go wrong building a piece from a bad definition
//!
//! # Conventions
//!
//! - Rows grow **upward**; `skirt[c]` is the lowest occupied row in column `c`
//! - A quarter turn maps `(x, y)` to `(height - 1 - y, x)` (counter-clockwise)
//! - Symmetric pieces store fewer states: O has 1, I/S/Z have 2, J/L/T have 4
//!
//! # Example
//!
//! ```
//! use tetris_pieces_core::{standard_pieces, PieceSet};
//! use tetris_pieces_types::PieceKind;
//!
//! let pieces = standard_pieces();
//! let i = pieces[PieceKind::I.index()];
//! assert_eq!((i.width(), i.height()), (1, 4));
//!
//! // One turn lays the bar flat; a second brings back the very same seed.
//! let flat = i.next_rotation();
//! assert_eq!(flat.skirt(), &[0, 0, 0, 0]);
//! assert_eq!(flat.next_rotation(), i);
//!
//! // A game can also own its set instead of using the shared one.
//! let set = PieceSet::standard();
//! assert_eq!(set.get(PieceKind::O).unwrap().cycle_len(), 1);
//! ```

pub mod error;
pub mod parse;
pub mod piece_set;
pub mod rotation;
pub mod shape;

pub use tetris_pieces_types as types;

// Re-export commonly used types for convenience
pub use error::PieceError;
pub use parse::parse_cells;
pub use piece_set::{standard_pieces, PieceSet};
pub use rotation::{Piece, RotationCycle, Rotations};
pub use shape::PieceShape;
