//! Tetris pieces (workspace facade crate).
//!
//! Re-exports the geometry crates under `tetris_pieces::{core, types}` and
//! hosts the [`dump`] module behind the `tetris-pieces` binary.

pub use tetris_pieces_core as core;
pub use tetris_pieces_types as types;

pub mod dump;
