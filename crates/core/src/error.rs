//! Errors raised while building pieces from literals or cell sets.

use std::fmt;

use crate::types::Cell;

/// Why a literal or cell set could not become a piece
///
/// None of these occur for the standard piece table; they signal a malformed
/// shape definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// A token in a shape literal is not a non-negative integer in range.
    InvalidToken { literal: String, token: String },
    /// A shape literal has an unpaired coordinate.
    OddTokenCount { literal: String },
    /// No cells at all.
    Empty,
    /// The same cell appears twice in one body.
    DuplicateCell(Cell),
    /// A column inside the bounding box holds no cell, so the skirt is undefined.
    ColumnGap { column: u8 },
    /// A row inside the bounding box holds no cell; row 0 empty means the
    /// body does not sit on the bottom edge.
    RowGap { row: u8 },
    /// Rotating did not reproduce the seed within four quarter turns.
    CycleNotClosed,
}

impl PieceError {
    pub fn code(&self) -> &'static str {
        match self {
            PieceError::InvalidToken { .. } | PieceError::OddTokenCount { .. } => "invalid_literal",
            PieceError::Empty
            | PieceError::DuplicateCell(_)
            | PieceError::ColumnGap { .. }
            | PieceError::RowGap { .. }
            | PieceError::CycleNotClosed => "invalid_body",
        }
    }
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::InvalidToken { literal, token } => {
                write!(f, "could not parse x,y string {:?}: bad token {:?}", literal, token)
            }
            PieceError::OddTokenCount { literal } => {
                write!(f, "could not parse x,y string {:?}: odd number of coordinates", literal)
            }
            PieceError::Empty => write!(f, "piece body has no cells"),
            PieceError::DuplicateCell(cell) => write!(f, "piece body repeats cell {}", cell),
            PieceError::ColumnGap { column } => {
                write!(f, "piece body has no cell in column {}", column)
            }
            PieceError::RowGap { row } => write!(f, "piece body has no cell in row {}", row),
            PieceError::CycleNotClosed => {
                write!(f, "rotation cycle did not close within four quarter turns")
            }
        }
    }
}

impl std::error::Error for PieceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_split_literal_and_body_errors() {
        let literal = PieceError::OddTokenCount {
            literal: "0 0 1".into(),
        };
        assert_eq!(literal.code(), "invalid_literal");
        assert_eq!(PieceError::ColumnGap { column: 1 }.code(), "invalid_body");
        assert_eq!(PieceError::RowGap { row: 0 }.code(), "invalid_body");
    }

    #[test]
    fn message_names_offending_literal() {
        let err = PieceError::InvalidToken {
            literal: "0 x".into(),
            token: "x".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"0 x\""), "{}", msg);
        assert!(msg.contains("\"x\""), "{}", msg);
    }
}
