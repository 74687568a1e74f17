//! Shape literal parsing
//!
//! A literal is a whitespace separated list of `x y` pairs, e.g.
//! `"0 0\t0 1\t0 2\t1 0"`. Spaces, tabs and newlines all separate tokens.

use crate::error::PieceError;
use crate::types::Cell;

/// Parse a shape literal into its cells, in the order written.
///
/// An empty literal yields an empty list; rejecting it is left to
/// [`PieceShape::new`](crate::PieceShape::new).
pub fn parse_cells(literal: &str) -> Result<Vec<Cell>, PieceError> {
    let tokens: Vec<&str> = literal.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(PieceError::OddTokenCount {
            literal: literal.to_string(),
        });
    }

    let mut cells = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        let x = parse_coord(literal, pair[0])?;
        let y = parse_coord(literal, pair[1])?;
        cells.push(Cell::from((x, y)));
    }
    Ok(cells)
}

fn parse_coord(literal: &str, token: &str) -> Result<u8, PieceError> {
    token.parse::<u8>().map_err(|_| PieceError::InvalidToken {
        literal: literal.to_string(),
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_and_space_separated_pairs() {
        let cells = parse_cells("0 0\t0 1  0 2\n1 0").unwrap();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0)
            ]
        );
    }

    #[test]
    fn keeps_written_order() {
        let cells = parse_cells("2 0 1 0 0 0").unwrap();
        assert_eq!(cells[0], Cell::new(2, 0));
        assert_eq!(cells[2], Cell::new(0, 0));
    }

    #[test]
    fn empty_literal_yields_no_cells() {
        assert!(parse_cells("   ").unwrap().is_empty());
    }

    #[test]
    fn odd_token_count_is_rejected() {
        let err = parse_cells("0 0 1").unwrap_err();
        assert_eq!(
            err,
            PieceError::OddTokenCount {
                literal: "0 0 1".to_string()
            }
        );
    }

    #[test]
    fn non_integer_token_is_rejected() {
        let err = parse_cells("0 0 a 1").unwrap_err();
        assert!(matches!(err, PieceError::InvalidToken { ref token, .. } if token == "a"));
    }

    #[test]
    fn negative_and_oversized_tokens_are_rejected() {
        assert!(matches!(
            parse_cells("-1 0").unwrap_err(),
            PieceError::InvalidToken { .. }
        ));
        assert!(matches!(
            parse_cells("256 0").unwrap_err(),
            PieceError::InvalidToken { .. }
        ));
    }
}
