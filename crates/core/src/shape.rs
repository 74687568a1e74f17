//! Shape module - one rotation state of a piece
//!
//! A [`PieceShape`] owns the body (occupied cells) of a piece in a single
//! orientation together with everything derived from it at construction:
//!
//! - **width / height**: bounding box, `max coordinate + 1` along each axis
//! - **skirt**: for each column, the lowest occupied row; this is what a board
//!   compares against its column heights to find where a piece lands
//!
//! Shapes never change after construction. Rotating produces a new shape.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::PieceError;
use crate::parse::parse_cells;
use crate::types::Cell;

/// Immutable body, bounding box and skirt of one rotation state
#[derive(Debug, Clone)]
pub struct PieceShape {
    /// Body in the order it was given.
    cells: Vec<Cell>,
    /// Body sorted by column then row, for order-insensitive comparison.
    canonical: Vec<Cell>,
    width: usize,
    height: usize,
    skirt: Vec<u8>,
}

impl PieceShape {
    /// Build a shape from its cells.
    ///
    /// The cells may come in any order but must be unique, non-empty, and
    /// leave no column or row of the bounding box empty. A full bounding box
    /// is what keeps every quarter turn a valid shape.
    pub fn new(cells: Vec<Cell>) -> Result<Self, PieceError> {
        if cells.is_empty() {
            return Err(PieceError::Empty);
        }

        let mut canonical = cells.clone();
        canonical.sort_unstable();
        if let Some(pair) = canonical.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(PieceError::DuplicateCell(pair[0]));
        }

        let width = cells.iter().map(|c| c.x as usize).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|c| c.y as usize).max().unwrap_or(0) + 1;

        // Single pass over the unordered body, then reject any column left unset.
        let mut lowest: Vec<Option<u8>> = vec![None; width];
        for cell in &cells {
            let slot = &mut lowest[cell.x as usize];
            *slot = Some(slot.map_or(cell.y, |y| y.min(cell.y)));
        }
        let skirt = lowest
            .into_iter()
            .enumerate()
            .map(|(column, y)| {
                y.ok_or(PieceError::ColumnGap {
                    column: column as u8,
                })
            })
            .collect::<Result<Vec<u8>, PieceError>>()?;

        let mut occupied_rows = vec![false; height];
        for cell in &cells {
            occupied_rows[cell.y as usize] = true;
        }
        if let Some(row) = occupied_rows.iter().position(|occupied| !occupied) {
            return Err(PieceError::RowGap { row: row as u8 });
        }

        Ok(Self {
            cells,
            canonical,
            width,
            height,
            skirt,
        })
    }

    /// Parse a literal such as `"0 0  0 1  1 0  1 1"` and build the shape.
    pub fn from_literal(literal: &str) -> Result<Self, PieceError> {
        Self::new(parse_cells(literal)?)
    }

    /// Width of the piece measured in blocks.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the piece measured in blocks.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The occupied cells, in construction order.
    pub fn body(&self) -> &[Cell] {
        &self.cells
    }

    /// Lowest occupied row of each column, indexed by column.
    pub fn skirt(&self) -> &[u8] {
        &self.skirt
    }

    /// True when both bodies hold the same cells, whatever their order.
    pub fn same_shape(&self, other: &PieceShape) -> bool {
        self.canonical == other.canonical
    }

    /// True when `cell` is part of the body.
    pub fn contains(&self, cell: Cell) -> bool {
        self.canonical.binary_search(&cell).is_ok()
    }

    /// The shape turned 90° counter-clockwise.
    ///
    /// Each `(x, y)` maps to `(height - 1 - y, x)`, which keeps the result
    /// anchored at the origin.
    pub fn rotated_ccw(&self) -> Result<PieceShape, PieceError> {
        let top = self.height - 1;
        let cells = self
            .cells
            .iter()
            .map(|c| Cell::new((top - c.y as usize) as u8, c.x))
            .collect();
        PieceShape::new(cells)
    }
}

impl fmt::Display for PieceShape {
    /// ASCII grid, top row first: `#` occupied, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let ch = if self.contains(Cell::new(x as u8, y as u8)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", ch)?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Serialize for PieceShape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cells: Vec<[u8; 2]> = self.cells.iter().map(|c| [c.x, c.y]).collect();
        let mut s = serializer.serialize_struct("PieceShape", 4)?;
        s.serialize_field("cells", &cells)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("skirt", &self.skirt)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(literal: &str) -> PieceShape {
        PieceShape::from_literal(literal).unwrap()
    }

    #[test]
    fn square_dimensions_and_skirt() {
        let o = shape("0 0 0 1 1 0 1 1");
        assert_eq!(o.width(), 2);
        assert_eq!(o.height(), 2);
        assert_eq!(o.skirt(), &[0, 0]);
    }

    #[test]
    fn skirt_takes_lowest_row_per_column() {
        // Z: upper-left pair and lower-right pair.
        let z = shape("0 1 1 1 1 0 2 0");
        assert_eq!(z.width(), 3);
        assert_eq!(z.height(), 2);
        assert_eq!(z.skirt(), &[1, 0, 0]);
    }

    #[test]
    fn body_keeps_construction_order() {
        let z = shape("0 1 1 1 1 0 2 0");
        assert_eq!(z.body()[0], Cell::new(0, 1));
        assert_eq!(z.body()[3], Cell::new(2, 0));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(PieceShape::new(Vec::new()).unwrap_err(), PieceError::Empty);
    }

    #[test]
    fn duplicate_cell_is_rejected() {
        let err = PieceShape::from_literal("0 0 0 1 0 0").unwrap_err();
        assert_eq!(err, PieceError::DuplicateCell(Cell::new(0, 0)));
    }

    #[test]
    fn column_gap_is_rejected() {
        let err = PieceShape::from_literal("0 0 2 0").unwrap_err();
        assert_eq!(err, PieceError::ColumnGap { column: 1 });
    }

    #[test]
    fn body_lifted_off_the_bottom_row_is_rejected() {
        let err = PieceShape::from_literal("0 1 1 1").unwrap_err();
        assert_eq!(err, PieceError::RowGap { row: 0 });
    }

    #[test]
    fn row_gap_is_rejected() {
        let err = PieceShape::from_literal("0 0 0 2").unwrap_err();
        assert_eq!(err, PieceError::RowGap { row: 1 });
    }

    #[test]
    fn column_gap_is_reported_before_row_gap() {
        let err = PieceShape::from_literal("0 0 2 2").unwrap_err();
        assert_eq!(err, PieceError::ColumnGap { column: 1 });
    }

    #[test]
    fn same_shape_ignores_order() {
        let a = shape("0 0 1 0 1 1 2 0");
        let b = shape("2 0 1 1 0 0 1 0");
        assert!(a.same_shape(&b));
        assert!(b.same_shape(&a));
        assert!(a.same_shape(&a));
    }

    #[test]
    fn same_shape_compares_cardinality() {
        let small = shape("0 0 1 0");
        let big = shape("0 0 1 0 1 1");
        assert!(!small.same_shape(&big));
        assert!(!big.same_shape(&small));
    }

    #[test]
    fn rotating_vertical_bar_lays_it_flat() {
        let i = shape("0 0 0 1 0 2 0 3");
        let flat = i.rotated_ccw().unwrap();
        assert_eq!(flat.width(), 4);
        assert_eq!(flat.height(), 1);
        assert_eq!(flat.skirt(), &[0, 0, 0, 0]);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        // L seed:  .#     rotated:  ###
        //          .#               ..#
        //          ##
        let l = shape("0 0 1 0 1 1 1 2");
        let turned = l.rotated_ccw().unwrap();
        assert!(turned.same_shape(&shape("2 0 2 1 1 1 0 1")));
        assert_eq!(turned.to_string(), "###\n..#");
    }

    #[test]
    fn display_draws_top_row_first() {
        let t = shape("0 0 1 0 1 1 2 0");
        assert_eq!(t.to_string(), ".#.\n###");
    }
}
