//! Rotation module - closed cycles of quarter turns
//!
//! A [`RotationCycle`] holds every distinct orientation of one piece, seed
//! first, each entry being the previous one turned 90° counter-clockwise.
//! The cycle closes as soon as a turn reproduces the seed's body, so
//! symmetric pieces store fewer than four states:
//!
//! | Symmetry | Example | Length |
//! |----------|---------|--------|
//! | quarter turn | O | 1 |
//! | half turn | I, S, Z | 2 |
//! | none | J, L, T | 4 |
//!
//! Orientations are addressed by index, and [`Piece`] is a cheap handle
//! `(cycle, index)` whose `next_rotation` is `(index + 1) % len`. Walking the
//! cycle therefore always comes back to the very same seed handle.

use std::fmt;
use std::iter::FusedIterator;

use arrayvec::ArrayVec;

use crate::error::PieceError;
use crate::shape::PieceShape;
use crate::types::{Cell, PieceKind, MAX_ROTATIONS};

/// Every distinct orientation of one piece, seed first
#[derive(Debug, Clone)]
pub struct RotationCycle {
    kind: Option<PieceKind>,
    rotations: ArrayVec<PieceShape, MAX_ROTATIONS>,
}

impl RotationCycle {
    /// Rotate `seed` until its body reappears and collect the distinct states.
    pub fn build(seed: PieceShape) -> Result<Self, PieceError> {
        Self::build_tagged(None, seed)
    }

    /// Same as [`build`](Self::build), tagging the cycle with a standard kind.
    pub fn build_tagged(kind: Option<PieceKind>, seed: PieceShape) -> Result<Self, PieceError> {
        Self::close_cycle(kind, seed, PieceShape::rotated_ccw)
    }

    /// Apply `turn` until the seed's body reappears.
    ///
    /// With a quarter turn over a full bounding box this closes within
    /// [`MAX_ROTATIONS`] steps; anything longer is `CycleNotClosed`.
    fn close_cycle<F>(kind: Option<PieceKind>, seed: PieceShape, turn: F) -> Result<Self, PieceError>
    where
        F: Fn(&PieceShape) -> Result<PieceShape, PieceError>,
    {
        let mut rotations: ArrayVec<PieceShape, MAX_ROTATIONS> = ArrayVec::new();
        let mut candidate = turn(&seed)?;
        rotations.push(seed);

        // A turn can only repeat an earlier state by first repeating the seed,
        // so comparing against the seed alone detects every symmetry.
        while !candidate.same_shape(&rotations[0]) {
            let next = turn(&candidate)?;
            if rotations.try_push(candidate).is_err() {
                return Err(PieceError::CycleNotClosed);
            }
            candidate = next;
        }

        Ok(Self { kind, rotations })
    }

    /// Standard kind this cycle was built for, if any.
    pub fn kind(&self) -> Option<PieceKind> {
        self.kind
    }

    /// Number of distinct orientations (1, 2 or 4).
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    pub fn shapes(&self) -> &[PieceShape] {
        &self.rotations
    }

    /// Handle on the first orientation.
    pub fn seed(&self) -> Piece<'_> {
        Piece {
            cycle: self,
            index: 0,
        }
    }

    /// Handle on orientation `index`, if the cycle has one.
    pub fn piece(&self, index: usize) -> Option<Piece<'_>> {
        (index < self.len()).then_some(Piece { cycle: self, index })
    }
}

/// One rotation state of a piece, linked to its neighbours in the cycle
///
/// `Piece` is `Copy`; equality is identity (same cycle, same index), which is
/// what makes "four turns return the seed" a checkable statement. Use
/// [`same_shape`](Piece::same_shape) to compare bodies instead.
#[derive(Clone, Copy)]
pub struct Piece<'a> {
    cycle: &'a RotationCycle,
    index: usize,
}

impl<'a> Piece<'a> {
    pub fn shape(&self) -> &'a PieceShape {
        &self.cycle.rotations[self.index]
    }

    pub fn width(&self) -> usize {
        self.shape().width()
    }

    pub fn height(&self) -> usize {
        self.shape().height()
    }

    pub fn body(&self) -> &'a [Cell] {
        self.shape().body()
    }

    pub fn skirt(&self) -> &'a [u8] {
        self.shape().skirt()
    }

    /// The piece turned 90° counter-clockwise. O(1).
    pub fn next_rotation(&self) -> Piece<'a> {
        Piece {
            cycle: self.cycle,
            index: (self.index + 1) % self.cycle.len(),
        }
    }

    /// Standard kind, `None` for custom shapes.
    pub fn kind(&self) -> Option<PieceKind> {
        self.cycle.kind
    }

    pub fn cycle_len(&self) -> usize {
        self.cycle.len()
    }

    /// Position of this state within its cycle; the seed is 0.
    pub fn rotation_index(&self) -> usize {
        self.index
    }

    pub fn same_shape(&self, other: &Piece<'_>) -> bool {
        self.shape().same_shape(other.shape())
    }

    /// True when both handles name the same state of the same cycle.
    pub fn ptr_eq(&self, other: &Piece<'_>) -> bool {
        std::ptr::eq(self.cycle, other.cycle) && self.index == other.index
    }

    /// Every state of the cycle once, starting here.
    pub fn rotations(&self) -> Rotations<'a> {
        Rotations {
            current: *self,
            remaining: self.cycle.len(),
        }
    }
}

impl PartialEq for Piece<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Piece<'_> {}

impl fmt::Debug for Piece<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Piece")
            .field("kind", &self.cycle.kind)
            .field("index", &self.index)
            .field("cycle_len", &self.cycle.len())
            .field("body", &self.body())
            .finish()
    }
}

/// Iterator over one lap of a rotation cycle
#[derive(Debug, Clone)]
pub struct Rotations<'a> {
    current: Piece<'a>,
    remaining: usize,
}

impl<'a> Iterator for Rotations<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let piece = self.current;
        self.current = piece.next_rotation();
        Some(piece)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Rotations<'_> {}

impl FusedIterator for Rotations<'_> {}
