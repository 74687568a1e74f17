//! Piece set module - the table of pieces a game draws from
//!
//! A [`PieceSet`] owns one [`RotationCycle`] per piece and hands out seed
//! [`Piece`] handles. [`PieceSet::standard`] builds the seven tetrominoes in
//! reference order (I, J, L, S, Z, O, T); [`PieceSet::shared`] keeps a single
//! standard set for the whole process, built on first use.
//!
//! Handles borrow from the set, so two calls to [`PieceSet::pieces`] yield
//! handles that compare equal by identity.

use std::sync::OnceLock;

use crate::error::PieceError;
use crate::rotation::{Piece, RotationCycle};
use crate::shape::PieceShape;
use crate::types::{PieceKind, STANDARD_PIECE_COUNT};

/// Rotation cycles for a fixed list of pieces
#[derive(Debug, Clone)]
pub struct PieceSet {
    cycles: Vec<RotationCycle>,
}

impl PieceSet {
    /// Build the seven standard tetrominoes.
    ///
    /// # Panics
    ///
    /// If the built-in shape table is malformed. That is a defect in this
    /// crate, so it fails at startup instead of surfacing as an error.
    pub fn standard() -> Self {
        let entries = PieceKind::ALL.map(|kind| (Some(kind), kind.literal()));
        match Self::from_literals(entries) {
            Ok(set) => set,
            Err(err) => panic!("standard piece table is malformed: {}", err),
        }
    }

    /// The process-wide standard set, built once on first call.
    pub fn shared() -> &'static PieceSet {
        static SHARED: OnceLock<PieceSet> = OnceLock::new();
        SHARED.get_or_init(PieceSet::standard)
    }

    /// Build a set from shape literals, one cycle per entry, keeping order.
    pub fn from_literals<'s, I>(entries: I) -> Result<Self, PieceError>
    where
        I: IntoIterator<Item = (Option<PieceKind>, &'s str)>,
    {
        let cycles = entries
            .into_iter()
            .map(|(kind, literal)| {
                let seed = PieceShape::from_literal(literal)?;
                RotationCycle::build_tagged(kind, seed)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cycles })
    }

    /// Build a set from already constructed seed shapes.
    pub fn from_shapes<I>(seeds: I) -> Result<Self, PieceError>
    where
        I: IntoIterator<Item = PieceShape>,
    {
        let cycles = seeds
            .into_iter()
            .map(RotationCycle::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cycles })
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Seed handle of every piece, in table order.
    pub fn pieces(&self) -> Vec<Piece<'_>> {
        self.cycles.iter().map(RotationCycle::seed).collect()
    }

    pub fn cycles(&self) -> &[RotationCycle] {
        &self.cycles
    }

    /// Seed handle of the piece tagged `kind`.
    pub fn get(&self, kind: PieceKind) -> Option<Piece<'_>> {
        self.cycles
            .iter()
            .find(|cycle| cycle.kind() == Some(kind))
            .map(RotationCycle::seed)
    }
}

/// First rotation of each standard tetromino, from the shared set.
pub fn standard_pieces() -> [Piece<'static>; STANDARD_PIECE_COUNT] {
    let cycles = PieceSet::shared().cycles();
    std::array::from_fn(|i| cycles[i].seed())
}
