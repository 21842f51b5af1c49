//! Variant configuration - grid size, win threshold, styles and hint per game kind

use crate::style::{TileStyleTable, CLASSIC_STYLES, EXTENDED_STYLES, THEMED_STYLES};
use crate::types::VariantKind;

/// Fixed configuration of a game, resolved once from its [`VariantKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub kind: VariantKind,
    pub rows: usize,
    pub columns: usize,
    /// Reaching this rank for the first time wins the game
    pub win_rank: u8,
    pub hint: &'static str,
    pub styles: &'static TileStyleTable,
}

impl Variant {
    pub fn of(kind: VariantKind) -> Self {
        match kind {
            VariantKind::Classic => Self {
                kind,
                rows: 4,
                columns: 4,
                win_rank: 11,
                hint: "Try to reach 2048!",
                styles: &CLASSIC_STYLES,
            },
            VariantKind::Themed => Self {
                kind,
                rows: 4,
                columns: 4,
                win_rank: 11,
                hint: "Try to reach Tianchao!",
                styles: &THEMED_STYLES,
            },
            VariantKind::Extended => Self {
                kind,
                rows: 5,
                columns: 5,
                win_rank: 14,
                hint: "Try to reach 16384!",
                styles: &EXTENDED_STYLES,
            },
        }
    }

    /// Highest rank a cell may hold (and the bound enforced on restore).
    pub fn max_rank(&self) -> u8 {
        self.styles.max_rank()
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl From<VariantKind> for Variant {
    fn from(kind: VariantKind) -> Self {
        Variant::of(kind)
    }
}
