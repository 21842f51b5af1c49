use crate::types::{VariantKind, MAX_SIDE};

/// What the last successful move did, for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveReport {
    pub merges: u32,
    pub gained: u64,
    /// (row, col, rank) of the tile spawned after the move
    pub spawned: Option<(usize, usize, u8)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub kind: VariantKind,
    pub rows: usize,
    pub columns: usize,
    /// Ranks; only `[..rows][..columns]` is meaningful
    pub cells: [[u8; MAX_SIDE]; MAX_SIDE],
    pub score: u64,
    /// Best score for this variant, filled in by the session
    pub best: u64,
    pub has_won: bool,
    pub game_over: bool,
    pub last_move: Option<MoveReport>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.kind = VariantKind::Classic;
        self.rows = 4;
        self.columns = 4;
        self.cells = [[0u8; MAX_SIDE]; MAX_SIDE];
        self.score = 0;
        self.best = 0;
        self.has_won = false;
        self.game_over = false;
        self.last_move = None;
    }

    pub fn tile(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows || col >= self.columns {
            return 0;
        }
        self.cells[row][col]
    }

    /// Live rows of the grid, trimmed to the variant's size
    pub fn board_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells[..self.rows]
            .iter()
            .map(move |row| &row[..self.columns])
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            kind: VariantKind::Classic,
            rows: 4,
            columns: 4,
            cells: [[0u8; MAX_SIDE]; MAX_SIDE],
            score: 0,
            best: 0,
            has_won: false,
            game_over: false,
            last_move: None,
        };
        s.clear();
        s
    }
}
