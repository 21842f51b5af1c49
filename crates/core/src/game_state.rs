//! Game state module - the grid engine
//!
//! Ties together the grid, the line merge, the spawn source and the save codec.
//! A `GameState` is created fresh or restored from a save blob and afterwards only
//! changes through [`GameState::apply_move`].

use std::fs;
use std::io;
use std::path::Path;

use crate::grid::Grid;
use crate::merge::slide_line;
use crate::rng::{spawn_tile, SimpleRng, SpawnSource};
use crate::save::{self, CorruptSaveError, LoadError};
use crate::snapshot::{GameSnapshot, MoveReport};
use crate::style::TileStyleTable;
use crate::types::*;
use crate::variant::Variant;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    variant: Variant,
    grid: Grid,
    score: u64,
    has_won: bool,
    last_move: Option<MoveReport>,
    source: S,
}

impl<S: SpawnSource> GameState<S> {
    /// Start a fresh game: empty grid, zero score, two spawned tiles.
    pub fn new(kind: VariantKind, source: S) -> Self {
        let variant = Variant::of(kind);
        let mut state = Self {
            variant,
            grid: Grid::new(variant.rows, variant.columns),
            score: 0,
            has_won: false,
            last_move: None,
            source,
        };
        state.spawn();
        state.spawn();
        tracing::debug!(variant = kind.as_str(), "new game");
        state
    }

    /// Restore a game from a save blob.
    ///
    /// Fails without building any state if the blob is malformed.
    pub fn restore(bytes: &[u8], source: S) -> Result<Self, CorruptSaveError> {
        let decoded = save::decode(bytes)?;
        if decoded.kind.tag() != decoded.raw_tag {
            tracing::warn!(tag = decoded.raw_tag, "unknown variant tag, restoring as classic");
        }
        Ok(Self {
            variant: Variant::of(decoded.kind),
            grid: decoded.grid,
            score: decoded.score,
            has_won: decoded.has_won,
            last_move: None,
            source,
        })
    }

    /// Build a state from explicit rows under the same checks as [`GameState::restore`].
    ///
    /// No tiles are spawned.
    pub fn from_rows<R: AsRef<[u8]>>(
        kind: VariantKind,
        rows: &[R],
        score: u64,
        has_won: bool,
        source: S,
    ) -> Result<Self, CorruptSaveError> {
        let variant = Variant::of(kind);
        let columns = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let shape_ok = rows.len() == variant.rows
            && rows.iter().all(|r| r.as_ref().len() == variant.columns);
        if !shape_ok {
            return Err(CorruptSaveError::Shape {
                rows: rows.len(),
                columns,
                expected_rows: variant.rows,
                expected_columns: variant.columns,
            });
        }

        let mut grid = Grid::new(variant.rows, variant.columns);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.as_ref().iter().enumerate() {
                let rank = save::check_cell(row, col, value as i64, variant.max_rank())?;
                grid.set(row, col, rank);
            }
        }

        Ok(Self {
            variant,
            grid,
            score,
            has_won,
            last_move: None,
            source,
        })
    }

    /// Read and restore a save file.
    pub fn load(path: impl AsRef<Path>, source: S) -> Result<Self, LoadError> {
        let bytes = fs::read(path.as_ref())?;
        let state = Self::restore(&bytes, source)?;
        tracing::info!(path = %path.as_ref().display(), score = state.score, "game restored");
        Ok(state)
    }

    /// Slide every line toward `dir`, then spawn and evaluate the terminal state.
    ///
    /// Returns [`MoveOutcome::NoMovement`] and leaves everything untouched if no line
    /// changed. `Won` is reported only once per game.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        let mut report = MoveReport::default();
        let mut moved = false;
        let styles = self.variant.styles;

        for line in 0..self.grid.line_count(dir) {
            let indices = self.grid.line_indices(dir, line);
            let mut values = [0u8; MAX_SIDE];
            let cells = self.grid.cells_mut();
            for (slot, &idx) in values.iter_mut().zip(indices.iter()) {
                *slot = cells[idx];
            }

            let outcome = slide_line(&mut values[..indices.len()], styles);
            if !outcome.moved {
                continue;
            }
            moved = true;
            report.merges += outcome.merges;
            report.gained += outcome.gained;
            for (&value, &idx) in values.iter().zip(indices.iter()) {
                cells[idx] = value;
            }
        }

        if !moved {
            return MoveOutcome::NoMovement;
        }

        self.score += report.gained;
        report.spawned = self.spawn();
        self.last_move = Some(report);

        if self.is_game_over() {
            tracing::debug!(score = self.score, "game over");
            return MoveOutcome::GameOver;
        }
        if !self.has_won && self.grid.find(self.variant.win_rank).is_some() {
            self.has_won = true;
            tracing::info!(score = self.score, "win rank reached");
            return MoveOutcome::Won;
        }
        MoveOutcome::Normal
    }

    fn spawn(&mut self) -> Option<(usize, usize, u8)> {
        let spawned = spawn_tile(&mut self.grid, &mut self.source);
        if spawned.is_none() {
            tracing::warn!("spawn requested on a full grid");
        }
        spawned
    }
}

impl<S> GameState<S> {
    /// True if the grid is full and no two adjacent cells hold equal ranks.
    pub fn is_game_over(&self) -> bool {
        self.grid.is_full() && !self.grid.has_adjacent_pair()
    }

    /// Serialize to the save-file layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        save::encode(self.variant.kind, &self.grid, self.score, self.has_won)
    }

    /// Write the save file. The in-memory game is unaffected by a failure.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path.as_ref(), self.to_bytes())?;
        tracing::info!(path = %path.as_ref().display(), score = self.score, "game saved");
        Ok(())
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn kind(&self) -> VariantKind {
        self.variant.kind
    }

    pub fn rows(&self) -> usize {
        self.variant.rows
    }

    pub fn columns(&self) -> usize {
        self.variant.columns
    }

    pub fn hint(&self) -> &'static str {
        self.variant.hint
    }

    pub fn styles(&self) -> &'static TileStyleTable {
        self.variant.styles
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Rank at (row, col); 0 for empty or out-of-range cells
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.grid.get(row, col).unwrap_or(0)
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn last_move(&self) -> Option<MoveReport> {
        self.last_move
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, leaving `best` as the caller set it.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.kind = self.variant.kind;
        snap.rows = self.variant.rows;
        snap.columns = self.variant.columns;
        snap.cells = [[0u8; MAX_SIDE]; MAX_SIDE];
        for row in 0..self.variant.rows {
            snap.cells[row][..self.variant.columns].copy_from_slice(self.grid.row(row));
        }
        snap.score = self.score;
        snap.has_won = self.has_won;
        snap.game_over = self.is_game_over();
        snap.last_move = self.last_move;
    }
}
