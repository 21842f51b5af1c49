//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole rule set of the tile-merging game: the grid model,
//! the four directional slide/merge moves, tile spawning, win and loss detection, and
//! the binary save format. It has no dependency on terminals or input handling.
//!
//! - **Deterministic**: every random choice goes through an injectable [`SpawnSource`]
//! - **Testable**: grids can be built from explicit rows with [`GameState::from_rows`]
//! - **Allocation-free moves**: grids and lines are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`style`]: per-variant rank -> label/colors/score tables
//! - [`variant`]: grid size, win rank and hint per variant
//! - [`grid`]: flat rank matrix with line and adjacency queries
//! - [`merge`]: single-line compaction and merge pass
//! - [`rng`]: spawn sources (seeded LCG, `rand` adapter) and the spawn step
//! - [`game_state`]: the engine tying everything together
//! - [`save`]: big-endian save-file codec and its errors
//! - [`snapshot`]: copyable view handed to renderers
//!
//! # Game Rules
//!
//! - A move slides every row (Left/Right) or column (Up/Down) toward its edge.
//! - Equal neighbours merge into one tile of the next rank, nearest-to-edge pairs first;
//!   a merged tile does not merge again in the same move.
//! - Each successful move spawns one tile: a "2" with probability 0.9, a "4" otherwise.
//! - The game is over when the grid is full and no adjacent pair is equal.
//! - Reaching the variant's win rank reports `Won` once; play may continue.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, SimpleRng};
//! use tui_2048_types::{Direction, MoveOutcome, VariantKind};
//!
//! let mut game = GameState::from_rows(
//!     VariantKind::Classic,
//!     &[[1u8, 1, 2, 0], [0; 4], [0; 4], [0; 4]],
//!     0,
//!     false,
//!     SimpleRng::new(12345),
//! )
//! .unwrap();
//!
//! assert_eq!(game.apply_move(Direction::Left), MoveOutcome::Normal);
//! assert_eq!(&game.grid().row(0)[..2], &[2, 2]);
//! assert_eq!(game.score(), 4);
//!
//! // Save blobs round-trip
//! let restored = GameState::restore(&game.to_bytes(), SimpleRng::new(1)).unwrap();
//! assert_eq!(restored.grid(), game.grid());
//! ```

pub mod game_state;
pub mod grid;
pub mod merge;
pub mod rng;
pub mod save;
pub mod snapshot;
pub mod style;
pub mod variant;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use merge::{slide_line, LineOutcome};
pub use rng::{spawn_tile, RandSource, SimpleRng, SpawnSource};
pub use save::{CorruptSaveError, DecodedSave, LoadError};
pub use snapshot::{GameSnapshot, MoveReport};
pub use style::{TileStyle, TileStyleTable};
pub use variant::Variant;
