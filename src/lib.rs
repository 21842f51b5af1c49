//! Terminal 2048 (workspace facade crate).
//!
//! The rules engine, input mapping and renderer live in dedicated crates under `crates/`
//! and are re-exported here as `tui_2048::{core, input, term, types}`. This package adds
//! the pieces that glue them into a program: configuration, the interactive session,
//! the high-score ledger and the headless JSON-lines driver.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod config;
pub mod headless;
pub mod highscore;
pub mod session;
