//! Terminal rendering for the tile game.
//!
//! Views draw into a plain [`FrameBuffer`]; only [`TerminalRenderer`] touches the
//! terminal. That split keeps every view testable without a tty.

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Hud, Overlay, Viewport};
pub use menu_view::{MenuModel, MenuView};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
