//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless automation).
//!
//! # Variants
//!
//! Three fixed game configurations, selected at construction:
//!
//! | Variant | Tag | Grid | Win rank | Win tile |
//! |---------|-----|------|----------|----------|
//! | `Classic` | 0 | 4x4 | 11 | 2048 |
//! | `Themed` | 1 | 4x4 | 11 | Tianchao |
//! | `Extended` | 2 | 5x5 | 14 | 16384 |
//!
//! # Ranks
//!
//! Cells hold an exponent rank rather than the displayed number: rank `r` is shown
//! as `2^r`, rank 0 is an empty cell.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, MoveOutcome, VariantKind, MAX_SIDE};
//!
//! // Parse a direction (case-insensitive)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//!
//! // Save-file tags round-trip, unknown tags fall back to Classic
//! assert_eq!(VariantKind::from_tag(2), VariantKind::Extended);
//! assert_eq!(VariantKind::from_tag(42), VariantKind::Classic);
//!
//! assert!(!MoveOutcome::NoMovement.is_moved());
//! assert_eq!(MAX_SIDE, 5);
//! ```

/// Largest grid side across all variants (5x5 extended grid)
pub const MAX_SIDE: usize = 5;

/// Largest cell count across all variants
pub const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;

/// Number of shipped variants (one high-score slot each)
pub const VARIANT_COUNT: usize = 3;

/// Probability that a spawned tile is rank 2 (a "4") instead of rank 1
pub const FOUR_PROBABILITY: f64 = 0.1;

/// File extension used for saved games
pub const SAVE_EXTENSION: &str = "2048";

/// Direction of a move; every tile slides toward that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters:
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for moves that process rows (Left/Right) rather than columns.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Result of a single move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// No line changed; nothing spawned, state untouched
    NoMovement,
    /// Tiles moved and a tile spawned
    Normal,
    /// Tiles moved, a tile spawned, and no further move is possible
    GameOver,
    /// Tiles moved and the win rank was reached for the first time
    Won,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        !matches!(self, MoveOutcome::NoMovement)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::NoMovement => "noMovement",
            MoveOutcome::Normal => "normal",
            MoveOutcome::GameOver => "gameOver",
            MoveOutcome::Won => "won",
        }
    }
}

/// The three fixed game configurations.
///
/// The discriminant is the tag written at offset 0 of a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariantKind {
    #[default]
    Classic = 0,
    Themed = 1,
    Extended = 2,
}

impl VariantKind {
    pub const ALL: [VariantKind; VARIANT_COUNT] = [
        VariantKind::Classic,
        VariantKind::Themed,
        VariantKind::Extended,
    ];

    /// Save-file tag
    pub fn tag(&self) -> i32 {
        *self as i32
    }

    /// Resolve a save-file tag. Unknown tags size the game as Classic.
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            1 => VariantKind::Themed,
            2 => VariantKind::Extended,
            _ => VariantKind::Classic,
        }
    }

    /// Slot index in the high-score ledger
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse variant from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::VariantKind;
    ///
    /// assert_eq!(VariantKind::from_str("themed"), Some(VariantKind::Themed));
    /// assert_eq!(VariantKind::from_str("5x5"), Some(VariantKind::Extended));
    /// assert_eq!(VariantKind::from_str("1"), Some(VariantKind::Classic));
    /// assert_eq!(VariantKind::from_str("hex"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "default" | "1" => Some(VariantKind::Classic),
            "themed" | "dynasty" | "2" => Some(VariantKind::Themed),
            "extended" | "5x5" | "3" => Some(VariantKind::Extended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Classic => "classic",
            VariantKind::Themed => "themed",
            VariantKind::Extended => "extended",
        }
    }

    /// Human-readable name for menus
    pub fn title(&self) -> &'static str {
        match self {
            VariantKind::Classic => "Classic",
            VariantKind::Themed => "Dynasties",
            VariantKind::Extended => "5x5",
        }
    }
}

/// Actions the presentation layer can request.
///
/// Terminal input maps keys to these; the session interprets them depending on the
/// current screen and prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide tiles toward an edge
    Move(Direction),
    /// Save the current game to the configured path
    Save,
    /// Start a fresh game of the current variant
    NewGame,
    /// Keep playing after a win
    Continue,
    /// Answer "yes" to a prompt
    Confirm,
    /// Answer "no" to a prompt
    Decline,
    /// Dismiss a prompt / leave the current screen
    Back,
    /// Pick a variant from the menu
    SelectVariant(VariantKind),
    /// Restore the default save file from the menu
    LoadDefault,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_tags_match_save_format() {
        assert_eq!(VariantKind::Classic.tag(), 0);
        assert_eq!(VariantKind::Themed.tag(), 1);
        assert_eq!(VariantKind::Extended.tag(), 2);
        for kind in VariantKind::ALL {
            assert_eq!(VariantKind::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn unknown_variant_tag_falls_back_to_classic() {
        assert_eq!(VariantKind::from_tag(-1), VariantKind::Classic);
        assert_eq!(VariantKind::from_tag(3), VariantKind::Classic);
        assert_eq!(VariantKind::from_tag(i32::MAX), VariantKind::Classic);
    }

    #[test]
    fn direction_names_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
    }

    #[test]
    fn rgb_hex_unpacks_channels() {
        assert_eq!(Rgb::hex(0xffd700), Rgb::new(0xff, 0xd7, 0x00));
        assert_eq!(Rgb::hex(0x000000), Rgb::BLACK);
    }

    #[test]
    fn only_no_movement_is_unmoved() {
        assert!(!MoveOutcome::NoMovement.is_moved());
        assert!(MoveOutcome::Normal.is_moved());
        assert!(MoveOutcome::GameOver.is_moved());
        assert!(MoveOutcome::Won.is_moved());
    }
}
