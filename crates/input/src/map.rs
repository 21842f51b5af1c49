//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, VariantKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Save),
            _ => None,
        };
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(GameAction::Move(Direction::Right))
        }

        // Session
        KeyCode::Char('S') => Some(GameAction::Save),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::NewGame),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::Continue),

        // Prompts
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Some(GameAction::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::Decline),
        KeyCode::Esc => Some(GameAction::Back),

        // Menu
        KeyCode::Char('1') => Some(GameAction::SelectVariant(VariantKind::Classic)),
        KeyCode::Char('2') => Some(GameAction::SelectVariant(VariantKind::Themed)),
        KeyCode::Char('3') => Some(GameAction::SelectVariant(VariantKind::Extended)),
        KeyCode::Char('L') => Some(GameAction::LoadDefault),

        _ => None,
    }
}

/// Check if key should quit the current screen.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
