//! Key mapping from terminal events to match intents.

use crate::types::{MatchIntent, Player};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to match intents.
pub fn handle_key_event(key: KeyEvent) -> Option<MatchIntent> {
    match key.code {
        // Points
        KeyCode::Left | KeyCode::Char('1') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(MatchIntent::PointScored(Player::Player1))
        }
        KeyCode::Right | KeyCode::Char('2') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(MatchIntent::PointScored(Player::Player2))
        }

        // Resets
        KeyCode::Char('g') | KeyCode::Char('G') => Some(MatchIntent::NewGame),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(MatchIntent::NewMatch),

        _ => None,
    }
}

/// Check if key should quit the scoreboard.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
