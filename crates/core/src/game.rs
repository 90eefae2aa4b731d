//! Game module - scoring inside a single game
//!
//! A game is either a regular advantage-scored game (love/15/30/40, deuce,
//! advantage) or a tiebreak played at 6-6 in a set. [`next_game`] is the
//! whole state machine; it is total and has no side effects beyond tracing.

use tracing::trace;

use crate::types::{Player, PointValue, TIEBREAK_POINTS_TO_WIN, WIN_MARGIN};

/// State of the game currently being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Pre-deuce scoring. Never holds Forty for both players.
    Normal {
        player1: PointValue,
        player2: PointValue,
    },
    Deuce,
    /// One player is a point away from taking the game.
    Advantage(Player),
    /// First to 7 points with a 2-point lead.
    Tiebreak { player1: u32, player2: u32 },
    /// Terminal. Carries the winner of this game.
    GameOver(Player),
}

impl GameState {
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::GameOver(_))
    }

    pub fn is_tiebreak(&self) -> bool {
        matches!(self, GameState::Tiebreak { .. })
    }

    /// Winner of a finished game
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::GameOver(player) => Some(*player),
            _ => None,
        }
    }

    /// Variant name, matching the `kind` tag used on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            GameState::Normal { .. } => "Normal",
            GameState::Deuce => "Deuce",
            GameState::Advantage(_) => "Advantage",
            GameState::Tiebreak { .. } => "Tiebreak",
            GameState::GameOver(_) => "GameOver",
        }
    }
}

/// Fresh regular game at love-all
pub fn start_game() -> GameState {
    GameState::Normal {
        player1: PointValue::Love,
        player2: PointValue::Love,
    }
}

/// Fresh tiebreak at 0-0
pub fn start_tiebreak() -> GameState {
    GameState::Tiebreak {
        player1: 0,
        player2: 0,
    }
}

/// Advance a game by one point won by `winner`.
///
/// `GameOver` is absorbing: it is returned unchanged.
///
/// # Panics
///
/// Panics on `Normal { Forty, Forty }`. That pair is always represented as
/// `Deuce`, so seeing it means an upstream invariant is broken.
pub fn next_game(game: GameState, winner: Player) -> GameState {
    let next = match game {
        GameState::Normal { player1, player2 } => next_normal(player1, player2, winner),
        GameState::Deuce => GameState::Advantage(winner),
        GameState::Advantage(leader) if leader == winner => GameState::GameOver(winner),
        GameState::Advantage(_) => GameState::Deuce,
        GameState::Tiebreak { player1, player2 } => next_tiebreak(player1, player2, winner),
        GameState::GameOver(_) => game,
    };
    trace!(point = winner.as_str(), from = ?game, to = ?next, "game transition");
    next
}

fn next_normal(player1: PointValue, player2: PointValue, winner: Player) -> GameState {
    assert!(
        !(player1 == PointValue::Forty && player2 == PointValue::Forty),
        "normal game at 40-40 should have been deuce"
    );

    let (won, lost) = match winner {
        Player::Player1 => (player1, player2),
        Player::Player2 => (player2, player1),
    };

    // The opponent cannot also be at Forty here (asserted above).
    if won == PointValue::Forty {
        return GameState::GameOver(winner);
    }

    let won = won.next();
    if won == PointValue::Forty && lost == PointValue::Forty {
        return GameState::Deuce;
    }

    match winner {
        Player::Player1 => GameState::Normal {
            player1: won,
            player2: lost,
        },
        Player::Player2 => GameState::Normal {
            player1: lost,
            player2: won,
        },
    }
}

fn next_tiebreak(mut player1: u32, mut player2: u32, winner: Player) -> GameState {
    match winner {
        Player::Player1 => player1 = player1.saturating_add(1),
        Player::Player2 => player2 = player2.saturating_add(1),
    }

    let leader_points = player1.max(player2);
    if leader_points >= TIEBREAK_POINTS_TO_WIN && player1.abs_diff(player2) >= WIN_MARGIN {
        let leader = if player1 > player2 {
            Player::Player1
        } else {
            Player::Player2
        };
        return GameState::GameOver(leader);
    }

    GameState::Tiebreak { player1, player2 }
}
