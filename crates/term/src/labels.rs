//! Display labels for scores.
//!
//! The engine only knows `PointValue`s and tiebreak counts; the way they are
//! called on court (15, 30, 40, AD) lives here.

use crate::core::{GameState, MatchState};
use crate::types::{Player, PointValue};

/// Called score of the current game for each player, as (Player1, Player2).
pub fn game_labels(game: &GameState) -> (String, String) {
    let forty = || PointValue::Forty.score().to_string();
    match *game {
        GameState::Normal { player1, player2 } => {
            (player1.score().to_string(), player2.score().to_string())
        }
        GameState::Deuce => (forty(), forty()),
        GameState::Advantage(Player::Player1) => ("AD".to_string(), forty()),
        GameState::Advantage(Player::Player2) => (forty(), "AD".to_string()),
        GameState::Tiebreak { player1, player2 } => (player1.to_string(), player2.to_string()),
        GameState::GameOver(_) => (String::new(), String::new()),
    }
}

/// Games won by `player` in set slot `index`, with the loser's tiebreak
/// points in parentheses, e.g. `6(5)`.
///
/// Sets not yet reached render as `-`.
pub fn set_label(state: &MatchState, index: usize, player: Player) -> String {
    if index > state.set_index() {
        return "-".to_string();
    }
    let games = state.sets[index].get(player);
    match state.tiebreaks[index] {
        Some(points) if points.leader() == Some(player.opponent()) => {
            format!("{}({})", games, points.get(player))
        }
        _ => games.to_string(),
    }
}

/// One-line description of where the match stands.
pub fn status_line(state: &MatchState, names: &[String; 2]) -> String {
    let name = |p: Player| names[p.index()].as_str();
    if let Some(winner) = state.match_winner {
        let (own, opp) = (state.sets_won(winner), state.sets_won(winner.opponent()));
        return format!("Game, set and match {} ({}-{})", name(winner), own, opp);
    }

    let set = state.current_set;
    match state.current_game {
        GameState::Deuce => format!("Set {} - Deuce", set),
        GameState::Advantage(p) => format!("Set {} - Advantage {}", set, name(p)),
        GameState::Tiebreak { .. } => format!("Set {} - Tiebreak", set),
        _ => format!("Set {}", set),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{start_match, ScorePair};

    fn names() -> [String; 2] {
        ["Ana".to_string(), "Bo".to_string()]
    }

    #[test]
    fn test_game_labels() {
        let game = GameState::Normal {
            player1: PointValue::Thirty,
            player2: PointValue::Love,
        };
        assert_eq!(game_labels(&game), ("30".to_string(), "0".to_string()));
        assert_eq!(
            game_labels(&GameState::Deuce),
            ("40".to_string(), "40".to_string())
        );
        assert_eq!(
            game_labels(&GameState::Advantage(Player::Player2)),
            ("40".to_string(), "AD".to_string())
        );
        assert_eq!(
            game_labels(&GameState::Tiebreak {
                player1: 5,
                player2: 6
            }),
            ("5".to_string(), "6".to_string())
        );
    }

    #[test]
    fn test_set_label_marks_tiebreak_loser() {
        let mut state = start_match();
        state.sets[0] = ScorePair(7, 6);
        state.tiebreaks[0] = Some(ScorePair(7, 5));
        state.current_set = 2;

        assert_eq!(set_label(&state, 0, Player::Player1), "7");
        assert_eq!(set_label(&state, 0, Player::Player2), "6(5)");
        assert_eq!(set_label(&state, 1, Player::Player2), "0");
        assert_eq!(set_label(&state, 2, Player::Player2), "-");
    }

    #[test]
    fn test_status_line() {
        let mut state = start_match();
        assert_eq!(status_line(&state, &names()), "Set 1");

        state.current_game = GameState::Advantage(Player::Player2);
        assert_eq!(status_line(&state, &names()), "Set 1 - Advantage Bo");

        state.sets = [ScorePair(6, 1), ScorePair(6, 2), ScorePair::ZERO];
        state.current_set = 2;
        state.match_winner = Some(Player::Player1);
        assert_eq!(
            status_line(&state, &names()),
            "Game, set and match Ana (2-0)"
        );
    }
}
