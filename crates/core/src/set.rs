//! Set module - folding finished games into set and match scores
//!
//! Set-winner rule: a player takes a set with 6+ games and a 2-game lead, or
//! 7-6 after a tiebreak. A set at 6-6 always goes to a tiebreak, and a
//! finished tiebreak always decides its set.

use tracing::debug;

use crate::game::{start_game, start_tiebreak, GameState};
use crate::match_state::MatchState;
use crate::types::{
    Player, GAMES_TO_WIN_SET, SETS_PER_MATCH, SETS_TO_WIN_MATCH, WIN_MARGIN,
};

/// Ordered (Player1, Player2) count: games in a set, or points in a tiebreak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScorePair(pub u32, pub u32);

impl ScorePair {
    pub const ZERO: ScorePair = ScorePair(0, 0);

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Player1 => self.0,
            Player::Player2 => self.1,
        }
    }

    /// Copy with one more for `player`
    pub fn incremented(&self, player: Player) -> Self {
        match player {
            Player::Player1 => ScorePair(self.0.saturating_add(1), self.1),
            Player::Player2 => ScorePair(self.0, self.1.saturating_add(1)),
        }
    }

    /// Player strictly ahead, if any
    pub fn leader(&self) -> Option<Player> {
        if self.0 > self.1 {
            Some(Player::Player1)
        } else if self.1 > self.0 {
            Some(Player::Player2)
        } else {
            None
        }
    }
}

/// Apply the set-winner rule to a game count
pub fn set_winner(games: ScorePair) -> Option<Player> {
    Player::ALL.into_iter().find(|&player| {
        let own = games.get(player);
        let opp = games.get(player.opponent());
        (own >= GAMES_TO_WIN_SET && own >= opp.saturating_add(WIN_MARGIN))
            || (own == GAMES_TO_WIN_SET + 1 && opp == GAMES_TO_WIN_SET)
    })
}

/// Whether a set score calls for a tiebreak (6-6)
pub fn needs_tiebreak(games: ScorePair) -> bool {
    games.0 == GAMES_TO_WIN_SET && games.1 == GAMES_TO_WIN_SET
}

/// Player holding at least two set wins across all set slots
pub fn match_winner(sets: &[ScorePair; SETS_PER_MATCH]) -> Option<Player> {
    Player::ALL.into_iter().find(|&player| {
        sets.iter()
            .filter(|&&games| set_winner(games) == Some(player))
            .count()
            >= SETS_TO_WIN_MATCH
    })
}

/// Fold a finished game into the match.
///
/// `state.current_game` must still be the game that just ended (before its
/// final point), which is how a finished tiebreak is told apart from a
/// regular game.
pub fn apply_game_result(state: &MatchState, game_winner: Player) -> MatchState {
    let mut next = *state;
    let set_index = state.set_index();
    let games = state.sets[set_index].incremented(game_winner);
    next.sets[set_index] = games;

    if let GameState::Tiebreak { player1, player2 } = state.current_game {
        let points = ScorePair(player1, player2).incremented(game_winner);
        next.tiebreaks[set_index] = Some(points);
        next.current_game = start_game();
        debug!(
            set = state.current_set,
            winner = game_winner.as_str(),
            points = ?points,
            "tiebreak decided set"
        );
    } else if needs_tiebreak(games) {
        next.current_game = start_tiebreak();
        debug!(set = state.current_set, "six all, tiebreak");
    } else {
        next.current_game = start_game();
    }

    let decided = set_winner(games);
    if let Some(set_won_by) = decided {
        debug!(
            set = state.current_set,
            winner = set_won_by.as_str(),
            games = ?games,
            "set complete"
        );
    }

    next.match_winner = state.match_winner.or_else(|| match_winner(&next.sets));
    if let Some(winner) = next.match_winner {
        next.current_game = GameState::GameOver(winner);
        debug!(winner = winner.as_str(), sets = ?next.sets, "match complete");
    } else if decided.is_some() && (state.current_set as usize) < SETS_PER_MATCH {
        next.current_set += 1;
        next.current_game = start_game();
    }

    next
}
