//! Match state module - the full snapshot and the per-point entry point
//!
//! A [`MatchState`] is a plain `Copy` value. Every operation takes the
//! previous snapshot and returns a new one; nothing is mutated in place and
//! nothing is retained between calls.

use tracing::trace;

use crate::game::{next_game, start_game, start_tiebreak, GameState};
use crate::set::{apply_game_result, needs_tiebreak, set_winner, ScorePair};
use crate::types::{Player, SETS_PER_MATCH};

/// Complete scoring snapshot of a best-of-three match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchState {
    /// Games per set, indexed by set; unplayed sets stay 0-0.
    pub sets: [ScorePair; SETS_PER_MATCH],
    /// Final tiebreak points for sets that went to one.
    pub tiebreaks: [Option<ScorePair>; SETS_PER_MATCH],
    pub current_game: GameState,
    /// 1-based set being played (1..=3).
    pub current_set: u8,
    /// Set once and never changed; the match is frozen from then on.
    pub match_winner: Option<Player>,
}

impl MatchState {
    /// Zero-based index of `current_set`
    pub fn set_index(&self) -> usize {
        (self.current_set as usize).saturating_sub(1)
    }

    pub fn is_over(&self) -> bool {
        self.match_winner.is_some()
    }

    pub fn current_set_score(&self) -> ScorePair {
        self.sets[self.set_index()]
    }

    /// Winner of each set slot under the set-winner rule
    pub fn set_winners(&self) -> [Option<Player>; SETS_PER_MATCH] {
        self.sets.map(set_winner)
    }

    pub fn sets_won(&self, player: Player) -> usize {
        self.set_winners()
            .iter()
            .filter(|&&winner| winner == Some(player))
            .count()
    }
}

impl Default for MatchState {
    fn default() -> Self {
        start_match()
    }
}

/// Fresh match: all sets 0-0, set 1, love-all
pub fn start_match() -> MatchState {
    MatchState {
        sets: [ScorePair::ZERO; SETS_PER_MATCH],
        tiebreaks: [None; SETS_PER_MATCH],
        current_game: start_game(),
        current_set: 1,
        match_winner: None,
    }
}

/// Record a point won by `winner`.
///
/// Once the match has a winner this is a no-op returning the same snapshot.
pub fn score_point(state: &MatchState, winner: Player) -> MatchState {
    if state.is_over() {
        trace!(point = winner.as_str(), "match already decided, point ignored");
        return *state;
    }

    match next_game(state.current_game, winner) {
        GameState::GameOver(game_winner) => apply_game_result(state, game_winner),
        game => MatchState {
            current_game: game,
            ..*state
        },
    }
}

/// Restart the current game without touching set or match scores.
///
/// At 6-6 the restarted game is a fresh tiebreak. No-op once the match is
/// decided.
pub fn reset_game(state: &MatchState) -> MatchState {
    if state.is_over() {
        return *state;
    }

    let current_game = if needs_tiebreak(state.current_set_score()) {
        start_tiebreak()
    } else {
        start_game()
    };
    MatchState {
        current_game,
        ..*state
    }
}
