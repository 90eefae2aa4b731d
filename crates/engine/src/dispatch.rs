use tracing::debug;

use crate::core::{reset_game, score_point, start_match, MatchState};
use crate::types::MatchIntent;

/// Route an intent onto the matching scoring operation.
pub fn dispatch(state: &MatchState, intent: MatchIntent) -> MatchState {
    match intent {
        MatchIntent::PointScored(player) => score_point(state, player),
        MatchIntent::NewGame => {
            debug!(set = state.current_set, "restarting current game");
            reset_game(state)
        }
        MatchIntent::NewMatch => {
            debug!("starting new match");
            start_match()
        }
    }
}
