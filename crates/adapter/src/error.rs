use thiserror::Error;

use crate::types::Player;

/// Why an inbound event or snapshot was refused at the boundary.
///
/// Nothing past the boundary ever produces these: states built by the
/// scoring engine satisfy every check by construction.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("event has no kind")]
    MissingKind,

    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),

    #[error("currentSet {0} is outside 1..=3")]
    CurrentSetOutOfRange(u32),

    #[error("normal game at FORTY-FORTY must be recorded as Deuce")]
    FortyAllNotDeuce,

    #[error("tiebreak at {player1}-{player2} is already finished")]
    FinishedTiebreak { player1: u32, player2: u32 },

    #[error("tiebreak points {player1}-{player2} are out of range")]
    TiebreakPointsOutOfRange { player1: u32, player2: u32 },

    #[error("match was decided in set {decided_in} but currentSet is {current}")]
    MatchDecidedInEarlierSet { decided_in: usize, current: usize },

    #[error("set {set} score {player1}-{player2} cannot occur")]
    ImpossibleSetScore { set: usize, player1: u32, player2: u32 },

    #[error("set {set} is before currentSet but undecided")]
    UndecidedEarlierSet { set: usize },

    #[error("set {set} is after currentSet but has games or a tiebreak")]
    PlayAfterCurrentSet { set: usize },

    #[error("set {set} is already decided but still current")]
    CurrentSetAlreadyDecided { set: usize },

    #[error("set {set} tiebreak record does not match its game score")]
    TiebreakMismatch { set: usize },

    #[error("set {set}: tiebreak game must be played at 6-6 and only then")]
    TiebreakOutOfPlace { set: usize },

    #[error("matchWinner {recorded:?} disagrees with set scores ({computed:?})")]
    MatchWinnerMismatch {
        recorded: Option<Player>,
        computed: Option<Player>,
    },

    #[error("finished game {game_winner:?} inconsistent with matchWinner {match_winner:?}")]
    GameOverMismatch {
        game_winner: Player,
        match_winner: Option<Player>,
    },
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Json(_) => "malformed",
            ValidationError::MissingKind | ValidationError::UnknownEventKind(_) => "unknown_event",
            ValidationError::CurrentSetOutOfRange(_)
            | ValidationError::TiebreakPointsOutOfRange { .. } => "out_of_range",
            ValidationError::FortyAllNotDeuce
            | ValidationError::FinishedTiebreak { .. }
            | ValidationError::GameOverMismatch { .. } => "invalid_game",
            ValidationError::ImpossibleSetScore { .. }
            | ValidationError::UndecidedEarlierSet { .. }
            | ValidationError::PlayAfterCurrentSet { .. }
            | ValidationError::CurrentSetAlreadyDecided { .. }
            | ValidationError::MatchDecidedInEarlierSet { .. }
            | ValidationError::TiebreakMismatch { .. }
            | ValidationError::TiebreakOutOfPlace { .. } => "invalid_sets",
            ValidationError::MatchWinnerMismatch { .. } => "invalid_winner",
        }
    }
}
