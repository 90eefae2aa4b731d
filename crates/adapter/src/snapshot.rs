//! Snapshot module - JSON records for a full match state
//!
//! Wire shape:
//!
//! ```text
//! {
//!   "sets": [[6,4],[2,1],[0,0]],
//!   "tiebreaks": [null,null,null],
//!   "currentGame": {"kind":"Normal","player1Point":"THIRTY","player2Point":"LOVE"},
//!   "currentSet": 2,
//!   "matchWinner": null
//! }
//! ```
//!
//! Ingesting a record is a two-step parse: serde checks the shape, then
//! [`MatchRecord::validate`] checks that the scores are ones the engine could
//! have produced. Only then is a typed [`MatchState`] handed out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{match_winner, needs_tiebreak, set_winner, GameState, MatchState, ScorePair};
use crate::error::ValidationError;
use crate::protocol::{PlayerName, PointName};
use crate::types::{
    Player, PointValue, GAMES_TO_WIN_SET, SETS_PER_MATCH, SETS_TO_WIN_MATCH,
    TIEBREAK_POINTS_TO_WIN, WIN_MARGIN,
};

/// Largest tiebreak count a live game may carry; one more point must fit.
const MAX_TIEBREAK_POINTS: u32 = u32::MAX - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", deny_unknown_fields)]
pub enum GameRecord {
    Normal {
        #[serde(rename = "player1Point")]
        player1_point: PointName,
        #[serde(rename = "player2Point")]
        player2_point: PointName,
    },
    Deuce {},
    Advantage {
        #[serde(rename = "playerAtAdvantage")]
        player_at_advantage: PlayerName,
    },
    Tiebreak {
        #[serde(rename = "p1Points")]
        p1_points: u32,
        #[serde(rename = "p2Points")]
        p2_points: u32,
    },
    GameOver {
        #[serde(rename = "gameWinner")]
        game_winner: PlayerName,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchRecord {
    pub sets: [[u32; 2]; SETS_PER_MATCH],
    pub tiebreaks: [Option<[u32; 2]>; SETS_PER_MATCH],
    #[serde(rename = "currentGame")]
    pub current_game: GameRecord,
    #[serde(rename = "currentSet")]
    pub current_set: u32,
    #[serde(rename = "matchWinner", default)]
    pub match_winner: Option<PlayerName>,
}

impl From<GameState> for GameRecord {
    fn from(value: GameState) -> Self {
        match value {
            GameState::Normal { player1, player2 } => GameRecord::Normal {
                player1_point: player1.into(),
                player2_point: player2.into(),
            },
            GameState::Deuce => GameRecord::Deuce {},
            GameState::Advantage(player) => GameRecord::Advantage {
                player_at_advantage: player.into(),
            },
            GameState::Tiebreak { player1, player2 } => GameRecord::Tiebreak {
                p1_points: player1,
                p2_points: player2,
            },
            GameState::GameOver(player) => GameRecord::GameOver {
                game_winner: player.into(),
            },
        }
    }
}

impl From<&MatchState> for MatchRecord {
    fn from(value: &MatchState) -> Self {
        Self {
            sets: value.sets.map(|ScorePair(a, b)| [a, b]),
            tiebreaks: value.tiebreaks.map(|t| t.map(|ScorePair(a, b)| [a, b])),
            current_game: value.current_game.into(),
            current_set: value.current_set as u32,
            match_winner: value.match_winner.map(PlayerName::from),
        }
    }
}

impl GameRecord {
    /// Typed game, rejecting states the engine never builds.
    pub fn validate(&self) -> Result<GameState, ValidationError> {
        let game = match *self {
            GameRecord::Normal {
                player1_point,
                player2_point,
            } => {
                let (player1, player2): (PointValue, PointValue) =
                    (player1_point.into(), player2_point.into());
                if player1 == PointValue::Forty && player2 == PointValue::Forty {
                    return Err(ValidationError::FortyAllNotDeuce);
                }
                GameState::Normal { player1, player2 }
            }
            GameRecord::Deuce {} => GameState::Deuce,
            GameRecord::Advantage {
                player_at_advantage,
            } => GameState::Advantage(player_at_advantage.into()),
            GameRecord::Tiebreak {
                p1_points,
                p2_points,
            } => {
                if p1_points.max(p2_points) > MAX_TIEBREAK_POINTS {
                    return Err(ValidationError::TiebreakPointsOutOfRange {
                        player1: p1_points,
                        player2: p2_points,
                    });
                }
                if p1_points.max(p2_points) >= TIEBREAK_POINTS_TO_WIN
                    && p1_points.abs_diff(p2_points) >= WIN_MARGIN
                {
                    return Err(ValidationError::FinishedTiebreak {
                        player1: p1_points,
                        player2: p2_points,
                    });
                }
                GameState::Tiebreak {
                    player1: p1_points,
                    player2: p2_points,
                }
            }
            GameRecord::GameOver { game_winner } => GameState::GameOver(game_winner.into()),
        };
        Ok(game)
    }
}

impl MatchRecord {
    /// Typed snapshot, or the first reason the record is not one.
    pub fn validate(&self) -> Result<MatchState, ValidationError> {
        if !(1..=SETS_PER_MATCH as u32).contains(&self.current_set) {
            return Err(ValidationError::CurrentSetOutOfRange(self.current_set));
        }
        let current_game = self.current_game.validate()?;

        let sets = self.sets.map(|[a, b]| ScorePair(a, b));
        let tiebreaks = self.tiebreaks.map(|t| t.map(|[a, b]| ScorePair(a, b)));
        let recorded: Option<Player> = self.match_winner.map(Player::from);

        let computed = match_winner(&sets);
        if recorded != computed {
            return Err(ValidationError::MatchWinnerMismatch { recorded, computed });
        }

        let current_index = self.current_set as usize - 1;
        for (index, (&games, tiebreak)) in sets.iter().zip(tiebreaks.iter()).enumerate() {
            let set = index + 1;
            if !is_reachable_set_score(games) {
                return Err(ValidationError::ImpossibleSetScore {
                    set,
                    player1: games.0,
                    player2: games.1,
                });
            }
            if index > current_index && (games != ScorePair::ZERO || tiebreak.is_some()) {
                return Err(ValidationError::PlayAfterCurrentSet { set });
            }
            if index < current_index && set_winner(games).is_none() {
                return Err(ValidationError::UndecidedEarlierSet { set });
            }
            if !tiebreak_matches_set(games, *tiebreak) {
                return Err(ValidationError::TiebreakMismatch { set });
            }
        }

        if recorded.is_some() {
            if let Some(decided) = deciding_set_index(&sets) {
                if decided != current_index {
                    return Err(ValidationError::MatchDecidedInEarlierSet {
                        decided_in: decided + 1,
                        current: self.current_set as usize,
                    });
                }
            }
        }

        let current_games = sets[current_index];
        match (recorded, current_game) {
            (None, GameState::GameOver(game_winner)) => {
                return Err(ValidationError::GameOverMismatch {
                    game_winner,
                    match_winner: None,
                });
            }
            (Some(winner), GameState::GameOver(game_winner)) if game_winner != winner => {
                return Err(ValidationError::GameOverMismatch {
                    game_winner,
                    match_winner: Some(winner),
                });
            }
            (None, game) => {
                if set_winner(current_games).is_some() {
                    return Err(ValidationError::CurrentSetAlreadyDecided {
                        set: self.current_set as usize,
                    });
                }
                if needs_tiebreak(current_games) != game.is_tiebreak() {
                    return Err(ValidationError::TiebreakOutOfPlace {
                        set: self.current_set as usize,
                    });
                }
            }
            (Some(_), _) => {}
        }

        Ok(MatchState {
            sets,
            tiebreaks,
            current_game,
            current_set: self.current_set as u8,
            match_winner: recorded,
        })
    }
}

/// Slot of the set in which one player reached the sets needed for the match.
fn deciding_set_index(sets: &[ScorePair; SETS_PER_MATCH]) -> Option<usize> {
    let mut won = [0usize; 2];
    for (index, &games) in sets.iter().enumerate() {
        if let Some(winner) = set_winner(games) {
            won[winner.index()] += 1;
            if won[winner.index()] >= SETS_TO_WIN_MATCH {
                return Some(index);
            }
        }
    }
    None
}

/// Whether a game count can arise under the set-winner rule.
fn is_reachable_set_score(games: ScorePair) -> bool {
    match set_winner(games) {
        Some(winner) => {
            let (won, lost) = (games.get(winner), games.get(winner.opponent()));
            (won == GAMES_TO_WIN_SET && lost.saturating_add(WIN_MARGIN) <= GAMES_TO_WIN_SET)
                || (won == GAMES_TO_WIN_SET + 1 && lost.saturating_add(1) >= GAMES_TO_WIN_SET)
        }
        None => games.0 <= GAMES_TO_WIN_SET && games.1 <= GAMES_TO_WIN_SET,
    }
}

/// Whether a tiebreak count is one at which the tiebreak has just ended:
/// 7 against at most 5, or a two-point margin once both reached 6.
fn is_final_tiebreak_score(points: ScorePair) -> bool {
    let Some(winner) = points.leader() else {
        return false;
    };
    let (won, lost) = (points.get(winner), points.get(winner.opponent()));
    (won == TIEBREAK_POINTS_TO_WIN && lost + WIN_MARGIN <= TIEBREAK_POINTS_TO_WIN)
        || (lost + 1 >= TIEBREAK_POINTS_TO_WIN && lost.checked_add(WIN_MARGIN) == Some(won))
}

/// A 7-6 set carries the finished tiebreak that decided it; no other set does.
fn tiebreak_matches_set(games: ScorePair, tiebreak: Option<ScorePair>) -> bool {
    let went_to_tiebreak = games.0.min(games.1) == GAMES_TO_WIN_SET
        && games.0.max(games.1) == GAMES_TO_WIN_SET + 1;
    match tiebreak {
        None => !went_to_tiebreak,
        Some(points) => {
            went_to_tiebreak
                && points.leader() == games.leader()
                && is_final_tiebreak_score(points)
        }
    }
}

/// Parse and validate a snapshot
pub fn parse_snapshot(json: &str) -> Result<MatchState, ValidationError> {
    let result = serde_json::from_str::<MatchRecord>(json)
        .map_err(ValidationError::from)
        .and_then(|record| record.validate());
    if let Err(err) = &result {
        debug!(error = %err, code = err.code(), "rejected snapshot");
    }
    result
}

/// Encode a snapshot as a single JSON line
pub fn encode_snapshot(state: &MatchState) -> Result<String, ValidationError> {
    Ok(serde_json::to_string(&MatchRecord::from(state))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{score_point, start_match, start_tiebreak};

    const FRESH: &str = r#"{"sets":[[0,0],[0,0],[0,0]],"tiebreaks":[null,null,null],"currentGame":{"kind":"Normal","player1Point":"LOVE","player2Point":"LOVE"},"currentSet":1,"matchWinner":null}"#;

    #[test]
    fn test_encode_fresh_match_wire_shape() {
        assert_eq!(encode_snapshot(&start_match()).unwrap(), FRESH);
    }

    #[test]
    fn test_parse_fresh_match() {
        assert_eq!(parse_snapshot(FRESH).unwrap(), start_match());
    }

    #[test]
    fn test_match_winner_may_be_omitted() {
        let json = FRESH.replace(r#","matchWinner":null"#, "");
        assert_eq!(parse_snapshot(&json).unwrap(), start_match());
    }

    #[test]
    fn test_round_trip_mid_tiebreak() {
        let mut state = start_match();
        state.sets = [ScorePair(7, 6), ScorePair(6, 6), ScorePair::ZERO];
        state.tiebreaks[0] = Some(ScorePair(9, 7));
        state.current_set = 2;
        state.current_game = start_tiebreak();
        state = score_point(&state, Player::Player2);

        let json = encode_snapshot(&state).unwrap();
        assert_eq!(parse_snapshot(&json).unwrap(), state);
    }

    #[test]
    fn test_shape_errors_are_rejected() {
        let negative = FRESH.replace("[[0,0],", "[[-1,0],");
        assert!(matches!(parse_snapshot(&negative), Err(ValidationError::Json(_))));

        let two_sets = FRESH.replace("[[0,0],[0,0],[0,0]]", "[[0,0],[0,0]]");
        assert!(matches!(parse_snapshot(&two_sets), Err(ValidationError::Json(_))));

        let bad_point = FRESH.replace(r#""LOVE","player2Point""#, r#""ZERO","player2Point""#);
        assert!(matches!(parse_snapshot(&bad_point), Err(ValidationError::Json(_))));

        let extra = FRESH.replace(r#""currentSet":1"#, r#""currentSet":1,"server":"Player1""#);
        assert!(matches!(parse_snapshot(&extra), Err(ValidationError::Json(_))));
    }

    #[test]
    fn test_current_set_out_of_range() {
        let json = FRESH.replace(r#""currentSet":1"#, r#""currentSet":4"#);
        assert!(matches!(
            parse_snapshot(&json),
            Err(ValidationError::CurrentSetOutOfRange(4))
        ));
        let json = FRESH.replace(r#""currentSet":1"#, r#""currentSet":0"#);
        assert!(matches!(
            parse_snapshot(&json),
            Err(ValidationError::CurrentSetOutOfRange(0))
        ));
    }

    #[test]
    fn test_forty_all_normal_is_rejected() {
        let json = FRESH.replace(
            r#""player1Point":"LOVE","player2Point":"LOVE""#,
            r#""player1Point":"FORTY","player2Point":"FORTY""#,
        );
        assert!(matches!(
            parse_snapshot(&json),
            Err(ValidationError::FortyAllNotDeuce)
        ));
    }

    #[test]
    fn test_game_over_needs_match_winner() {
        let json = FRESH.replace(
            r#"{"kind":"Normal","player1Point":"LOVE","player2Point":"LOVE"}"#,
            r#"{"kind":"GameOver","gameWinner":"Player1"}"#,
        );
        assert!(matches!(
            parse_snapshot(&json),
            Err(ValidationError::GameOverMismatch { .. })
        ));
    }

    #[test]
    fn test_inconsistent_sets_are_rejected() {
        let mut record = MatchRecord::from(&start_match());
        record.sets[0] = [6, 2];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::CurrentSetAlreadyDecided { set: 1 })
        ));

        let mut record = MatchRecord::from(&start_match());
        record.sets[1] = [1, 0];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::PlayAfterCurrentSet { set: 2 })
        ));

        let mut record = MatchRecord::from(&start_match());
        record.sets[0] = [9, 1];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::ImpossibleSetScore { set: 1, .. })
        ));

        let mut record = MatchRecord::from(&start_match());
        record.current_set = 2;
        record.sets[0] = [4, 3];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::UndecidedEarlierSet { set: 1 })
        ));
    }

    #[test]
    fn test_tiebreak_placement_is_checked() {
        let mut record = MatchRecord::from(&start_match());
        record.current_game = GameRecord::Tiebreak {
            p1_points: 0,
            p2_points: 0,
        };
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TiebreakOutOfPlace { set: 1 })
        ));

        let mut record = MatchRecord::from(&start_match());
        record.sets[0] = [6, 6];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TiebreakOutOfPlace { set: 1 })
        ));

        let mut record = MatchRecord::from(&start_match());
        record.current_set = 2;
        record.sets[0] = [7, 6];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TiebreakMismatch { set: 1 })
        ));

        record.tiebreaks[0] = Some([5, 7]);
        assert!(matches!(
            record.validate(),
            Err(ValidationError::TiebreakMismatch { set: 1 })
        ));

        record.tiebreaks[0] = Some([7, 5]);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_finished_tiebreak_game_is_rejected() {
        let record = GameRecord::Tiebreak {
            p1_points: 7,
            p2_points: 4,
        };
        assert!(matches!(
            record.validate(),
            Err(ValidationError::FinishedTiebreak { .. })
        ));
    }

    #[test]
    fn test_match_winner_must_match_sets() {
        let mut record = MatchRecord::from(&start_match());
        record.match_winner = Some(PlayerName::Player2);
        assert!(matches!(
            record.validate(),
            Err(ValidationError::MatchWinnerMismatch {
                recorded: Some(Player::Player2),
                computed: None
            })
        ));

        let mut record = MatchRecord::from(&start_match());
        record.current_set = 2;
        record.sets = [[6, 0], [6, 0], [0, 0]];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::MatchWinnerMismatch {
                recorded: None,
                computed: Some(Player::Player1)
            })
        ));

        record.match_winner = Some(PlayerName::Player1);
        record.current_game = GameRecord::GameOver {
            game_winner: PlayerName::Player1,
        };
        let state = record.validate().unwrap();
        assert!(state.is_over());
    }

    #[test]
    fn test_extra_fields_on_deuce_are_rejected() {
        let json = FRESH.replace(
            r#"{"kind":"Normal","player1Point":"LOVE","player2Point":"LOVE"}"#,
            r#"{"kind":"Deuce","p1Points":3}"#,
        );
        assert!(matches!(parse_snapshot(&json), Err(ValidationError::Json(_))));

        let json = FRESH.replace(
            r#"{"kind":"Normal","player1Point":"LOVE","player2Point":"LOVE"}"#,
            r#"{"kind":"Deuce"}"#,
        );
        assert_eq!(parse_snapshot(&json).unwrap().current_game, GameState::Deuce);
    }

    #[test]
    fn test_tiebreak_points_must_leave_room_for_a_point() {
        let mut record = MatchRecord::from(&start_match());
        record.sets[0] = [6, 6];
        record.current_game = GameRecord::Tiebreak {
            p1_points: u32::MAX,
            p2_points: u32::MAX,
        };
        let err = record.validate().unwrap_err();
        assert!(matches!(err, ValidationError::TiebreakPointsOutOfRange { .. }));
        assert_eq!(err.code(), "out_of_range");

        record.current_game = GameRecord::Tiebreak {
            p1_points: u32::MAX - 1,
            p2_points: u32::MAX - 1,
        };
        let state = record.validate().unwrap();
        let next = score_point(&state, Player::Player1);
        assert_eq!(
            next.current_game,
            GameState::Tiebreak {
                player1: u32::MAX,
                player2: u32::MAX - 1
            }
        );
    }

    #[test]
    fn test_huge_set_scores_are_rejected_without_overflow() {
        let mut record = MatchRecord::from(&start_match());
        record.sets[0] = [u32::MAX, u32::MAX];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::ImpossibleSetScore { set: 1, .. })
        ));
    }

    #[test]
    fn test_no_play_after_the_deciding_set() {
        let mut record = MatchRecord::from(&start_match());
        record.sets = [[6, 0], [6, 0], [3, 2]];
        record.current_set = 3;
        record.match_winner = Some(PlayerName::Player1);
        record.current_game = GameRecord::GameOver {
            game_winner: PlayerName::Player1,
        };
        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MatchDecidedInEarlierSet {
                decided_in: 2,
                current: 3
            }
        ));
        assert_eq!(err.code(), "invalid_sets");

        record.sets[2] = [0, 0];
        assert!(matches!(
            record.validate(),
            Err(ValidationError::MatchDecidedInEarlierSet { .. })
        ));

        record.current_set = 2;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_recorded_tiebreak_must_end_where_it_stopped() {
        let mut record = MatchRecord::from(&start_match());
        record.current_set = 2;
        record.sets[0] = [7, 6];

        for (points, ok) in [
            ([7, 0], true),
            ([7, 5], true),
            ([8, 6], true),
            ([12, 10], true),
            ([15, 2], false),
            ([8, 5], false),
            ([7, 6], false),
            ([9, 6], false),
        ] {
            record.tiebreaks[0] = Some(points);
            assert_eq!(record.validate().is_ok(), ok, "tiebreak {points:?}");
        }
    }
}
