//! Protocol module - JSON event records for driving a match
//!
//! Events are flat JSON objects discriminated by `kind`:
//!
//! ```text
//! {"kind":"PointScored","player":"Player1"}
//! {"kind":"NewGame"}
//! {"kind":"NewMatch"}
//! ```
//!
//! Anything else (unknown kind, unknown player, extra fields) is refused.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::types::{MatchIntent, Player, PointValue};

// ============== Shared wire names ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerName {
    Player1,
    Player2,
}

impl From<Player> for PlayerName {
    fn from(value: Player) -> Self {
        match value {
            Player::Player1 => PlayerName::Player1,
            Player::Player2 => PlayerName::Player2,
        }
    }
}

impl From<PlayerName> for Player {
    fn from(value: PlayerName) -> Self {
        match value {
            PlayerName::Player1 => Player::Player1,
            PlayerName::Player2 => Player::Player2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointName {
    #[serde(rename = "LOVE")]
    Love,
    #[serde(rename = "FIFTEEN")]
    Fifteen,
    #[serde(rename = "THIRTY")]
    Thirty,
    #[serde(rename = "FORTY")]
    Forty,
}

impl From<PointValue> for PointName {
    fn from(value: PointValue) -> Self {
        match value {
            PointValue::Love => PointName::Love,
            PointValue::Fifteen => PointName::Fifteen,
            PointValue::Thirty => PointName::Thirty,
            PointValue::Forty => PointName::Forty,
        }
    }
}

impl From<PointName> for PointValue {
    fn from(value: PointName) -> Self {
        match value {
            PointName::Love => PointValue::Love,
            PointName::Fifteen => PointValue::Fifteen,
            PointName::Thirty => PointValue::Thirty,
            PointName::Forty => PointValue::Forty,
        }
    }
}

// ============== Events ==============

/// One inbound event line.
///
/// Payload-free kinds are empty struct variants so that extra fields on
/// them are refused like on `PointScored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", deny_unknown_fields)]
pub enum EventRecord {
    PointScored { player: PlayerName },
    NewGame {},
    NewMatch {},
}

impl From<EventRecord> for MatchIntent {
    fn from(value: EventRecord) -> Self {
        match value {
            EventRecord::PointScored { player } => MatchIntent::PointScored(player.into()),
            EventRecord::NewGame {} => MatchIntent::NewGame,
            EventRecord::NewMatch {} => MatchIntent::NewMatch,
        }
    }
}

impl From<MatchIntent> for EventRecord {
    fn from(value: MatchIntent) -> Self {
        match value {
            MatchIntent::PointScored(player) => EventRecord::PointScored {
                player: player.into(),
            },
            MatchIntent::NewGame => EventRecord::NewGame {},
            MatchIntent::NewMatch => EventRecord::NewMatch {},
        }
    }
}

/// Parse and validate one event
pub fn parse_event(json: &str) -> Result<MatchIntent, ValidationError> {
    match serde_json::from_str::<EventRecord>(json) {
        Ok(record) => Ok(record.into()),
        Err(e) => {
            // Tell "unknown kind" apart from a known kind with a bad payload.
            #[derive(Debug, Deserialize)]
            struct KindOnly<'a> {
                #[serde(borrow)]
                kind: Option<&'a str>,
            }
            let err = match serde_json::from_str::<KindOnly>(json) {
                Ok(KindOnly { kind: None }) => ValidationError::MissingKind,
                Ok(KindOnly { kind: Some(kind) })
                    if !matches!(kind, "PointScored" | "NewGame" | "NewMatch") =>
                {
                    ValidationError::UnknownEventKind(kind.to_string())
                }
                _ => ValidationError::Json(e),
            };
            debug!(error = %err, "rejected event");
            Err(err)
        }
    }
}

/// Encode an intent as an event line
pub fn encode_event(intent: MatchIntent) -> Result<String, ValidationError> {
    Ok(serde_json::to_string(&EventRecord::from(intent))?)
}
