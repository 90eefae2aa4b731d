//! Adapter module - the JSON boundary of the scoring engine
//!
//! Everything that enters the engine from outside the process (event lines,
//! stored snapshots) passes through here first. Input is parsed into wire
//! records with serde, then validated into typed values; malformed input is
//! refused with a [`ValidationError`] and never coerced.
//!
//! # Events
//!
//! ```text
//! {"kind":"PointScored","player":"Player1"}
//! {"kind":"NewGame"}
//! {"kind":"NewMatch"}
//! ```
//!
//! # Snapshots
//!
//! A snapshot is a record with `sets`, `tiebreaks`, `currentGame`,
//! `currentSet` and `matchWinner`. See [`snapshot`] for the exact shape and
//! the consistency checks applied on ingest.
//!
//! # Example
//!
//! ```
//! use tui_tennis_adapter::{encode_snapshot, parse_event, parse_snapshot};
//! use tui_tennis_core::{score_point, start_match};
//! use tui_tennis_types::MatchIntent;
//!
//! let intent = parse_event(r#"{"kind":"PointScored","player":"Player2"}"#).unwrap();
//! let MatchIntent::PointScored(player) = intent else { unreachable!() };
//!
//! let state = score_point(&start_match(), player);
//! let json = encode_snapshot(&state).unwrap();
//! assert_eq!(parse_snapshot(&json).unwrap(), state);
//!
//! assert!(parse_event(r#"{"kind":"Fault"}"#).is_err());
//! ```

pub mod error;
pub mod protocol;
pub mod snapshot;

pub use tui_tennis_core as core;
pub use tui_tennis_types as types;

pub use error::ValidationError;
pub use protocol::{encode_event, parse_event, EventRecord, PlayerName, PointName};
pub use snapshot::{encode_snapshot, parse_snapshot, GameRecord, MatchRecord};
