//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring engine, terminal rendering, JSON boundary).
//!
//! # Match Format
//!
//! The rules are fixed to standard singles tennis:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SETS_PER_MATCH` | 3 | Best of three sets |
//! | `SETS_TO_WIN_MATCH` | 2 | Sets needed to take the match |
//! | `GAMES_TO_WIN_SET` | 6 | Games needed to take a set (with a 2-game lead) |
//! | `TIEBREAK_POINTS_TO_WIN` | 7 | Points needed to take a tiebreak (with a 2-point lead) |
//! | `WIN_MARGIN` | 2 | Lead required to close out a set or tiebreak |
//!
//! A set reaching 6-6 is always decided by a tiebreak, in every set including
//! the third. Games use advantage scoring (no "no-ad" deciding point).
//!
//! # Examples
//!
//! ```
//! use tui_tennis_types::{MatchIntent, Player, PointValue};
//!
//! // Parse a player from its wire name
//! let player = Player::from_str("Player1").unwrap();
//! assert_eq!(player.opponent(), Player::Player2);
//!
//! // Advance a point value
//! assert_eq!(PointValue::Love.next(), PointValue::Fifteen);
//! assert_eq!(PointValue::Thirty.score(), 30);
//!
//! // Intents carry their event kind name
//! assert_eq!(MatchIntent::PointScored(player).as_str(), "PointScored");
//! assert_eq!(MatchIntent::NewMatch.as_str(), "NewMatch");
//! ```

/// Number of set slots in a match (best of three)
pub const SETS_PER_MATCH: usize = 3;

/// Sets a player must win to take the match
pub const SETS_TO_WIN_MATCH: usize = 2;

/// Games a player must reach to win a set outright
pub const GAMES_TO_WIN_SET: u32 = 6;

/// Points a player must reach to win a tiebreak
pub const TIEBREAK_POINTS_TO_WIN: u32 = 7;

/// Lead required to close out a set or a tiebreak
pub const WIN_MARGIN: u32 = 2;

/// The two sides of a singles match
///
/// The model is hard-coded to two-party scoring; there is no doubles or
/// multi-player support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Both players in index order
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other side of the net
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tennis_types::Player;
    ///
    /// assert_eq!(Player::Player1.opponent(), Player::Player2);
    /// assert_eq!(Player::Player2.opponent(), Player::Player1);
    /// ```
    pub fn opponent(&self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Zero-based index (Player1 = 0, Player2 = 1)
    pub fn index(&self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }

    /// Parse player from string
    ///
    /// Accepts the canonical wire names `"Player1"` / `"Player2"` and the
    /// short forms `"p1"` / `"p2"` / `"1"` / `"2"` (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tennis_types::Player;
    ///
    /// assert_eq!(Player::from_str("Player2"), Some(Player::Player2));
    /// assert_eq!(Player::from_str("p1"), Some(Player::Player1));
    /// assert_eq!(Player::from_str("nobody"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "player1" | "p1" | "1" => Some(Player::Player1),
            "player2" | "p2" | "2" => Some(Player::Player2),
            _ => None,
        }
    }

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Player1 => "Player1",
            Player::Player2 => "Player2",
        }
    }
}

/// Point values of a game before deuce
///
/// Ordered: `Love < Fifteen < Thirty < Forty`. Once both players would be at
/// Forty the game leaves this representation for deuce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointValue {
    Love,
    Fifteen,
    Thirty,
    Forty,
}

impl PointValue {
    /// Next value in the sequence (saturates at Forty)
    pub fn next(&self) -> Self {
        match self {
            PointValue::Love => PointValue::Fifteen,
            PointValue::Fifteen => PointValue::Thirty,
            PointValue::Thirty | PointValue::Forty => PointValue::Forty,
        }
    }

    /// Called score (0, 15, 30, 40)
    pub fn score(&self) -> u32 {
        match self {
            PointValue::Love => 0,
            PointValue::Fifteen => 15,
            PointValue::Thirty => 30,
            PointValue::Forty => 40,
        }
    }

    /// Parse from the upper-case wire name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tennis_types::PointValue;
    ///
    /// assert_eq!(PointValue::from_str("FORTY"), Some(PointValue::Forty));
    /// assert_eq!(PointValue::from_str("forty"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LOVE" => Some(PointValue::Love),
            "FIFTEEN" => Some(PointValue::Fifteen),
            "THIRTY" => Some(PointValue::Thirty),
            "FORTY" => Some(PointValue::Forty),
            _ => None,
        }
    }

    /// Upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            PointValue::Love => "LOVE",
            PointValue::Fifteen => "FIFTEEN",
            PointValue::Thirty => "THIRTY",
            PointValue::Forty => "FORTY",
        }
    }
}

/// External intents that drive a match
///
/// These are produced by human input and by the JSON event boundary, and are
/// routed onto the scoring engine by the dispatch seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchIntent {
    /// A rally was won by the given player
    PointScored(Player),
    /// Throw away the current game and start it again
    NewGame,
    /// Discard the whole match and start from love-all, set 1
    NewMatch,
}

impl MatchIntent {
    /// Event kind name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchIntent::PointScored(_) => "PointScored",
            MatchIntent::NewGame => "NewGame",
            MatchIntent::NewMatch => "NewMatch",
        }
    }
}
