//! Core scoring module - pure, deterministic, and testable
//!
//! This module contains all the tennis scoring rules. It has **zero
//! dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: The same sequence of points always yields the same snapshot
//! - **Testable**: Every rule is exercised by unit tests next to the code
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Stateless**: Snapshots are `Copy` values threaded through free functions
//!
//! # Module Structure
//!
//! - [`game`]: single-game state machine (love/15/30/40, deuce, advantage, tiebreak)
//! - [`set`]: set-winner rule and folding finished games into set/match scores
//! - [`match_state`]: the match snapshot plus the per-point entry point
//!
//! # Rules
//!
//! - **Games**: advantage scoring; 40-40 is deuce, a point from deuce is advantage
//! - **Sets**: 6 games with a 2-game lead, or 7-6 via tiebreak
//! - **Tiebreak**: played at 6-6 in every set, first to 7 points with a 2-point lead
//! - **Match**: best of three sets; once decided, further points are no-ops
//!
//! # Example
//!
//! ```
//! use tui_tennis_core::{score_point, start_match, GameState, ScorePair};
//! use tui_tennis_types::Player;
//!
//! let mut state = start_match();
//! for _ in 0..4 {
//!     state = score_point(&state, Player::Player1);
//! }
//!
//! assert_eq!(state.sets[0], ScorePair(1, 0));
//! assert!(matches!(state.current_game, GameState::Normal { .. }));
//! assert_eq!(state.current_set, 1);
//! ```

pub mod game;
pub mod match_state;
pub mod set;

pub use tui_tennis_types as types;

// Re-export commonly used types for convenience
pub use game::{next_game, start_game, start_tiebreak, GameState};
pub use match_state::{reset_game, score_point, start_match, MatchState};
pub use set::{apply_game_result, match_winner, needs_tiebreak, set_winner, ScorePair};
