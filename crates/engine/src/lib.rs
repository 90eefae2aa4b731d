//! Engine module - the single seam external collaborators drive.
//!
//! Front ends (terminal UI, JSON event streams) never call the scoring
//! functions directly. They turn user input into a [`MatchIntent`] and hand
//! it to [`dispatch`], or to a [`Scorekeeper`] that holds the live snapshot on
//! their behalf.

pub mod dispatch;
pub mod scorekeeper;

pub use tui_tennis_core as core;
pub use tui_tennis_types as types;

pub use dispatch::dispatch;
pub use scorekeeper::Scorekeeper;
pub use tui_tennis_types::MatchIntent;
