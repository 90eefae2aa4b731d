//! Caller-held match state.
//!
//! The scoring functions are stateless; something still has to own the live
//! snapshot a display is showing. [`Scorekeeper`] is that owner. It is a
//! plain value, so a front end can keep several or clone one freely.

use crate::core::{start_match, MatchState};
use crate::dispatch::dispatch;
use crate::types::MatchIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorekeeper {
    state: MatchState,
    /// Number of intents applied since this keeper was created.
    applied: u32,
}

impl Scorekeeper {
    pub fn new() -> Self {
        Self::from_state(start_match())
    }

    /// Resume from a snapshot that has already been validated.
    pub fn from_state(state: MatchState) -> Self {
        Self { state, applied: 0 }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn applied(&self) -> u32 {
        self.applied
    }

    /// Apply an intent and return the new snapshot.
    pub fn apply(&mut self, intent: MatchIntent) -> &MatchState {
        self.state = dispatch(&self.state, intent);
        self.applied = self.applied.saturating_add(1);
        &self.state
    }
}

impl Default for Scorekeeper {
    fn default() -> Self {
        Self::new()
    }
}
