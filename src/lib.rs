//! TUI Tennis (workspace facade crate).
//!
//! This package re-exports the workspace crates as
//! `tui_tennis::{types, core, engine, adapter, input, term}` and holds the
//! runtime configuration and event-stream driver shared by the binaries.

pub mod config;
pub mod events;

pub use tui_tennis_adapter as adapter;
pub use tui_tennis_core as core;
pub use tui_tennis_engine as engine;
pub use tui_tennis_input as input;
pub use tui_tennis_term as term;
pub use tui_tennis_types as types;

pub use config::AppConfig;
