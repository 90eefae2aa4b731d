//! Terminal scoreboard module.
//!
//! A small rendering layer for following a match in the terminal. It
//! renders into a simple framebuffer that is then flushed to a terminal
//! backend, so everything except the final flush is pure and testable.
//!
//! Goals:
//! - Keep `core` free of any display concerns (point labels live here)
//! - Redraw only what changed between frames
//! - Degrade gracefully on small terminals (writes are clipped)

pub mod fb;
pub mod labels;
pub mod renderer;
pub mod scoreboard;

pub use tui_tennis_core as core;
pub use tui_tennis_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use labels::{game_labels, set_label, status_line};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scoreboard::{AnchorY, ScoreboardView, Viewport};
