//! Line-oriented match driver.
//!
//! Reads one JSON event per stdin line and prints the resulting snapshot as
//! one JSON line on stdout. An optional first argument names a snapshot file
//! to resume from.
//!
//! ```text
//! $ printf '%s\n' '{"kind":"PointScored","player":"Player1"}' | score-events
//! {"sets":[[0,0],[0,0],[0,0]],"tiebreaks":[null,null,null],"currentGame":{"kind":"Normal","player1Point":"FIFTEEN","player2Point":"LOVE"},"currentSet":1,"matchWinner":null}
//! ```
//!
//! Rejected lines are reported on stderr and leave the state unchanged.

use std::io;
use std::path::Path;

use anyhow::Result;

use tui_tennis::config::AppConfig;
use tui_tennis::engine::Scorekeeper;
use tui_tennis::events::{resume_from, run_event_stream};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_stderr_logging();

    let mut keeper = match std::env::args().nth(1) {
        Some(path) => resume_from(Path::new(&path))?,
        None => Scorekeeper::new(),
    };

    run_event_stream(
        &mut keeper,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
    )?;
    Ok(())
}
