//! Line-oriented event stream driving a [`Scorekeeper`].
//!
//! Each input line is one JSON event. Every accepted event writes the
//! resulting snapshot as one JSON line to `out`; a rejected line writes a
//! message to `errors` and leaves the state as it was.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::adapter::{encode_snapshot, parse_event, parse_snapshot};
use crate::engine::Scorekeeper;

/// Counts for one processed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub applied: u32,
    pub rejected: u32,
}

/// Scorekeeper resumed from a snapshot file.
pub fn resume_from(path: &Path) -> Result<Scorekeeper> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read snapshot {}", path.display()))?;
    let state = parse_snapshot(json.trim())
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    info!(path = %path.display(), set = state.current_set, "resumed from snapshot");
    Ok(Scorekeeper::from_state(state))
}

/// Apply every event line of `input` to `keeper`.
///
/// Only I/O failures end the stream early.
pub fn run_event_stream(
    keeper: &mut Scorekeeper,
    input: impl BufRead,
    mut out: impl Write,
    mut errors: impl Write,
) -> Result<StreamSummary> {
    let mut summary = StreamSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_event(line) {
            Ok(intent) => {
                let state = keeper.apply(intent);
                writeln!(out, "{}", encode_snapshot(state)?)?;
                summary.applied += 1;
            }
            Err(err) => {
                summary.rejected += 1;
                debug!(line = index + 1, code = err.code(), "rejected event: {err}");
                writeln!(errors, "line {}: {}", index + 1, err)?;
            }
        }
    }

    out.flush()?;
    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "event stream finished"
    );
    Ok(summary)
}
