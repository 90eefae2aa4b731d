//! Terminal scoreboard (default binary).
//!
//! Keys record points and resets; the live snapshot is owned by a
//! `Scorekeeper` here in the front end, never by the scoring engine.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_tennis::config::AppConfig;
use tui_tennis::engine::Scorekeeper;
use tui_tennis::input::{handle_key_event, should_quit};
use tui_tennis::term::{ScoreboardView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_file_logging()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let view = ScoreboardView::new(&config.player1_name, &config.player2_name);
    let mut keeper = Scorekeeper::new();
    info!(
        player1 = %config.player1_name,
        player2 = %config.player2_name,
        "scoreboard started"
    );

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&view.render(keeper.state(), Viewport::new(w, h)))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(intents = keeper.applied(), "scoreboard closed");
                    return Ok(());
                }
                if let Some(intent) = handle_key_event(key) {
                    let state = keeper.apply(intent);
                    info!(
                        intent = intent.as_str(),
                        set = state.current_set,
                        game = state.current_game.kind(),
                        "intent applied"
                    );
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
