//! ScoreboardView: maps a `core::MatchState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::MatchState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::labels::{game_labels, set_label, status_line};
use crate::types::{Player, SETS_PER_MATCH};

const NAME_W: u16 = 18;
const SET_W: u16 = 7;
const GAME_W: u16 = 6;
/// Frame rows: border, header, two players, border.
const FRAME_H: u16 = 5;
/// Frame plus blank line, status line and key help.
const TOTAL_H: u16 = FRAME_H + 3;

const HELP: &str = "[1/<-] point P1  [2/->] point P2  [g] new game  [n] new match  [q] quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Scoreboard renderer for one match.
pub struct ScoreboardView {
    names: [String; 2],
    anchor_y: AnchorY,
}

impl Default for ScoreboardView {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}

impl ScoreboardView {
    pub fn new(player1: &str, player2: &str) -> Self {
        Self {
            names: [player1.to_string(), player2.to_string()],
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Total frame width in columns.
    pub fn frame_width() -> u16 {
        2 + NAME_W + SET_W * SETS_PER_MATCH as u16 + GAME_W
    }

    /// Render the match into a new framebuffer sized to the viewport.
    pub fn render(&self, state: &MatchState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = Self::frame_width();
        let x0 = viewport.width.saturating_sub(frame_w) / 2;
        let y0 = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(TOTAL_H) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        let header = CellStyle::fg(Rgb::new(150, 150, 160));
        let current = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

        draw_border(&mut fb, x0, y0, frame_w, FRAME_H, border);

        // Header row.
        let hy = y0 + 1;
        fb.put_str(x0 + 2, hy, "PLAYER", header);
        for index in 0..SETS_PER_MATCH {
            let label = format!("SET {}", index + 1);
            let style = if index == state.set_index() && !state.is_over() {
                current
            } else {
                header
            };
            fb.put_str_centered(set_col(x0, index), hy, SET_W, &label, style);
        }
        fb.put_str_centered(game_col(x0), hy, GAME_W, "GAME", header);

        let (p1_game, p2_game) = game_labels(&state.current_game);
        for (row, player, game) in [
            (0, Player::Player1, p1_game),
            (1, Player::Player2, p2_game),
        ] {
            self.draw_player_row(&mut fb, state, x0, y0 + 2 + row, player, &game);
        }

        // Status and help below the frame.
        let status_style = if state.is_over() {
            CellStyle::fg(Rgb::new(120, 230, 120)).bold()
        } else {
            CellStyle::fg(Rgb::new(230, 200, 90))
        };
        let sy = y0 + FRAME_H + 1;
        fb.put_str_centered(x0, sy, frame_w, &status_line(state, &self.names), status_style);
        let help_x = viewport.width.saturating_sub(HELP.len() as u16) / 2;
        fb.put_str(help_x, sy + 1, HELP, header.dim());

        fb
    }

    fn draw_player_row(
        &self,
        fb: &mut FrameBuffer,
        state: &MatchState,
        x0: u16,
        y: u16,
        player: Player,
        game: &str,
    ) {
        let is_winner = state.match_winner == Some(player);
        let name_style = if is_winner {
            CellStyle::fg(Rgb::new(120, 230, 120)).bold()
        } else {
            CellStyle::default().bold()
        };
        let marker = if is_winner { '*' } else { ' ' };
        fb.put_char(x0 + 1, y, marker, name_style);

        let name: String = self.names[player.index()]
            .chars()
            .take(NAME_W as usize - 2)
            .collect();
        fb.put_str(x0 + 2, y, &name, name_style);

        let winners = state.set_winners();
        for index in 0..SETS_PER_MATCH {
            let style = if winners[index] == Some(player) {
                CellStyle::default().bold()
            } else if index == state.set_index() && !state.is_over() {
                CellStyle::fg(Rgb::new(255, 255, 255))
            } else {
                CellStyle::default().dim()
            };
            let label = set_label(state, index, player);
            fb.put_str_centered(set_col(x0, index), y, SET_W, &label, style);
        }

        let game_style = CellStyle::fg(Rgb::new(230, 200, 90)).bold();
        fb.put_str_centered(game_col(x0), y, GAME_W, game, game_style);
    }
}

fn set_col(x0: u16, index: usize) -> u16 {
    x0 + 1 + NAME_W + SET_W * index as u16
}

fn game_col(x0: u16) -> u16 {
    set_col(x0, SETS_PER_MATCH)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
