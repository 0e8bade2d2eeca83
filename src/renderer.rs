use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::app::{App, Phase};
use crate::config::{BORDER_HALF_BLOCK, CELL_WIDTH, GLYPH_CELL, GLYPH_FRUIT, GridSize};
use crate::game::GameState;
use crate::grid::Position;
use crate::theme::Theme;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{render_difficulty_menu, render_game_over_menu};

/// Renders the full frame for the controller's current phase.
pub fn render(frame: &mut Frame<'_>, app: &App, theme: &Theme, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(theme.play_bg)), area);

    match app.phase() {
        Phase::SelectingDifficulty => render_difficulty_menu(frame, area, theme),
        Phase::Playing { game, .. } => {
            render_board(frame, area, game, theme);
        }
        Phase::GameOver { game, .. } => {
            let board = render_board(frame, area, game, theme);
            render_game_over_menu(
                frame,
                board,
                game.score,
                game.end_reason,
                app.awaiting_replay(now),
                theme,
            );
        }
        Phase::Terminated => {}
    }
}

/// Draws HUD, border, walls, fruit and snake; returns the board rectangle.
fn render_board(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let board = board_area(area, state.bounds());
    let play_area = render_hud(frame, board, state, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_walls(frame, inner, state, theme);
    render_fruit(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    board
}

/// Centers a rectangle just large enough for the bordered grid and the HUD.
fn board_area(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = bounds.height.saturating_add(2 + HUD_HEIGHT);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    board
}

fn render_walls(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let style = Style::new().fg(theme.wall);
    let buffer = frame.buffer_mut();

    for wall in &state.walls {
        for row in wall.rows() {
            let position = Position::new(wall.column(), row);
            if let Some((x, y)) = logical_to_terminal(inner, state.bounds(), position) {
                buffer.set_string(x, y, GLYPH_CELL, style);
            }
        }
    }
}

fn render_fruit(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.fruit.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FRUIT, Style::new().fg(theme.fruit));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();
    let body_style = Style::new().fg(theme.snake_body);

    for segment in state.snake.segments().skip(1) {
        if let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) {
            buffer.set_string(x, y, GLYPH_CELL, body_style);
        }
    }

    // Head last so it stays visible over stacked segments.
    if let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.snake.head()) {
        buffer.set_string(
            x,
            y,
            GLYPH_CELL,
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
