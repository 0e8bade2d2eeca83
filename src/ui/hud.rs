use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::game::GameState;
use crate::theme::Theme;

/// Terminal rows taken by the HUD above the board.
pub const HUD_HEIGHT: u16 = 1;

const HUD_INNER_MARGIN_X: u16 = 1;

/// Renders the one-line HUD and returns the remaining play area below it.
///
/// Score sits on the left, speed on the right, difficulty in between.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(HUD_HEIGHT), Constraint::Min(0)]).areas(area);
    let hud_area = inset_horizontal(hud_area, HUD_INNER_MARGIN_X);

    let score = labeled_value("Score", state.score, theme);
    let speed = labeled_value("Speed", state.speed, theme);
    let [score_area, difficulty_area, speed_area] = Layout::horizontal([
        Constraint::Length(line_width(&score)),
        Constraint::Min(0),
        Constraint::Length(line_width(&speed)),
    ])
    .areas(hud_area);

    frame.render_widget(Paragraph::new(score), score_area);
    frame.render_widget(
        Paragraph::new(Line::from(state.difficulty.label()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_text)),
        difficulty_area,
    );
    frame.render_widget(
        Paragraph::new(speed).alignment(Alignment::Right),
        speed_area,
    );

    play_area
}

fn labeled_value(label: &str, value: u32, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.hud_text)),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(theme.hud_value)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn line_width(line: &Line<'_>) -> u16 {
    let width: usize = line
        .spans
        .iter()
        .map(|span| span.content.width())
        .sum();
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
