use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::PALETTE;
use crate::game::GameState;

/// Renders the one-line status bar below the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    frame.render_widget(
        Paragraph::new(hud_line(state))
            .alignment(Alignment::Center)
            .style(Style::new().fg(PALETTE.hud)),
        area,
    );
}

fn hud_line(state: &GameState) -> Line<'static> {
    let bounds = state.bounds();
    let value = Style::new().add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::raw("Score "),
        Span::styled(state.score().to_string(), value),
        Span::raw("  Speed "),
        Span::styled(format!("{:.1}", state.speed()), value),
        Span::raw(format!("  {}x{}", bounds.width, bounds.height)),
    ];
    if state.config().easy_mode {
        spans.push(Span::raw("  easy"));
    }

    Line::from(spans)
}
