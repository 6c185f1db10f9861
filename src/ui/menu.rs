use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::config::PALETTE;
use crate::game::DeathReason;

/// Draws the start screen over the whole board.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) {
    render_caption(
        frame,
        area,
        Style::new().bg(PALETTE.start_bg),
        Caption {
            title: "Snake!",
            title_color: Color::Black,
            lines: vec![Line::from("Press any key to play.")],
            subtitle_color: Color::Black,
        },
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 70, 40);
    render_caption(
        frame,
        popup,
        Style::new().bg(Color::Black),
        Caption {
            title: "- Paused -",
            title_color: PALETTE.pause_title,
            lines: vec![Line::from("Press Escape to resume.")],
            subtitle_color: Color::White,
        },
    );
}

/// Draws the death screen over the whole board.
pub fn render_death_menu(frame: &mut Frame<'_>, area: Rect, score: u32, reason: DeathReason) {
    let cause = match reason {
        DeathReason::WallCollision => "You hit the wall.",
        DeathReason::SelfCollision => "You ran into yourself.",
    };

    render_caption(
        frame,
        area,
        Style::new().bg(PALETTE.death_bg),
        Caption {
            title: "You Died",
            title_color: Color::Rgb(220, 220, 220),
            lines: vec![
                Line::from(cause),
                Line::from(format!("Your score was {score}.")),
                Line::from("Press Enter to play again."),
            ],
            subtitle_color: Color::Rgb(200, 200, 200),
        },
    );
}

struct Caption {
    title: &'static str,
    title_color: Color,
    lines: Vec<Line<'static>>,
    subtitle_color: Color,
}

fn render_caption(frame: &mut Frame<'_>, area: Rect, background: Style, caption: Caption) {
    frame.render_widget(Clear, area);
    frame.render_widget(Block::bordered().style(background), area);

    let body_height = u16::try_from(caption.lines.len()).unwrap_or(u16::MAX);
    let [_, title_row, _, body_rows, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(body_height),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(caption.title))
            .alignment(Alignment::Center)
            .style(
                background
                    .fg(caption.title_color)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    frame.render_widget(
        Paragraph::new(caption.lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(background.fg(caption.subtitle_color)),
        body_rows,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::game::DeathReason;

    use super::{centered_popup, render_death_menu, render_pause_menu, render_start_menu};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn start_menu_shows_title() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_start_menu(frame, area);
            })
            .expect("draw should succeed");

        let text = screen_text(&terminal);
        assert!(text.contains("Snake!"));
        assert!(text.contains("Press any key to play."));
    }

    #[test]
    fn pause_menu_shows_resume_hint() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_pause_menu(frame, area);
            })
            .expect("draw should succeed");

        assert!(screen_text(&terminal).contains("- Paused -"));
    }

    #[test]
    fn death_menu_reports_score_and_cause() {
        let mut terminal = Terminal::new(TestBackend::new(50, 14)).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_death_menu(frame, area, 7, DeathReason::SelfCollision);
            })
            .expect("draw should succeed");

        let text = screen_text(&terminal);
        assert!(text.contains("You Died"));
        assert!(text.contains("Your score was 7."));
        assert!(text.contains("You ran into yourself."));
    }

    #[test]
    fn popup_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_popup(area, 70, 40);

        assert!(popup.width <= 70 && popup.height <= 20);
        assert!(popup.x >= area.x && popup.right() <= area.right());
    }
}
