use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{GridSize, PALETTE};
use crate::game::GameState;
use crate::shell::{Shell, ShellPhase};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_death_menu, render_pause_menu, render_start_menu};

/// Renders the full frame from immutable shell state.
///
/// Returns false when the terminal is too small for the board and only a
/// notice was drawn.
pub fn render(frame: &mut Frame<'_>, shell: &Shell) -> bool {
    let state = shell.state();
    let tile_size = state.config().tile_size;

    let area = frame.area();
    let [board_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let Some(play_area) = board_rect(board_area, state.bounds(), tile_size) else {
        render_too_small(frame, area, state.bounds(), tile_size);
        return false;
    };

    let block = Block::bordered().border_style(Style::new().fg(PALETTE.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);
    frame.render_widget(
        Paragraph::new("").style(Style::new().bg(PALETTE.play_bg)),
        inner,
    );

    render_fruit(frame, inner, state, tile_size);
    render_snake(frame, inner, state, tile_size);
    render_hud(frame, hud_area, state);

    match shell.phase() {
        ShellPhase::Start => render_start_menu(frame, play_area),
        ShellPhase::Paused => render_pause_menu(frame, play_area),
        ShellPhase::Dead { score, reason } => render_death_menu(frame, play_area, score, reason),
        ShellPhase::Running => {}
    }

    true
}

/// Returns the bordered board rectangle centered in `area`, or `None` when
/// the grid does not fit.
#[must_use]
pub fn board_rect(area: Rect, bounds: GridSize, tile_size: u16) -> Option<Rect> {
    let width = bounds.width.checked_mul(tile_size)?.checked_add(2)?;
    let height = bounds.height.checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

fn render_fruit(frame: &mut Frame<'_>, inner: Rect, state: &GameState, tile_size: u16) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), tile_size, state.fruit) else {
        return;
    };

    let tile = " ".repeat(usize::from(tile_size));
    frame
        .buffer_mut()
        .set_string(x, y, tile, Style::new().bg(PALETTE.fruit));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, tile_size: u16) {
    let tile = " ".repeat(usize::from(tile_size));
    let head = state.snake.len() - 1;

    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), tile_size, *segment) else {
            continue;
        };

        let color = PALETTE.snake[index % PALETTE.snake.len()];
        let mut style = Style::new().bg(color);
        if index == head {
            style = style.add_modifier(Modifier::BOLD);
        }
        buffer.set_string(x, y, &tile, style);
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, bounds: GridSize, tile_size: u16) {
    let needed_width = u32::from(bounds.width) * u32::from(tile_size) + 2;
    let needed_height = u32::from(bounds.height) + 3;
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {needed_width}x{needed_height}, have {}x{}",
            area.width, area.height
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn logical_to_terminal(
    inner: Rect,
    bounds: GridSize,
    tile_size: u16,
    position: Position,
) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(tile_size)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::{GameConfig, GridSize, PALETTE};
    use crate::game::GameState;
    use crate::input::{Direction, GameInput};
    use crate::shell::{Shell, ShellPhase};
    use crate::snake::{Position, Snake};

    use super::{board_rect, logical_to_terminal, render};

    const BOUNDS: GridSize = GridSize {
        width: 12,
        height: 12,
    };

    #[test]
    fn board_is_centered_with_border() {
        let board = board_rect(Rect::new(0, 0, 40, 20), BOUNDS, 2).expect("board should fit");

        assert_eq!(board, Rect::new(7, 3, 26, 14));
    }

    #[test]
    fn board_does_not_fit_small_area() {
        assert_eq!(board_rect(Rect::new(0, 0, 20, 20), BOUNDS, 2), None);
    }

    #[test]
    fn tiles_map_to_terminal_columns() {
        let inner = Rect::new(1, 1, 24, 12);

        assert_eq!(
            logical_to_terminal(inner, BOUNDS, 2, Position::new(0, 0)),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, 2, Position::new(3, 4)),
            Some((7, 5))
        );
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, 2, Position::new(-1, 4)),
            None
        );
    }

    #[test]
    fn draws_snake_and_fruit_tiles() {
        let mut shell = Shell::with_config(GameConfig::with_grid(12, 12), Some(3));
        shell.handle_input(GameInput::AnyKey);

        let mut terminal = Terminal::new(TestBackend::new(40, 20)).expect("test terminal");
        let (fruit, head) = {
            let state = shell.state();
            (state.fruit, state.snake.head())
        };
        terminal
            .draw(|frame| {
                render(frame, &shell);
            })
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let inner = Rect::new(8, 3, 24, 12);
        let (hx, hy) = logical_to_terminal(inner, BOUNDS, 2, head).expect("head on board");
        assert_eq!(buffer[(hx, hy)].bg, PALETTE.snake[0]);

        if fruit != head {
            let (fx, fy) = logical_to_terminal(inner, BOUNDS, 2, fruit).expect("fruit on board");
            assert_eq!(buffer[(fx, fy)].bg, PALETTE.fruit);
        }
    }

    #[test]
    fn too_small_terminal_shows_notice() {
        let shell = Shell::with_config(GameConfig::default(), Some(3));

        let mut terminal = Terminal::new(TestBackend::new(30, 10)).expect("test terminal");
        let mut drawn = true;
        terminal
            .draw(|frame| drawn = render(frame, &shell))
            .expect("draw should succeed");
        assert!(!drawn);

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn small_terminal_keeps_default_game_on_start_screen() {
        let mut shell = Shell::with_config(GameConfig::default(), Some(1));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");

        for _ in 0..10 {
            let mut drawn = true;
            terminal
                .draw(|frame| drawn = render(frame, &shell))
                .expect("draw should succeed");
            shell.set_board_visible(drawn);

            shell.handle_input(GameInput::AnyKey);
            assert_eq!(shell.on_tick(), None);
        }

        assert_eq!(shell.phase(), ShellPhase::Start);
        assert_eq!(shell.state().tick_count(), 0);

        // Growing the terminal brings the start screen back.
        terminal.backend_mut().resize(110, 60);
        let mut drawn = false;
        terminal
            .draw(|frame| drawn = render(frame, &shell))
            .expect("draw should succeed");
        shell.set_board_visible(drawn);
        assert!(drawn);

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Snake!"));
    }

    #[test]
    fn snake_colors_alternate_from_tail() {
        let mut state = GameState::new_with_seed(GameConfig::with_grid(12, 12), 4);
        state.snake = Snake::from_segments(
            vec![Position::new(2, 5), Position::new(3, 5), Position::new(4, 5)],
            Direction::Right,
        );
        state.fruit = Position::new(0, 0);
        let mut shell = Shell::new(state);
        shell.handle_input(GameInput::AnyKey);

        let mut terminal = Terminal::new(TestBackend::new(40, 20)).expect("test terminal");
        terminal
            .draw(|frame| {
                render(frame, &shell);
            })
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let inner = Rect::new(8, 3, 24, 12);
        let colors: Vec<_> = [2, 3, 4]
            .into_iter()
            .map(|x| {
                let (tx, ty) = logical_to_terminal(inner, BOUNDS, 2, Position::new(x, 5))
                    .expect("segment on board");
                buffer[(tx, ty)].bg
            })
            .collect();

        assert_eq!(
            colors,
            vec![PALETTE.snake[0], PALETTE.snake[1], PALETTE.snake[0]]
        );
    }
}
