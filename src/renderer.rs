use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_IDLE,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP,
};
use crate::game::{GameSession, Phase};
use crate::grid::{Cell, GridSize};
use crate::snake::Velocity;
use crate::theme::{BOARD_BG, BORDER_FG, FOOD_COLOR};
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full frame from an immutable session snapshot.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, info: HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, session, info);
    let board = board_rect(play_area, session.bounds());

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(BORDER_FG))
        .style(Style::new().bg(BOARD_BG));

    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, session);
    render_snake(frame, inner, session, info);

    match session.phase {
        Phase::Idle => render_start_menu(frame, play_area, info.high_score, info.palette),
        Phase::Paused => render_pause_menu(frame, play_area),
        Phase::Over => render_game_over_menu(
            frame,
            play_area,
            session.score,
            info.high_score,
            info.new_record,
        ),
        Phase::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession) {
    let Some((x, y)) = cell_to_terminal(inner, session.bounds(), session.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(FOOD_COLOR));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, info: HudInfo) {
    let head = session.snake.head();

    let buffer = frame.buffer_mut();
    for segment in session.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, session.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(session.snake.velocity()),
                Style::new()
                    .fg(info.palette.head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(info.palette.body));
        }
    }
}

fn head_glyph(velocity: Velocity) -> &'static str {
    match velocity {
        Velocity { dx: 1, .. } => GLYPH_SNAKE_HEAD_RIGHT,
        Velocity { dx: -1, .. } => GLYPH_SNAKE_HEAD_LEFT,
        Velocity { dy: 1, .. } => GLYPH_SNAKE_HEAD_DOWN,
        Velocity { dy: -1, .. } => GLYPH_SNAKE_HEAD_UP,
        _ => GLYPH_SNAKE_HEAD_IDLE,
    }
}

/// Centers the bordered board inside the available play area.
fn board_rect(play_area: Rect, bounds: GridSize) -> Rect {
    let want_width = bounds.width.saturating_add(2);
    let want_height = bounds.height.saturating_add(2);
    let width = want_width.min(play_area.width);
    let height = want_height.min(play_area.height);

    Rect {
        x: play_area.x + (play_area.width.saturating_sub(width)) / 2,
        y: play_area.y + (play_area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn cell_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
