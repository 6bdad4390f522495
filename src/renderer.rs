use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{BOARD_BG, Board, CELL_COLUMNS, FOOD_COLOR, GLYPH_CELL, SNAKE_COLOR};
use crate::game::{GameSession, GameStatus};
use crate::snake::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_too_small};

/// Terminal columns and rows needed to draw `board` with border and HUD.
#[must_use]
pub fn required_size(board: Board) -> (u16, u16) {
    let side = u16::try_from(board.cells_per_side()).unwrap_or(u16::MAX);
    let width = side.saturating_mul(CELL_COLUMNS).saturating_add(2);
    let height = side.saturating_add(2).saturating_add(1);
    (width, height)
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameSession) {
    let area = frame.area();
    let (width, height) = required_size(state.board());
    if area.width < width || area.height < height {
        render_too_small(frame, area, (width, height));
        return;
    }

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [column] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    let play_area = render_hud(frame, column, state);

    let block = Block::bordered().style(Style::new().bg(BOARD_BG));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_cell(frame, inner, state.board(), state.food.position, Style::new().fg(FOOD_COLOR));
    for cell in state.snake.cells() {
        render_cell(frame, inner, state.board(), *cell, Style::new().fg(SNAKE_COLOR));
    }

    if state.status == GameStatus::GameOver {
        render_game_over_menu(
            frame,
            play_area,
            state.snake.size(),
            state.score,
            state.death_reason,
        );
    }
}

fn render_cell(frame: &mut Frame<'_>, inner: Rect, board: Board, cell: Cell, style: Style) {
    let Some((x, y)) = cell_to_terminal(inner, board, cell) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, GLYPH_CELL, style);
}

/// Maps a board cell to the terminal position of its left column.
fn cell_to_terminal(inner: Rect, board: Board, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(board) {
        return None;
    }

    let (column, row) = cell.grid_index(board);
    let x_offset = u16::try_from(column).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
