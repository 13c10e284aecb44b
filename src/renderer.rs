use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::{
    GridSize, COLOR_BORDER, COLOR_FOOD, COLOR_SNAKE, COLOR_STATUS, GLYPH_FOOD, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD,
};
use crate::snake::Position;
use crate::view::{CellKind, GameView};

/// Renders one full frame from an immutable view: the walled grid, every
/// occupied cell, and the two status lines beneath.
pub fn render(frame: &mut Frame<'_>, view: &GameView<'_>) {
    let area = frame.area();
    let [grid_area, score_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let grid = clamp_to_bounds(grid_area, view.bounds());
    // The double-line border doubles as the wall ring; cells the engine
    // treats as wall are exactly the cells the border occupies.
    let block = Block::bordered()
        .border_set(border::DOUBLE)
        .border_style(Style::new().fg(COLOR_BORDER));
    frame.render_widget(block, grid);

    let buffer = frame.buffer_mut();
    for (position, kind) in view.cells() {
        let Some((x, y)) = cell_to_screen(grid, position) else {
            continue;
        };
        let (glyph, style) = match kind {
            CellKind::SnakeHead => (
                GLYPH_SNAKE_HEAD,
                Style::new().fg(COLOR_SNAKE).add_modifier(Modifier::BOLD),
            ),
            CellKind::SnakeBody => (GLYPH_SNAKE_BODY, Style::new().fg(COLOR_SNAKE)),
            CellKind::Food => (GLYPH_FOOD, Style::new().fg(COLOR_FOOD)),
        };
        buffer.set_string(x, y, glyph, style);
    }

    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "Score: {}    High Score: {}",
            view.score(),
            view.high_score()
        )))
        .style(Style::new().fg(COLOR_STATUS)),
        score_area,
    );

    let status = if view.is_over() {
        "GAME OVER! Press 'R' to restart, 'Q' to quit"
    } else {
        "Use Arrow Keys or WASD to move, Q to quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(status))
            .alignment(Alignment::Center)
            .style(Style::new().fg(COLOR_STATUS)),
        status_area,
    );
}

/// Shrinks the layout slot to the logical grid so the border lands on the
/// wall ring even when the terminal grew since startup.
fn clamp_to_bounds(slot: Rect, bounds: GridSize) -> Rect {
    Rect::new(
        slot.x,
        slot.y,
        slot.width.min(bounds.width),
        slot.height.min(bounds.height),
    )
}

/// Maps a logical cell to buffer coordinates, skipping anything that falls
/// outside the visible grid rectangle.
fn cell_to_screen(grid: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = grid.x.saturating_add(x_offset);
    let y = grid.y.saturating_add(y_offset);
    if x >= grid.right() || y >= grid.bottom() {
        return None;
    }

    Some((x, y))
}
