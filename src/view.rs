use std::iter;

use crate::config::GridSize;
use crate::game::GameState;
use crate::snake::Position;

/// Semantic tag for a drawable cell; the renderer picks glyph and color.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    SnakeHead,
    SnakeBody,
    Food,
}

/// Read-only projection of the game state for one frame.
///
/// Borrowing instead of copying keeps the per-frame cost at zero while the
/// type system still guarantees the renderer cannot mutate the engine.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    state: &'a GameState,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Iterates over every occupied cell with its semantic tag.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellKind)> + 'a {
        let state = self.state;
        let snake = state.snake.segments().enumerate().map(|(i, segment)| {
            let kind = if i == 0 {
                CellKind::SnakeHead
            } else {
                CellKind::SnakeBody
            };
            (*segment, kind)
        });
        snake.chain(iter::once((state.food, CellKind::Food)))
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.state.bounds()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::game::GameState;
    use crate::snake::Position;

    use super::CellKind;

    #[test]
    fn view_tags_head_body_and_food() {
        let state = GameState::new_with_seed(
            GridSize {
                width: 10,
                height: 10,
            },
            1,
        );
        let view = state.view();

        let cells: Vec<_> = view.cells().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], (Position { x: 5, y: 5 }, CellKind::SnakeHead));
        assert_eq!(cells[1].1, CellKind::SnakeBody);
        assert_eq!(cells[2].1, CellKind::SnakeBody);
        assert_eq!(cells[3], (state.food, CellKind::Food));
    }

    #[test]
    fn view_mirrors_scores_and_flags() {
        let mut state = GameState::new_with_seed(
            GridSize {
                width: 10,
                height: 10,
            },
            2,
        );
        state.score = 20;
        state.high_score = 90;
        state.is_over = true;

        let view = state.view();
        assert_eq!(view.score(), 20);
        assert_eq!(view.high_score(), 90);
        assert!(view.is_over());
        assert_eq!(view.bounds().width, 10);
    }
}
