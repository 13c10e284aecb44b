use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates, wall ring included.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring position one cell away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies on or outside the wall ring.
    /// The outermost row and column on each side are wall, not floor.
    #[must_use]
    pub fn hits_wall(self, bounds: GridSize) -> bool {
        self.x <= 0
            || self.y <= 0
            || self.x >= i32::from(bounds.width) - 1
            || self.y >= i32::from(bounds.height) - 1
    }
}

/// Snake body as an ordered position sequence, head at the front.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a horizontal snake of `len` segments centered in `bounds`,
    /// laid out to travel rightward: the head is at the grid center and the
    /// body trails off to the left.
    #[must_use]
    pub fn centered_in(bounds: GridSize, len: usize) -> Self {
        let center = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let mut body = VecDeque::with_capacity(len);
        let mut x = center.x;
        for _ in 0..len {
            body.push_back(Position { x, y: center.y });
            x -= 1;
        }
        Self { body }
    }

    /// Creates a snake from explicit segments, head first.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    ///
    /// # Panics
    ///
    /// Panics if the snake has no segments; every constructor produces at
    /// least one and nothing removes the final segment.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Prepends a new head segment.
    pub fn push_head(&mut self, position: Position) {
        self.body.push_front(position);
    }

    /// Removes the tail segment.
    pub fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
