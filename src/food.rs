use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random draws attempted before falling back to enumerating free cells.
const MAX_SAMPLING_ATTEMPTS: u32 = 128;

/// Picks a cell for the next food item: uniformly random over all playable
/// cells not occupied by the snake.
///
/// Rejection sampling is cheap while the board is mostly empty, but would
/// spin arbitrarily long on a nearly full board, so after a bounded number
/// of attempts the free cells are enumerated and one is drawn directly.
/// Returns `None` only when the snake covers every playable cell.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Position> {
    let max_x = i32::from(bounds.width) - 2;
    let max_y = i32::from(bounds.height) - 2;
    if max_x < 1 || max_y < 1 || snake.len() >= bounds.playable_cells() {
        return None;
    }

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(1..=max_x),
            y: rng.gen_range(1..=max_y),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Position> = (1..=max_y)
        .flat_map(|y| (1..=max_x).map(move |x| Position { x, y }))
        .filter(|cell| !snake.occupies(*cell))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;

    use super::spawn;
    use crate::snake::{Position, Snake};

    #[test]
    fn food_spawns_inside_walls_and_off_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };
        let snake = Snake::from_segments(vec![
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);

        for _ in 0..200 {
            let food = spawn(&mut rng, bounds, &snake).expect("free cells remain");
            assert!(!snake.occupies(food));
            assert!(!food.hits_wall(bounds));
        }
    }

    #[test]
    fn crowded_board_still_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 4,
            height: 4,
        };
        // Playable cells are (1,1), (2,1), (1,2), (2,2); leave only (2,2).
        let snake = Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 1, y: 2 },
        ]);

        let food = spawn(&mut rng, bounds, &snake).expect("one cell is free");
        assert_eq!(food, Position { x: 2, y: 2 });
    }

    #[test]
    fn full_board_yields_no_food() {
        let mut rng = StdRng::seed_from_u64(13);
        let bounds = GridSize {
            width: 4,
            height: 4,
        };
        let snake = Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);

        assert_eq!(spawn(&mut rng, bounds, &snake), None);
    }
}
