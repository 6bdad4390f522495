use rand::Rng;

use crate::config::{Board, PLACEMENT_ATTEMPTS_PER_CELL};
use crate::error::GameError;
use crate::snake::{Cell, Snake};

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at a fixed `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        board: Board,
        snake: &Snake,
    ) -> Result<Self, GameError> {
        place(rng, board, |cell| snake.occupies(cell)).map(Self::at)
    }
}

/// Picks a uniformly random board cell for which `excluded` is false.
///
/// Draws are retried a bounded number of times; once the budget runs out the
/// free cells are enumerated instead, so a nearly full board still terminates.
pub fn place<R, F>(rng: &mut R, board: Board, excluded: F) -> Result<Cell, GameError>
where
    R: Rng + ?Sized,
    F: Fn(Cell) -> bool,
{
    let side = board.cells_per_side();
    if side <= 0 {
        return Err(GameError::NoFreeCell { side });
    }

    for _ in 0..board.total_cells() * PLACEMENT_ATTEMPTS_PER_CELL {
        let cell = random_cell(rng, board);
        if !excluded(cell) {
            return Ok(cell);
        }
    }

    log::debug!("food placement fell back to scanning free cells");

    let candidates: Vec<Cell> = (0..side)
        .flat_map(|row| (0..side).map(move |column| (column, row)))
        .map(|(column, row)| Cell::new(column * board.unit, row * board.unit))
        .filter(|cell| !excluded(*cell))
        .collect();

    if candidates.is_empty() {
        return Err(GameError::NoFreeCell { side });
    }

    Ok(candidates[rng.gen_range(0..candidates.len())])
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Cell {
    let side = board.cells_per_side();
    Cell::new(
        rng.gen_range(0..side) * board.unit,
        rng.gen_range(0..side) * board.unit,
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::Board;
    use crate::error::GameError;
    use crate::snake::{Cell, Snake};

    use super::{Food, place};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_cells(vec![
            Cell::new(100, 0),
            Cell::new(50, 0),
            Cell::new(0, 0),
        ]);

        for _ in 0..200 {
            let food = Food::spawn(&mut rng, Board::default(), &snake)
                .expect("board has free cells");
            assert!(!snake.occupies(food.position));
            assert!(food.position.is_within_bounds(Board::default()));
            assert_eq!(food.position.x % 50, 0);
            assert_eq!(food.position.y % 50, 0);
        }
    }

    #[test]
    fn single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board { dim: 150, unit: 50 };
        let free = Cell::new(100, 50);

        let cell = place(&mut rng, board, |cell| cell != free).expect("one cell is free");

        assert_eq!(cell, free);
    }

    #[test]
    fn full_board_is_an_error() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board { dim: 100, unit: 50 };

        let result = place(&mut rng, board, |_| true);

        assert_eq!(result, Err(GameError::NoFreeCell { side: 2 }));
    }
}
