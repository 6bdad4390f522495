use std::collections::VecDeque;

use crate::config::Board;
use crate::input::Direction;

/// Grid cell in board units; both coordinates are multiples of the unit size.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies inside the board.
    #[must_use]
    pub fn is_within_bounds(self, board: Board) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < board.dim && self.y < board.dim
    }

    /// Returns the neighbouring cell one unit away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction, unit: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * unit,
            y: self.y + dy * unit,
        }
    }

    /// Column and row of this cell on the board grid.
    #[must_use]
    pub fn grid_index(self, board: Board) -> (i32, i32) {
        (self.x / board.unit, self.y / board.unit)
    }
}

/// Snake body (head first) and its target length.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    size: usize,
}

impl Snake {
    /// Creates a snake from explicit body cells (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        assert!(!cells.is_empty(), "snake needs at least one cell");
        let size = cells.len();
        Self {
            body: VecDeque::from(cells),
            size,
        }
    }

    /// Moves the head to `new_head`, keeping the tail when `grow` is set.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if grow {
            self.size += 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one cell")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_collides_with_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Target length; grows by one per food eaten.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::Board;
    use crate::input::Direction;

    use super::{Cell, Snake};

    fn two_cell_snake() -> Snake {
        Snake::from_cells(vec![Cell::new(100, 0), Cell::new(50, 0)])
    }

    #[test]
    fn step_moves_one_unit() {
        let cell = Cell::new(100, 100);

        assert_eq!(cell.step(Direction::Up, 50), Cell::new(100, 50));
        assert_eq!(cell.step(Direction::Left, 50), Cell::new(50, 100));
    }

    #[test]
    fn bounds_exclude_board_edge() {
        let board = Board::default();

        assert!(Cell::new(0, 600).is_within_bounds(board));
        assert!(!Cell::new(650, 0).is_within_bounds(board));
        assert!(!Cell::new(-50, 0).is_within_bounds(board));
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = two_cell_snake();

        snake.advance(Cell::new(150, 0), false);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.size(), 2);
        assert_eq!(
            snake.cells().copied().collect::<Vec<_>>(),
            vec![Cell::new(150, 0), Cell::new(100, 0)]
        );
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = two_cell_snake();

        snake.advance(Cell::new(150, 0), true);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.size(), 3);
        assert!(snake.occupies(Cell::new(50, 0)));
    }

    #[test]
    fn body_stays_distinct_while_moving_in_a_loop() {
        let mut snake = Snake::from_cells(vec![Cell::new(50, 50), Cell::new(0, 50)]);
        let path = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Down,
        ];

        for (step, direction) in path.iter().cycle().take(12).enumerate() {
            let next = snake.head().step(*direction, 50);
            snake.advance(next, step % 3 == 0);

            let distinct: HashSet<_> = snake.cells().copied().collect();
            assert_eq!(distinct.len(), snake.len());
            assert_eq!(snake.len(), snake.size());
        }
    }

    #[test]
    fn head_on_neck_counts_as_collision() {
        let snake = Snake::from_cells(vec![
            Cell::new(50, 50),
            Cell::new(100, 50),
            Cell::new(100, 100),
            Cell::new(50, 100),
            Cell::new(50, 50),
        ]);

        assert!(snake.head_collides_with_body());
        assert!(!two_cell_snake().head_collides_with_body());
    }
}
