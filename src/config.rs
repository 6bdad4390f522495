use ratatui::style::Color;

/// Board edge length in board units (pixels of the classic canvas).
pub const BOARD_DIM: i32 = 650;

/// Edge length of one cell in board units.
pub const UNIT_SIZE: i32 = 50;

/// Tick interval at session start, in milliseconds.
pub const SPEED_START_MS: u64 = 150;

/// Tick interval reduction applied per size step.
pub const SPEED_INTERVAL_MS: u64 = 12;

/// Number of size increments per speed step.
pub const SIZE_INTERVAL: usize = 5;

/// Lower bound for the tick interval.
pub const SPEED_FLOOR_MS: u64 = 40;

/// Speed is recomputed only while the snake is at most this long.
pub const SPEED_SIZE_CAP: usize = 45;

/// Flat score awarded per food.
pub const SCORE_BASE: u32 = 50;

/// Score awarded per snake segment after eating.
pub const SCORE_PER_SEGMENT: u32 = 10;

/// Random draws attempted per cell before food placement falls back to a scan.
pub const PLACEMENT_ATTEMPTS_PER_CELL: usize = 8;

pub const SNAKE_COLOR: Color = Color::Rgb(0x17, 0xCD, 0x17);
pub const FOOD_COLOR: Color = Color::Rgb(0xEC, 0x13, 0x13);
pub const BOARD_BG: Color = Color::Black;
pub const GAME_OVER_COLOR: Color = Color::Red;

/// Glyph drawn for one cell; two columns wide so cells look square.
pub const GLYPH_CELL: &str = "██";

/// Terminal columns used per cell.
pub const CELL_COLUMNS: u16 = 2;

/// Square playing field measured in board units.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub dim: i32,
    pub unit: i32,
}

impl Board {
    /// Number of cells along one edge.
    #[must_use]
    pub fn cells_per_side(self) -> i32 {
        self.dim / self.unit
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        let side = usize::try_from(self.cells_per_side()).unwrap_or(0);
        side * side
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            dim: BOARD_DIM,
            unit: UNIT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Board;

    #[test]
    fn default_board_is_thirteen_cells_wide() {
        let board = Board::default();

        assert_eq!(board.cells_per_side(), 13);
        assert_eq!(board.total_cells(), 169);
    }
}
