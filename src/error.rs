use std::io;

use thiserror::Error;

/// Fatal conditions raised by the game core.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GameError {
    /// Every cell of the board is covered by the snake.
    #[error("no free cell left for food on a {side}x{side} board")]
    NoFreeCell { side: i32 },
}

/// Errors that end the terminal application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Game(#[from] GameError),
}
