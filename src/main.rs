use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use grid_snake::config::Board;
use grid_snake::error::AppError;
use grid_snake::game::{GameSession, InputEffect, TickOutcome};
use grid_snake::input::InputHandler;
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::timer::TickSchedule;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Upper bound on how long one input poll may block, so the frame redraws.
const FRAME_POLL: Duration = Duration::from_millis(16);

const DEFAULT_LOG_FILE_NAME: &str = "grid-snake.log";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for the food sequence; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives the game log [default: <temp dir>/grid-snake.log].
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let board = Board::default();
    let state = match cli.seed {
        Some(seed) => GameSession::new_with_seed(board, seed)?,
        None => GameSession::new(board)?,
    };

    let result = run(state);
    if let Err(error) = &result {
        log::error!("{error}");
    }
    result
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME));

    WriteLogger::init(cli.log_level.into(), Config::default(), File::create(&path)?)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn run(mut state: GameSession) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut schedule = TickSchedule::armed(Instant::now(), state.tick_interval());

    loop {
        terminal.draw(&state)?;

        let timeout = schedule
            .remaining(Instant::now())
            .map_or(FRAME_POLL, |remaining| remaining.min(FRAME_POLL));

        if let Some(game_input) = input.poll_input(timeout)? {
            match state.apply_input(game_input)? {
                InputEffect::Quit => break,
                InputEffect::Restarted(delay) => schedule.arm(Instant::now(), delay),
                InputEffect::Steered | InputEffect::Ignored => {}
            }
        }

        if schedule.is_due(Instant::now()) {
            match state.tick()? {
                TickOutcome::Continue(delay) => schedule.arm(Instant::now(), delay),
                TickOutcome::GameOver(_) | TickOutcome::Idle => schedule.disarm(),
            }
        }
    }

    log::info!("quit with score {}", state.score);
    Ok(())
}
