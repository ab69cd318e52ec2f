//! Errors of the command-line harness. The search crates never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("invalid coordinate {0:?}, expected X,Y")]
    Coordinate(String),

    #[error("invalid paint {0:?}, expected X,Y,DELTA")]
    Paint(String),

    #[error("cell size must be positive, got {0}")]
    CellSize(f32),

    #[error("grid dimensions must be positive, got {0}x{1}")]
    Dimensions(i32, i32),

    #[error("unknown log level {0:?}")]
    LogLevel(String),

    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type DemoResult<T> = Result<T, DemoError>;
