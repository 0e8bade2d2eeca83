use std::io;

use thiserror::Error;

use crate::fruit::PlacementError;

/// Failures that end the program before the player asks it to.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not start logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("could not build a new game: {0}")]
    Placement(#[from] PlacementError),
}
