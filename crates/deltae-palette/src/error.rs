//! Error types for palette generation.

use thiserror::Error;

/// Error type for palette generation and configuration.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Candidate grid resolution out of range.
    #[error("grid needs 2 to 256 levels per channel, got {0}")]
    InvalidGrid(usize),

    /// Plain-text configuration could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),

    /// YAML configuration could not be parsed or written.
    #[error("YAML config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;
