//! Error types for grid construction and settings validation.

use thiserror::Error;

/// Failures when building a [`Grid`](crate::domain::Grid).
///
/// Once a grid exists nothing else can fail: `tick` is total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Width or height is zero.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },
    /// Seed probability is NaN or outside `[0, 1]`.
    #[error("invalid seed probability {0}: must lie in [0, 1]")]
    InvalidProbability(f64),
    /// An explicit cell buffer does not hold `width * height` entries.
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}

/// Failures when validating [`Settings`](crate::config::Settings).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("invalid cell size {0}: must be a positive number of pixels")]
    InvalidCellSize(f32),
    #[error("tick interval must be at least 1 ms")]
    InvalidInterval,
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
    #[error("pattern '{name}' ({pattern_width}x{pattern_height}) does not fit a {width}x{height} grid")]
    PatternTooLarge {
        name: String,
        pattern_width: usize,
        pattern_height: usize,
        width: usize,
        height: usize,
    },
}
