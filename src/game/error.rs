use thiserror::Error;

/// Failures surfaced by the game engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Food placement found no free cell
    #[error("no free cell left for food on a {width}x{height} grid")]
    GridFull { width: usize, height: usize },
}
