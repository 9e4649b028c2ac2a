//! Core game logic module for Snake
//!
//! Pure state transitions on a wrap-around grid. No I/O or rendering
//! dependencies; randomness comes in through `RandomSource`.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod rng;
pub mod snake;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{GameConfig, MAX_GRID_SIDE, MIN_GRID_CELLS};
pub use engine::{GameEngine, RoundSummary, TickReport};
pub use error::GameError;
pub use food::Food;
pub use grid::{Cell, Grid};
pub use rng::{RandomSource, SequenceRng, SessionRng};
pub use snake::{Snake, StepOutcome};
