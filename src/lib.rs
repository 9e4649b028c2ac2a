//! Torus Snake - a terminal Snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic (game module), free of I/O
//! - TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - Session statistics (metrics module)
//! - Execution modes: interactive human play and headless autoplay (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
