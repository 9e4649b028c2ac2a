//! Terminal-free autoplay.
//!
//! Drives the engine for a fixed number of ticks, turning to a random
//! heading every few ticks. Handy for smoke runs and for checking that a
//! seed reproduces the same session.

use anyhow::{Context, Result};
use log::info;

use crate::game::{Action, Direction, GameConfig, GameEngine, SessionRng, StepOutcome};
use crate::metrics::GameMetrics;

/// Ticks between two random turns
const TURN_EVERY: u64 = 4;

/// Totals of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub ticks: u64,
    pub food_eaten: u64,
    pub rounds: u32,
    pub best_length: usize,
    pub seed: u64,
}

pub struct HeadlessMode {
    engine: GameEngine,
    driver: SessionRng,
    metrics: GameMetrics,
}

impl HeadlessMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let engine = GameEngine::from_config(config).context("Failed to start game")?;
        // Derived from the engine seed so a run replays exactly
        let driver = SessionRng::new(engine.seed().wrapping_add(1));

        Ok(Self {
            engine,
            driver,
            metrics: GameMetrics::new(),
        })
    }

    pub fn run(&mut self, ticks: u64) -> Result<HeadlessSummary> {
        let mut food_eaten = 0;
        let mut best_length = self.engine.snake().len();

        for tick in 0..ticks {
            let action = if tick % TURN_EVERY == 0 {
                Action::Move(Direction::random(&mut self.driver))
            } else {
                Action::Continue
            };

            let report = self.engine.tick(action).context("Game tick failed")?;
            if report.outcome == StepOutcome::Ate {
                food_eaten += 1;
            }
            if let Some(round) = report.finished_round {
                self.metrics.on_round_over(round);
            }
            best_length = best_length.max(self.engine.snake().len());
        }

        let summary = HeadlessSummary {
            ticks: self.engine.ticks(),
            food_eaten,
            rounds: self.metrics.rounds_played,
            best_length: best_length.max(self.metrics.best_length),
            seed: self.engine.seed(),
        };
        info!("Headless run finished: {:?}", summary);
        Ok(summary)
    }
}

impl HeadlessSummary {
    pub fn format_summary(&self) -> String {
        format!(
            "ticks: {}\nfood eaten: {}\nrounds ended: {}\nbest length: {}\nseed: {}",
            self.ticks, self.food_eaten, self.rounds, self.best_length, self.seed
        )
    }
}
