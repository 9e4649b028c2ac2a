use std::time::{Duration, Instant};

use crate::game::RoundSummary;

/// In-memory session statistics; nothing is persisted
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Most food eaten in one round
    pub best_score: u32,
    /// Longest snake seen in a finished round
    pub best_length: usize,
    pub rounds_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            best_length: 1,
            rounds_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, round: RoundSummary) {
        self.rounds_played += 1;
        self.best_score = self.best_score.max(round.score);
        self.best_length = self.best_length.max(round.length);
        self.on_round_start();
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(score: u32, length: usize) -> RoundSummary {
        RoundSummary {
            score,
            length,
            ticks: 10,
            filled_board: false,
        }
    }

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_round_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_round_over(round(10, 11));
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.rounds_played, 1);

        metrics.on_round_over(round(5, 6));
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.best_length, 11);
        assert_eq!(metrics.rounds_played, 2);

        metrics.on_round_over(round(15, 16));
        assert_eq!(metrics.best_score, 15);
        assert_eq!(metrics.best_length, 16);
        assert_eq!(metrics.rounds_played, 3);
    }

    #[test]
    fn test_round_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_round_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
