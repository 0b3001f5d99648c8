use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// In-memory statistics for one play session
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub food_eaten: u32,
    pub resets: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 1,
            food_eaten: 0,
            resets: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold one tick's outcome into the totals
    pub fn record(&mut self, outcome: &TickOutcome) {
        if outcome.ate_food {
            self.food_eaten += 1;
        }
        self.best_length = self.best_length.max(outcome.length);
        if outcome.collided || outcome.filled_board {
            self.on_round_start();
        }
    }

    /// A new round began, either after a reset or a manual restart
    pub fn on_round_start(&mut self) {
        self.resets += 1;
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
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
