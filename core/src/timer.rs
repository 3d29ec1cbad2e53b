use core::time::Duration;
use web_time::Instant;

/// Stopwatch that accumulates time while the game is being played.
#[derive(Clone, Debug, Default)]
pub struct GameTimer {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl GameTimer {
    /// Starts counting, does nothing if already running.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Stops counting and keeps the elapsed time, safe to call when not running.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.accumulated
            + self
                .started_at
                .map(|started_at| started_at.elapsed())
                .unwrap_or_default()
    }

    /// Whole seconds elapsed, the value a once-per-second display shows.
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed().as_secs().try_into().unwrap_or(u32::MAX)
    }
}
