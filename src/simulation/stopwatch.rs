/*!
 * Stopwatch
 * Wall-clock instrumentation for simulation runs
 */

use std::time::{Duration, Instant};

/// Unit for reading elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Microseconds,
    Milliseconds,
    Seconds,
}

/// Start/stop wall-clock timer; never affects simulated time
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    elapsed: Duration,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing from now, discarding any previous measurement
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn stop(&mut self) {
        if let (true, Some(started)) = (self.running, self.started) {
            self.elapsed = started.elapsed();
            self.running = false;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed time so far while running, or the stopped measurement
    pub fn elapsed(&self) -> Duration {
        match (self.running, self.started) {
            (true, Some(started)) => started.elapsed(),
            _ => self.elapsed,
        }
    }

    pub fn elapsed_in(&self, unit: TimeUnit) -> f64 {
        let elapsed = self.elapsed();
        match unit {
            TimeUnit::Microseconds => elapsed.as_secs_f64() * 1_000_000.0,
            TimeUnit::Milliseconds => elapsed.as_secs_f64() * 1_000.0,
            TimeUnit::Seconds => elapsed.as_secs_f64(),
        }
    }
}
