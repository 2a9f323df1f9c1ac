//! Cancellable countdown timing.
//!
//! A countdown runs `iterations` ticks spaced `interval` apart. Each tick
//! advances the progress bar by `100 / iterations` percent; the last tick
//! commits the pending action.

pub mod timer;

use crate::config::model::CountdownConfig;
use std::time::Duration;

/// Identifies one run of a countdown. A fresh ticket is issued every time a
/// countdown starts so ticks from an aborted run can be told apart.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownSettings {
    pub interval: Duration,
    pub iterations: u32,
}

impl CountdownSettings {
    pub fn new(cancel_timeout: Duration, progress_interval: Duration) -> Self {
        let interval = progress_interval.max(Duration::from_millis(1));
        let iterations = (cancel_timeout.as_millis() / interval.as_millis()).clamp(1, u32::MAX as u128);
        Self {
            interval,
            iterations: iterations as u32,
        }
    }

    pub fn from_config(config: &CountdownConfig) -> Self {
        Self::new(
            Duration::from_millis(config.cancel_timeout_ms),
            Duration::from_millis(config.progress_interval_ms),
        )
    }

    /// Percent added per tick.
    pub fn step(&self) -> f64 {
        100.0 / self.iterations as f64
    }
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self::from_config(&CountdownConfig::default())
    }
}
