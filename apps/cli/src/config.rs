use std::time::Duration;

use readalong_highlight::SyncConfig;

/// Session settings resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub sync: SyncConfig,
    /// Cadence of clock samples from the simulated engine.
    pub tick: Duration,
    /// Seconds of audio per second of wall clock.
    pub rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sync: SyncConfig::default(),
            tick: Duration::from_millis(250),
            rate: 1.0,
        }
    }
}
