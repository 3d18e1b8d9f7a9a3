use std::time::Duration;

use readalong_highlight::{EngineError, PlaybackEngine, PlaybackEvent};
use readalong_timing::TimingTable;
use tokio::sync::mpsc;

/// Silence assumed after the last timed word.
const TAIL_SECS: f64 = 0.5;

/// Stand-in for an audio engine: a clock that only moves when advanced.
///
/// Notifications are queued on a channel instead of being delivered inline,
/// so commands issued by the session never re-enter it.
pub struct SimulatedPlayer {
    position: f64,
    duration: f64,
    rate: f64,
    paused: bool,
    ended: bool,
    tx: mpsc::UnboundedSender<PlaybackEvent>,
}

impl SimulatedPlayer {
    pub fn new(duration: f64, rate: f64, tx: mpsc::UnboundedSender<PlaybackEvent>) -> Self {
        Self {
            position: 0.0,
            duration: duration.max(0.0),
            rate,
            paused: true,
            ended: false,
            tx,
        }
    }

    /// Recording length implied by the timings.
    pub fn duration_for(timings: &TimingTable) -> f64 {
        timings
            .latest_time()
            .map_or(0.0, |latest| latest.max(0.0) + TAIL_SECS)
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Move the clock forward by `elapsed` wall time and report the new position.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }

        self.position = (self.position + elapsed.as_secs_f64() * self.rate).min(self.duration);
        self.emit(PlaybackEvent::TimeUpdate(self.position));

        if self.position >= self.duration {
            self.paused = true;
            self.ended = true;
            self.emit(PlaybackEvent::Pause);
            self.emit(PlaybackEvent::Ended);
        }
    }

    fn emit(&self, event: PlaybackEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!(?event, "player_event_dropped");
        }
    }
}

impl PlaybackEngine for SimulatedPlayer {
    fn seek(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
        self.ended = false;
        self.emit(PlaybackEvent::TimeUpdate(self.position));
    }

    fn play(&mut self) -> Result<(), EngineError> {
        if self.ended {
            self.ended = false;
            self.position = 0.0;
        }
        if self.paused {
            self.paused = false;
            self.emit(PlaybackEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.emit(PlaybackEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
