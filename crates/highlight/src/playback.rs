pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// Commands the session issues to the audio engine.
///
/// Implementations must not call back into the session from these methods.
/// Position changes and play state are reported later as [`PlaybackEvent`]s.
pub trait PlaybackEngine {
    fn seek(&mut self, seconds: f64);
    fn play(&mut self) -> Result<(), EngineError>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
}

/// Notifications from the audio engine, in the order it produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    /// Current position in seconds. Emitted at the engine's own cadence and
    /// after every seek.
    TimeUpdate(f64),
    Play,
    Pause,
    Ended,
}
