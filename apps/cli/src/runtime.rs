use std::time::Duration;

use readalong_highlight::{Error, PlaybackEvent, RenderedWords, Session, WordSurface};
use readalong_timing::TimingTable;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::player::SimulatedPlayer;

/// A [`Session`] driven by the simulated engine through its event channel.
///
/// Every command is followed by [`SessionRuntime::pump`], so the session sees
/// the engine's notifications one at a time and after the command returned.
pub struct SessionRuntime<S: WordSurface> {
    session: Session<S, SimulatedPlayer>,
    events: mpsc::UnboundedReceiver<PlaybackEvent>,
}

impl<S: WordSurface> SessionRuntime<S> {
    pub fn new(
        timings: TimingTable,
        words: RenderedWords<S::Handle>,
        surface: S,
        settings: &Settings,
    ) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let player = SimulatedPlayer::new(
            SimulatedPlayer::duration_for(&timings),
            settings.rate,
            tx,
        );
        let session = Session::new(settings.sync.index(timings), words, surface, player);
        Self { session, events }
    }

    /// Deliver queued engine notifications. Returns `true` if playback ended.
    pub fn pump(&mut self) -> bool {
        let mut ended = false;
        while let Ok(event) = self.events.try_recv() {
            ended |= event == PlaybackEvent::Ended;
            self.session.handle(event);
        }
        ended
    }

    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.session.engine_mut().advance(elapsed);
        self.pump()
    }

    pub fn toggle_playback(&mut self) -> Result<(), Error> {
        let result = self.session.toggle_playback();
        self.pump();
        result
    }

    pub fn click(&mut self, index: usize) -> Result<Option<f64>, Error> {
        let result = self.session.click(index);
        self.pump();
        result
    }

    pub fn session(&self) -> &Session<S, SimulatedPlayer> {
        &self.session
    }

    pub fn into_surface(self) -> S {
        self.session.into_surface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TextSurface;
    use approx::assert_abs_diff_eq;
    use readalong_timing::WordTiming;

    fn runtime_with(timings: Vec<WordTiming>) -> SessionRuntime<TextSurface> {
        let (surface, handles) =
            TextSurface::render(vec!["hello".to_string(), "world".to_string()]);
        SessionRuntime::new(
            TimingTable::new(timings),
            handles,
            surface,
            &Settings::default(),
        )
    }

    fn runtime() -> SessionRuntime<TextSurface> {
        runtime_with(vec![WordTiming::new(0.0, 0.4), WordTiming::new(0.6, 0.9)])
    }

    #[test]
    fn nothing_moves_before_play() {
        let mut rt = runtime();
        assert!(!rt.advance(Duration::from_secs(1)));
        assert_eq!(rt.session().active_index(), None);
        assert!(!rt.session().is_playing());
    }

    #[test]
    fn ticks_drive_highlight_until_end() {
        let mut rt = runtime();
        rt.toggle_playback().unwrap();
        assert!(rt.session().is_playing());

        assert!(!rt.advance(Duration::from_millis(250)));
        assert_eq!(rt.session().active_index(), Some(0));
        assert!(rt.session().surface().is_active(0));

        assert!(!rt.advance(Duration::from_millis(500)));
        assert_eq!(rt.session().active_index(), Some(1));
        assert!(!rt.session().surface().is_active(0));

        // duration is 0.9 + 0.5
        assert!(rt.advance(Duration::from_secs(1)));
        assert_eq!(rt.session().active_index(), None);
        assert!(!rt.session().is_playing());
    }

    #[test]
    fn click_seeks_and_highlights_on_next_sample() {
        let mut rt = runtime();
        let target = rt.click(1).unwrap().unwrap();
        assert_abs_diff_eq!(target, 0.55, epsilon = 1e-9);

        // The seek's own time update already reconciled the highlight.
        assert!(rt.session().is_playing());
        assert_eq!(rt.session().active_index(), Some(1));
        assert_eq!(rt.session().surface().scroll_anchor(), Some(1));
    }

    #[test]
    fn click_on_final_word_without_end_seeks_there() {
        let mut rt = runtime_with(vec![
            WordTiming::new(0.0, 0.5),
            WordTiming {
                start: Some(2.0),
                end: None,
                text: None,
            },
        ]);

        let target = rt.click(1).unwrap().unwrap();
        assert_abs_diff_eq!(target, 1.95, epsilon = 1e-9);

        let player = rt.session().engine();
        assert_abs_diff_eq!(player.position(), 1.95, epsilon = 1e-9);
        assert_abs_diff_eq!(player.duration(), 2.5, epsilon = 1e-9);
        assert!(rt.session().is_playing());

        assert!(!rt.advance(Duration::from_millis(250)));
        assert!(rt.advance(Duration::from_millis(500)));
    }
}
