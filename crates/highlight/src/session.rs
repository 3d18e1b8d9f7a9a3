use readalong_timing::TimingIndex;

use crate::control::{PlayControl, PlayLabel};
use crate::controller::{HighlightController, HighlightState};
use crate::error::Error;
use crate::playback::{PlaybackEngine, PlaybackEvent};
use crate::seek::seek_target;
use crate::surface::{RenderedWords, WordSurface, apply};

/// One document/recording pair, wired to a surface and an engine.
///
/// Every entry point runs to completion before returning. Engine notifications
/// caused by a command (a seek's time update, the `Play` after `play()`) must be
/// delivered through [`Session::handle`] afterwards, never from inside the
/// engine call.
pub struct Session<S: WordSurface, E: PlaybackEngine> {
    index: TimingIndex,
    controller: HighlightController,
    words: RenderedWords<S::Handle>,
    surface: S,
    engine: E,
    playing: bool,
    control: PlayControl,
}

impl<S: WordSurface, E: PlaybackEngine> Session<S, E> {
    pub fn new(index: TimingIndex, words: RenderedWords<S::Handle>, surface: S, engine: E) -> Self {
        if words.len() != index.len() {
            tracing::warn!(
                words = words.len(),
                timings = index.len(),
                "word_count_mismatch"
            );
        }

        Self {
            index,
            controller: HighlightController::new(),
            words,
            surface,
            engine,
            playing: false,
            control: PlayControl::ready(),
        }
    }

    pub fn handle(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::TimeUpdate(t) => {
                if let Some(transition) = self.controller.sample(&self.index, t) {
                    tracing::debug!(
                        t,
                        deactivate = ?transition.deactivate,
                        activate = ?transition.activate,
                        "highlight_transition"
                    );
                    apply(&mut self.surface, &self.words, transition);
                }
            }
            PlaybackEvent::Play => {
                self.playing = true;
                self.control.label = PlayLabel::Pause;
            }
            PlaybackEvent::Pause => {
                self.playing = false;
                self.control.label = PlayLabel::Play;
            }
            PlaybackEvent::Ended => {
                if let Some(transition) = self.controller.on_playback_end() {
                    apply(&mut self.surface, &self.words, transition);
                }
                self.control.label = PlayLabel::Play;
                tracing::debug!("playback_ended");
            }
        }
    }

    /// Seek to the clicked word and start playback if it is not running.
    ///
    /// Returns the seek target, or `None` when the word has no known onset.
    pub fn click(&mut self, index: usize) -> Result<Option<f64>, Error> {
        let Some(target) = seek_target(self.index.table(), index, self.index.padding()) else {
            tracing::debug!(index, "click_without_timing");
            return Ok(None);
        };

        tracing::debug!(index, target, "click_seek");
        self.engine.seek(target);
        if !self.playing {
            self.engine.play().map_err(Error::Playback)?;
        }
        Ok(Some(target))
    }

    pub fn toggle_playback(&mut self) -> Result<(), Error> {
        if self.engine.is_paused() {
            self.engine.play().map_err(Error::Playback)
        } else {
            self.engine.pause();
            Ok(())
        }
    }

    pub fn state(&self) -> HighlightState {
        self.controller.state()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.controller.active_index()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn control(&self) -> PlayControl {
        self.control
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
