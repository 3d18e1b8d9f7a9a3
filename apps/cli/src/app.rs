use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use readalong_highlight::PlayControl;
use readalong_recording_client::{ContentStatus, LoadError, Prepared};

use crate::config::Settings;
use crate::runtime::SessionRuntime;
use crate::surface::TextSurface;

pub struct App {
    live: Option<SessionRuntime<TextSurface>>,
    status: Option<ContentStatus>,
    error: Option<String>,
    cursor: usize,
    last_tick: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(loaded: Result<Prepared, LoadError>, settings: &Settings) -> Self {
        let (live, status, error) = match loaded {
            Ok(prepared) => {
                let (surface, handles) = TextSurface::render(prepared.words);
                let runtime = SessionRuntime::new(prepared.timings, handles, surface, settings);
                (Some(runtime), Some(ContentStatus::Matches), None)
            }
            Err(LoadError::ContentMismatch) => (
                None,
                Some(ContentStatus::Mismatch),
                Some(LoadError::ContentMismatch.to_string()),
            ),
            Err(error) => (None, None, Some(error.to_string())),
        };

        Self {
            live,
            status,
            error,
            cursor: 0,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.toggle_playback(),
            KeyCode::Enter => self.click(self.cursor),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.last_word()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.last_word(),
            _ => {}
        }
    }

    pub fn on_tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        self.advance(elapsed);
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if let Some(live) = self.live.as_mut() {
            if live.advance(elapsed) {
                tracing::info!("playback_finished");
            }
        }
    }

    fn toggle_playback(&mut self) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        self.last_tick = Instant::now();
        if let Err(error) = live.toggle_playback() {
            tracing::error!(%error, "toggle_failed");
            self.error = Some(error.to_string());
        }
    }

    fn click(&mut self, index: usize) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        self.last_tick = Instant::now();
        if let Err(error) = live.click(index) {
            tracing::error!(%error, index, "click_failed");
            self.error = Some(error.to_string());
        }
    }

    fn last_word(&self) -> usize {
        self.words().len().saturating_sub(1)
    }

    pub fn words(&self) -> &[String] {
        self.surface().map(TextSurface::words).unwrap_or_default()
    }

    pub fn surface(&self) -> Option<&TextSurface> {
        self.live.as_ref().map(|live| live.session().surface())
    }

    pub fn control(&self) -> PlayControl {
        self.live
            .as_ref()
            .map_or_else(PlayControl::disabled, |live| live.session().control())
    }

    /// Playback position and duration in seconds.
    pub fn clock(&self) -> Option<(f64, f64)> {
        self.live.as_ref().map(|live| {
            let player = live.session().engine();
            (player.position(), player.duration())
        })
    }

    pub fn status(&self) -> Option<ContentStatus> {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
