use std::io::Write;

use readalong_highlight::{RenderedWords, WordSurface};

/// Handle of one rendered word unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSlot(usize);

/// Word units drawn by the terminal UI.
pub struct TextSurface {
    words: Vec<String>,
    active: Vec<bool>,
    scroll_anchor: Option<usize>,
}

impl TextSurface {
    /// Lay out the words as units and hand back their handles.
    pub fn render(words: Vec<String>) -> (Self, RenderedWords<WordSlot>) {
        let handles = (0..words.len()).map(WordSlot).collect();
        let surface = Self {
            active: vec![false; words.len()],
            words,
            scroll_anchor: None,
        };
        (surface, handles)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Word the view should be centered on.
    pub fn scroll_anchor(&self) -> Option<usize> {
        self.scroll_anchor
    }
}

impl WordSurface for TextSurface {
    type Handle = WordSlot;

    fn set_active(&mut self, handle: &WordSlot, active: bool) {
        if let Some(flag) = self.active.get_mut(handle.0) {
            *flag = active;
        }
    }

    fn scroll_into_view(&mut self, handle: &WordSlot) {
        self.scroll_anchor = Some(handle.0);
    }
}

/// Writes one line per highlight change, for headless replays.
pub struct ConsoleSurface<W> {
    words: Vec<String>,
    out: W,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn render(words: Vec<String>, out: W) -> (Self, RenderedWords<usize>) {
        let handles = (0..words.len()).collect();
        (Self { words, out }, handles)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WordSurface for ConsoleSurface<W> {
    type Handle = usize;

    fn set_active(&mut self, handle: &usize, active: bool) {
        let marker = if active { '+' } else { '-' };
        let word = self.words.get(*handle).map_or("", String::as_str);
        if let Err(error) = writeln!(self.out, "{marker} [{handle}] {word}") {
            tracing::warn!(%error, "console_write_failed");
        }
    }

    fn scroll_into_view(&mut self, _handle: &usize) {}
}
