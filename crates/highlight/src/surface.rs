use crate::controller::Transition;

/// Presentation side of the highlight: whatever draws the word units.
///
/// Handles are obtained once when the text is rendered and looked up by word
/// index afterwards.
pub trait WordSurface {
    type Handle;

    fn set_active(&mut self, handle: &Self::Handle, active: bool);
    fn scroll_into_view(&mut self, handle: &Self::Handle);
}

/// Index-addressed handles of the rendered word units.
#[derive(Debug, Clone)]
pub struct RenderedWords<H> {
    handles: Vec<H>,
}

impl<H> RenderedWords<H> {
    pub fn new(handles: Vec<H>) -> Self {
        Self { handles }
    }

    pub fn get(&self, index: usize) -> Option<&H> {
        self.handles.get(index)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H> FromIterator<H> for RenderedWords<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Apply a transition to the surface. Indices without a rendered unit are
/// skipped.
pub(crate) fn apply<S: WordSurface>(
    surface: &mut S,
    words: &RenderedWords<S::Handle>,
    transition: Transition,
) {
    if let Some(index) = transition.deactivate {
        match words.get(index) {
            Some(handle) => surface.set_active(handle, false),
            None => tracing::trace!(index, "deactivate_missing_word_unit"),
        }
    }

    if let Some(index) = transition.activate {
        match words.get(index) {
            Some(handle) => {
                surface.set_active(handle, true);
                surface.scroll_into_view(handle);
            }
            None => tracing::trace!(index, "activate_missing_word_unit"),
        }
    }
}
