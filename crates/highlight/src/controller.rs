use readalong_timing::TimingIndex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightState {
    #[default]
    Idle,
    Active(usize),
}

impl HighlightState {
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Active(index) => Some(*index),
        }
    }

    fn from_index(index: Option<usize>) -> Self {
        index.map_or(Self::Idle, Self::Active)
    }
}

/// Presentation work produced by one state change. Deactivation is applied
/// before activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub deactivate: Option<usize>,
    pub activate: Option<usize>,
}

/// Tracks the word currently being spoken.
///
/// The controller performs no I/O: it returns a [`Transition`] whenever the
/// active word changes and nothing when a sample repeats the current state.
/// Applying the transition is the caller's job (see [`crate::Session`]).
#[derive(Debug, Default)]
pub struct HighlightController {
    state: HighlightState,
}

impl HighlightController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HighlightState {
        self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    /// Feed one clock sample.
    pub fn sample(&mut self, index: &TimingIndex, t: f64) -> Option<Transition> {
        self.on_candidate(index.lookup(t))
    }

    /// Move to `candidate`, the lookup result for the latest sample.
    pub fn on_candidate(&mut self, candidate: Option<usize>) -> Option<Transition> {
        let current = self.state.active_index();
        if candidate == current {
            return None;
        }

        self.state = HighlightState::from_index(candidate);
        Some(Transition {
            deactivate: current,
            activate: candidate,
        })
    }

    /// Forced reset at end of playback, regardless of where the clock stopped.
    pub fn on_playback_end(&mut self) -> Option<Transition> {
        let current = self.state.active_index();
        self.state = HighlightState::Idle;
        current.map(|index| Transition {
            deactivate: Some(index),
            activate: None,
        })
    }
}
