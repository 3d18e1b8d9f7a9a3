#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayLabel {
    Play,
    Pause,
}

impl std::fmt::Display for PlayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Play => f.write_str("Play"),
            Self::Pause => f.write_str("Pause"),
        }
    }
}

/// State of the play/pause button.
///
/// Disabled until a recording passes the content gate; stays disabled for the
/// rest of the process after a load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayControl {
    pub enabled: bool,
    pub label: PlayLabel,
}

impl PlayControl {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            label: PlayLabel::Play,
        }
    }

    pub fn ready() -> Self {
        Self {
            enabled: true,
            label: PlayLabel::Play,
        }
    }
}

impl Default for PlayControl {
    fn default() -> Self {
        Self::disabled()
    }
}
