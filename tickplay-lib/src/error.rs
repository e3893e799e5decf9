use std::fmt::{Display, Formatter};

/// Error type for transport commands and settings IO.
///
/// Transport variants are recoverable: the player logs them and leaves its
/// state untouched, so callers may ignore them or surface them to a user.
#[derive(Debug)]
pub enum PlaybackError {
    /// `play` was called before any track was loaded.
    NoTrackLoaded,
    /// `play` was called while the current session is already playing.
    AlreadyPlaying,
    /// The command needs the worker to be gone, but a session is still alive.
    SessionActive,
    /// The track cannot be played (for example a zero duration).
    InvalidTrack(String),
    Io(std::io::Error),
    Settings(String),
}

impl Display for PlaybackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTrackLoaded => write!(f, "no track loaded"),
            Self::AlreadyPlaying => write!(f, "already playing"),
            Self::SessionActive => write!(f, "a playback session is still active"),
            Self::InvalidTrack(reason) => write!(f, "invalid track: {}", reason),
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Settings(err) => write!(f, "invalid settings: {}", err),
        }
    }
}

impl std::error::Error for PlaybackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlaybackError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PlaybackError {
    fn from(value: serde_json::Error) -> Self {
        Self::Settings(value.to_string())
    }
}
