//! Track metadata for simulated playback.

use std::fmt::{Display, Formatter};

use log::info;

use crate::error::PlaybackError;

/// Immutable description of a media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    name: String,
    duration_secs: u64,
}

impl Track {
    /// Create a track. Durations are not checked here; see [`Track::validate`].
    pub fn new(name: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            name: name.into(),
            duration_secs,
        }
    }

    /// Create a track, rejecting a zero duration.
    pub fn try_new(name: impl Into<String>, duration_secs: u64) -> Result<Self, PlaybackError> {
        let track = Self::new(name, duration_secs);
        track.validate()?;
        Ok(track)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Check that the track has something to play.
    pub fn validate(&self) -> Result<(), PlaybackError> {
        if self.duration_secs == 0 {
            return Err(PlaybackError::InvalidTrack(format!(
                "{} has a duration of 0s",
                self.name
            )));
        }
        Ok(())
    }

    /// Emit the informational load event for this track.
    pub(crate) fn announce(&self) {
        info!("Loaded track: {}", self);
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}s)", self.name, self.duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::Track;
    use crate::error::PlaybackError;

    #[test]
    fn display_includes_name_and_duration() {
        let track = Track::new("sample.wav", 10);
        assert_eq!(track.to_string(), "sample.wav (10s)");
    }

    #[test]
    fn try_new_rejects_zero_duration() {
        let err = Track::try_new("silence.wav", 0).unwrap_err();
        assert!(matches!(err, PlaybackError::InvalidTrack(_)));
        assert!(Track::try_new("sample.wav", 1).is_ok());
    }
}
