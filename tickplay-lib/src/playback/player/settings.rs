use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PlaybackError;
use crate::playback::pacer::IntervalPacer;

use super::Player;

/// Runtime settings for a [`Player`].
///
/// Loaded from JSON; missing keys fall back to [`PlayerSettings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Length of one tick in milliseconds.
    pub tick_ms: u64,
    /// Session log file. `None` disables the file sink.
    pub log_path: Option<PathBuf>,
    /// Reject tracks with a zero duration at load time.
    pub reject_empty_tracks: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            log_path: Some(PathBuf::from("playback.log")),
            reject_empty_tracks: true,
        }
    }
}

impl PlayerSettings {
    /// Parse settings from a JSON document and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, PlaybackError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file and validate them.
    pub fn from_json_file(path: &Path) -> Result<Self, PlaybackError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), PlaybackError> {
        if self.tick_ms == 0 {
            return Err(PlaybackError::Settings("tick_ms must be >= 1".to_string()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl Player {
    /// Current settings snapshot.
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// Configure the tick length (ms) for the next session.
    ///
    /// Replaces any custom pacer with an [`IntervalPacer`].
    pub fn set_tick_ms(&mut self, tick_ms: u64) {
        self.settings.tick_ms = tick_ms.max(1);
        self.pacer = Arc::new(IntervalPacer::new(self.settings.tick_interval()));
    }

    /// Configure the session log file for the next session. `None` disables it.
    pub fn set_log_path(&mut self, log_path: Option<PathBuf>) {
        self.settings.log_path = log_path;
    }

    /// Enable or disable the zero-duration check in `load`.
    pub fn set_reject_empty_tracks(&mut self, reject: bool) {
        self.settings.reject_empty_tracks = reject;
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerSettings;
    use crate::error::PlaybackError;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn missing_keys_use_defaults() {
        let settings = PlayerSettings::from_json_str(r#"{ "tick_ms": 250 }"#).unwrap();
        assert_eq!(settings.tick_ms, 250);
        assert_eq!(settings.log_path, Some(PathBuf::from("playback.log")));
        assert!(settings.reject_empty_tracks);
        assert_eq!(settings.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn null_log_path_disables_file() {
        let settings = PlayerSettings::from_json_str(r#"{ "log_path": null }"#).unwrap();
        assert_eq!(settings.log_path, None);
    }

    #[test]
    fn zero_tick_is_rejected() {
        let err = PlayerSettings::from_json_str(r#"{ "tick_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, PlaybackError::Settings(_)));
    }

    #[test]
    fn malformed_json_is_a_settings_error() {
        let err = PlayerSettings::from_json_str("{ tick_ms: }").unwrap_err();
        assert!(matches!(err, PlaybackError::Settings(_)));
    }
}
