//! Append-only progress log owned by one playback session.

use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Per-session log file.
///
/// Opened when a worker starts and closed when it is dropped at worker exit.
/// IO failures are reported once and disable the file for the rest of the
/// session; they never interrupt playback.
pub struct SessionLog {
    path: Option<PathBuf>,
    writer: Option<LineWriter<File>>,
}

impl SessionLog {
    /// Open `path` in append mode, or build a disabled log when `path` is `None`.
    pub fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::disabled();
        };

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                debug!("opened session log {}", path.display());
                Self {
                    path: Some(path.to_path_buf()),
                    writer: Some(LineWriter::new(file)),
                }
            }
            Err(err) => {
                warn!("failed to open session log {}: {}", path.display(), err);
                Self {
                    path: Some(path.to_path_buf()),
                    writer: None,
                }
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            path: None,
            writer: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Append one progress line.
    pub fn record_progress(&mut self, track: &str, position_secs: u64) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        if let Err(err) = writeln!(writer, "Playing: {} - {}s", track, position_secs) {
            warn!(
                "failed to append to session log {}: {}; disabling it for this session",
                self.display_path(),
                err
            );
            self.writer = None;
        }
    }

    fn display_path(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

impl Drop for SessionLog {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(err) = writer.flush() {
                warn!(
                    "failed to flush session log {}: {}",
                    self.display_path(),
                    err
                );
            }
        }
    }
}
