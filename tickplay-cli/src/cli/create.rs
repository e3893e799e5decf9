//! `create` subcommand: print default payloads.

use clap::ArgMatches;
use tickplay_lib::{PlaybackError, PlayerSettings};

/// Handle `create <payload>`; returns the exit code.
pub fn run_create(args: &ArgMatches) -> Result<i32, PlaybackError> {
    match args.subcommand() {
        Some(("settings-json", _)) => {
            let json = serde_json::to_string_pretty(&PlayerSettings::default())?;
            println!("{}", json);
            Ok(0)
        }
        _ => {
            eprintln!("Unknown create payload. Try `tickplay create settings-json`.");
            Ok(1)
        }
    }
}
