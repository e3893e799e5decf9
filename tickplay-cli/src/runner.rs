use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use tickplay_lib::{PlaybackError, Player, PlayerSettings, Track};

use crate::cli;
use crate::controls::{self, Script};

/// Primary entry for CLI execution; dispatches subcommands or runs the demo.
pub fn run(args: &ArgMatches) -> Result<i32, PlaybackError> {
    if let Some(("create", create_args)) = args.subcommand() {
        return cli::create::run_create(create_args);
    }

    let settings = load_settings(args)?;
    let tick = settings.tick_interval();
    debug!("player settings: {:?}", settings);

    let name = args
        .get_one::<String>("NAME")
        .cloned()
        .unwrap_or_else(|| "sample.wav".to_string());
    let duration = args.get_one::<u64>("duration").copied().unwrap_or(10);
    let script = Script {
        pause_after: args.get_one::<u64>("pause-after").copied().unwrap_or(3),
        pause_for: args.get_one::<u64>("pause-for").copied().unwrap_or(2),
        resume_for: args.get_one::<u64>("resume-for").copied().unwrap_or(5),
    };

    info!("Starting tickplay");
    let mut player = Player::new(settings);
    controls::run_script(&mut player, Track::new(name, duration), &script, tick)?;

    Ok(0)
}

/// Build settings from the optional JSON file, then apply CLI overrides.
fn load_settings(args: &ArgMatches) -> Result<PlayerSettings, PlaybackError> {
    let mut settings = match args.get_one::<String>("settings") {
        Some(path) => PlayerSettings::from_json_file(Path::new(path))?,
        None => PlayerSettings::default(),
    };

    if let Some(tick_ms) = args.get_one::<u64>("tick-ms") {
        settings.tick_ms = *tick_ms;
    }

    if args.get_flag("no-log-file") {
        settings.log_path = None;
    } else if let Some(path) = args.get_one::<String>("log-file") {
        settings.log_path = Some(PathBuf::from(path));
    }

    settings.validate()?;
    Ok(settings)
}
