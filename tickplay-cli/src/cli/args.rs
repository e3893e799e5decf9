//! CLI argument definitions for `tickplay-cli`.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the CLI argument parser and command definitions.
pub fn build_cli() -> Command {
    Command::new("tickplay")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Adam Howard <adam.thomas.howard@gmail.com>")
        .about("Simulate playback of a single track on a background worker")
        .arg(
            Arg::new("NAME")
                .help("Name of the simulated track")
                .default_value("sample.wav")
                .index(1),
        )
        .arg(
            Arg::new("duration")
                .long("duration")
                .short('d')
                .value_name("SECONDS")
                .default_value("10")
                .value_parser(value_parser!(u64))
                .help("Track duration in ticks"),
        )
        .arg(
            Arg::new("tick-ms")
                .long("tick-ms")
                .short('t')
                .value_name("MS")
                .value_parser(value_parser!(u64).range(1..))
                .help("Length of one tick in milliseconds (overrides the settings file)"),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .short('S')
                .value_name("PATH")
                .help("Path to a JSON file with player settings"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .conflicts_with("no-log-file")
                .help("Append per-tick progress lines to this file"),
        )
        .arg(
            Arg::new("no-log-file")
                .long("no-log-file")
                .action(ArgAction::SetTrue)
                .help("Do not write a session log file"),
        )
        .arg(
            Arg::new("pause-after")
                .long("pause-after")
                .value_name("TICKS")
                .default_value("3")
                .value_parser(value_parser!(u64))
                .help("Ticks to play before pausing"),
        )
        .arg(
            Arg::new("pause-for")
                .long("pause-for")
                .value_name("TICKS")
                .default_value("2")
                .value_parser(value_parser!(u64))
                .help("Ticks to stay paused"),
        )
        .arg(
            Arg::new("resume-for")
                .long("resume-for")
                .value_name("TICKS")
                .default_value("5")
                .value_parser(value_parser!(u64))
                .help("Ticks to play after resuming, before stopping"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Only print warnings and errors"),
        )
        .subcommand(
            Command::new("create")
                .about("Emit default JSON payloads")
                .subcommand_required(true)
                .subcommand(
                    Command::new("settings-json")
                        .about("Print the default player settings as JSON"),
                ),
        )
}
