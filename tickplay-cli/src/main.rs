//! # Tickplay
//!
//! A command-line driver that plays a simulated track through a scripted
//! play/pause/resume/stop sequence.

use log::error;

mod cli;
mod controls;
mod logging;
mod runner;

fn main() {
    dotenv::dotenv().ok();

    let args = cli::args::build_cli().get_matches();
    logging::init(args.get_flag("quiet"));

    let code = match runner::run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            -1
        }
    };

    log::logger().flush();
    std::process::exit(code)
}
