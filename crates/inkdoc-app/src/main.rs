//! Demo entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting inkdoc");

    match inkdoc_app::run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("inkdoc: {}", e);
            ExitCode::FAILURE
        }
    }
}
