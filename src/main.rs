mod clipboard;
mod config;
mod engine;
mod error;
mod resources;
mod ui;

use std::process::ExitCode;

use config::ShellConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Paleta.");

    match ui::shell::run(&ShellConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
