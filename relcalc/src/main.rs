mod commands;
mod handlers;
mod logging;
mod output;

use clap::Parser;
use commands::Cli;
use output::print_error;
use relcalc_core::settings::{load_settings_or_default, SettingsSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (settings, source) = match load_settings_or_default(&cli.settings) {
        Ok(loaded) => loaded,
        Err(err) => {
            print_error(&err.to_string());
            return Err(err.into());
        }
    };
    let log_file = cli.log_file.clone().unwrap_or_else(|| settings.log_file.clone());
    if let Err(err) = logging::init_transcript_log(&log_file, cli.log_level) {
        print_error(&err.to_string());
        return Err(err.into());
    }
    log::info!("App Launched");
    match source {
        SettingsSource::File => {
            log::debug!("settings loaded from '{}'", cli.settings.display())
        }
        SettingsSource::Defaults => {
            log::debug!("no settings file at '{}', using defaults", cli.settings.display())
        }
    }

    handlers::handle_command(cli.command, cli.no_gui, &cli.settings, &settings)
}
