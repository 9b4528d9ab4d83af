use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "relcalc",
    version,
    about = "Converts absolute coordinates into relative command block coordinates"
)]
pub struct Cli {
    /// Settings file (TOML); defaults apply when it does not exist
    #[arg(long, global = true, default_value = relcalc_core::settings::DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,
    /// Transcript file, overrides the settings file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
    /// Minimum level written to the transcript
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LevelFilter,
    /// Disable the GUI when no subcommand is given
    #[arg(long)]
    pub no_gui: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the calculator window (default)
    Gui,
    /// Print the relative commands for the given coordinates
    Calc {
        /// Command block position
        #[arg(long, allow_hyphen_values = true)]
        origin: String,
        /// First source corner
        #[arg(long, allow_hyphen_values = true)]
        source_a: Option<String>,
        /// Second source corner
        #[arg(long, allow_hyphen_values = true)]
        source_b: Option<String>,
        /// Destination position
        #[arg(long, allow_hyphen_values = true)]
        destination: String,
        /// Print offsets without the command tag
        #[arg(long)]
        arguments_only: bool,
    },
    /// Write the effective settings to the settings file
    InitSettings {
        /// Replace an existing settings file
        #[arg(long)]
        force: bool,
    },
}
