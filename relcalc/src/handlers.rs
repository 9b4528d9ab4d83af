use crate::commands::Commands;
use crate::output::{print_error, print_info, print_outcome};
use relcalc_core::settings::save_settings_file;
use relcalc_core::{Calculator, CalculatorInputs, CalculatorSettings, CopyPolicy, LogTranscript};
use relcalc_gui::{run_gui, GuiConfig};
use std::path::Path;

pub fn handle_command(
    command: Option<Commands>,
    no_gui: bool,
    settings_path: &Path,
    settings: &CalculatorSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        None if no_gui => {
            print_info("GUI disabled; use `relcalc calc` to compute commands");
        }
        None | Some(Commands::Gui) => {
            run_gui(GuiConfig::from_settings(settings))?;
        }
        Some(Commands::Calc {
            origin,
            source_a,
            source_b,
            destination,
            arguments_only,
        }) => {
            let inputs = CalculatorInputs {
                origin,
                source_a: source_a.unwrap_or_default(),
                source_b: source_b.unwrap_or_default(),
                destination,
            };
            let policy = if arguments_only {
                CopyPolicy::ArgumentsOnly
            } else {
                CopyPolicy::FullCommand
            };
            handle_calc(&inputs, policy);
        }
        Some(Commands::InitSettings { force }) => {
            handle_init_settings(settings_path, settings, force)?;
        }
    }
    Ok(())
}

fn handle_calc(inputs: &CalculatorInputs, policy: CopyPolicy) {
    let mut calculator: Calculator<LogTranscript> = Calculator::default();
    let outcome = calculator.evaluate(inputs);
    print_outcome(&outcome, policy);
}

fn handle_init_settings(
    path: &Path,
    settings: &CalculatorSettings,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        print_error(&format!(
            "Settings file '{}' already exists; pass --force to replace it",
            path.display()
        ));
        return Ok(());
    }
    save_settings_file(path, settings)?;
    log::info!("settings written to '{}'", path.display());
    print_info(&format!("Settings written to '{}'", path.display()));
    Ok(())
}
