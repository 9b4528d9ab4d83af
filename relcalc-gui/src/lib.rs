use eframe::egui;
use relcalc_core::{
    Calculator, CalculatorInputs, CalculatorSettings, CommandMode, CopyPolicy, LogTranscript,
    ResultSlots,
};

mod clipboard;
mod notifications;
mod ui;

pub use clipboard::{copy_to_clipboard, ClipboardError};
use notifications::NotificationHandler;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub always_on_top: bool,
    pub copy_policy: CopyPolicy,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "CMD Block - Relative Calculator".to_string(),
            width: 273.0,
            height: 440.0,
            always_on_top: true,
            copy_policy: CopyPolicy::FullCommand,
        }
    }
}

impl GuiConfig {
    pub fn from_settings(settings: &CalculatorSettings) -> Self {
        Self {
            always_on_top: settings.always_on_top,
            copy_policy: settings.copy_policy,
            ..Self::default()
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Opens the calculator window and blocks until it is closed.
///
/// Transcript entries go to the `log` facade; the caller decides where they end up.
pub fn run_gui(config: GuiConfig) -> Result<(), GuiError> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.width, config.height])
        .with_min_inner_size([config.width, 0.0]);
    if config.always_on_top {
        viewport = viewport.with_window_level(egui::WindowLevel::AlwaysOnTop);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let copy_policy = config.copy_policy;
    log::debug!("opening calculator window '{}'", config.title);
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(CalculatorApp::new(copy_policy))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

struct CalculatorApp {
    inputs: CalculatorInputs,
    slots: ResultSlots,
    calculator: Calculator<LogTranscript>,
    copy_policy: CopyPolicy,
    notifications: NotificationHandler,
}

impl CalculatorApp {
    fn new(copy_policy: CopyPolicy) -> Self {
        Self {
            inputs: CalculatorInputs::default(),
            slots: ResultSlots::new(),
            calculator: Calculator::default(),
            copy_policy,
            notifications: NotificationHandler::new(),
        }
    }

    pub(crate) fn calculate(&mut self) {
        let outcome = self.calculator.calculate(&self.inputs, &mut self.slots);
        log::debug!("calculation produced {} result(s)", outcome.results().len());
    }

    /// Text a copy of `mode`'s slot would put on the clipboard.
    pub(crate) fn copy_text(&self, mode: CommandMode) -> Option<String> {
        self.slots.slot(mode).copy_text(self.copy_policy)
    }

    pub(crate) fn copy_result(&mut self, mode: CommandMode) {
        let Some(text) = self.copy_text(mode) else {
            return;
        };
        match copy_to_clipboard(&text) {
            Ok(()) => self.notifications.show_info("Copied", &text),
            Err(err) => {
                log::warn!("copy of {mode} result failed: {err}");
                self.notifications.show_info("Copy failed", &err.to_string());
            }
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(5.0);
            self.render_form(ui);
            self.render_results(ui);
        });
        self.render_notifications(ctx);
    }
}
