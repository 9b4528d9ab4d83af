//! Form widgets of the calculator window.

use eframe::egui;

pub const COPY_BUTTON_SIZE: egui::Vec2 = egui::vec2(24.0, 24.0);

/// Renders a label above a full-width single-line text field.
///
/// Returns the field's response so callers can react to Enter.
pub fn labeled_entry(ui: &mut egui::Ui, label: &str, text: &mut String) -> egui::Response {
    ui.add_space(5.0);
    ui.label(label);
    ui.add(egui::TextEdit::singleline(text).desired_width(f32::INFINITY))
}

/// Renders a read-only result field with a copy button on its right.
///
/// The text can be selected but not edited. `placeholder` is shown greyed out
/// while `text` is empty. Returns true when the copy button was clicked.
pub fn result_field(ui: &mut egui::Ui, text: &str, placeholder: Option<&str>) -> bool {
    let mut copy_clicked = false;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let copy = ui
            .add_sized(COPY_BUTTON_SIZE, egui::Button::new("C"))
            .on_hover_text("Copy to clipboard")
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        copy_clicked = copy.clicked();
        ui.add_space(5.0);
        let mut shown = text;
        let mut field = egui::TextEdit::singleline(&mut shown).desired_width(ui.available_width());
        if let Some(placeholder) = placeholder {
            field = field.hint_text(placeholder);
        }
        ui.add(field);
    });
    copy_clicked
}
