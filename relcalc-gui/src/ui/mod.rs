use eframe::egui;
use eframe::egui::RichText;
use relcalc_core::{CommandMode, FieldRole};
use std::time::{Duration, Instant};

use crate::notifications::NOTIFICATION_LIFETIME;
use crate::CalculatorApp;

pub mod widgets;

use widgets::{labeled_entry, result_field};

impl CalculatorApp {
    /// Input fields followed by the Calculate button. Enter in any field also calculates.
    pub(crate) fn render_form(&mut self, ui: &mut egui::Ui) {
        let mut submitted = false;
        for role in FieldRole::ALL {
            let response = labeled_entry(ui, role.label(), self.inputs.field_mut(role));
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
        }
        ui.add_space(15.0);
        ui.vertical_centered(|ui| {
            let button = ui
                .button("Calculate")
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if button.clicked() {
                submitted = true;
            }
        });
        ui.add_space(10.0);
        if submitted {
            self.calculate();
        }
    }

    /// One read-only slot per mode, each with its own copy button.
    pub(crate) fn render_results(&mut self, ui: &mut egui::Ui) {
        let show_placeholders = !self.slots.has_calculated();
        let mut copy_requested = None;
        for mode in CommandMode::ALL {
            let placeholder = show_placeholders.then(|| mode.placeholder());
            if result_field(ui, self.slots.slot(mode).text(), placeholder) {
                copy_requested = Some(mode);
            }
            ui.add_space(5.0);
        }
        if let Some(mode) = copy_requested {
            self.copy_result(mode);
        }
    }

    pub(crate) fn render_notifications(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.notifications.cleanup_old_notifications(now);
        let notifications = self.notifications.notifications();
        if notifications.is_empty() {
            return;
        }
        let screen_rect = ctx.screen_rect();
        let mut y = screen_rect.max.y - 8.0;
        let total = NOTIFICATION_LIFETIME.as_secs_f32();
        for (idx, notification) in notifications.iter().enumerate().rev() {
            let age = now.duration_since(notification.created_at).as_secs_f32();
            let fade_out = 0.4;
            let alpha = if age > total - fade_out {
                ((total - age) / fade_out).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let fill = egui::Color32::from_rgba_unmultiplied(20, 20, 20, (200.0 * alpha) as u8);
            let text = egui::Color32::from_rgba_unmultiplied(235, 235, 235, (230.0 * alpha) as u8);
            let response = egui::Area::new(egui::Id::new(("copy_toast", idx)))
                .order(egui::Order::Foreground)
                .interactable(false)
                .pivot(egui::Align2::CENTER_BOTTOM)
                .fixed_pos(egui::pos2(screen_rect.center().x, y))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .fill(fill)
                        .rounding(egui::Rounding::same(6.0))
                        .show(ui, |ui| {
                            ui.set_max_width(screen_rect.width() - 24.0);
                            ui.label(RichText::new(&notification.title).color(text).strong());
                            ui.label(RichText::new(&notification.message).color(text).size(12.0));
                        });
                });
            y -= response.response.rect.height() + 6.0;
        }
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
