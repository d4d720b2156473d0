//! Settings panel — chat endpoint configuration.

use egui::{self, RichText};

use chat_types::config::ChatConfig;

use crate::theme::*;

/// Render the settings panel. Returns true when a field changed so the
/// caller can rebuild the API client and persist the config.
pub fn settings_panel(ui: &mut egui::Ui, config: &mut ChatConfig) -> bool {
    let mut changed = false;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("API Base URL").color(TEXT_SECONDARY).small());
            if ui
                .add(
                    egui::TextEdit::singleline(&mut config.api_base)
                        .hint_text("https://chat.example.com (empty = same origin)"),
                )
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new("Requests go to {base}/api/chat")
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );
        });

    changed
}
