//! Chat panel — session header, message thread, and input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use chat_core::store::ChatStore;
use chat_types::message::{Message, Role};

use crate::panels::sidebar::message_count_label;
use crate::theme::*;

/// What the caller should do after rendering the chat panel
pub enum ChatAction {
    /// Send the given text to the current session
    Send(String),
    /// Clear all messages in the current session
    Clear,
}

/// Render the chat panel. Returns Some(action) when the user submitted
/// input or asked to clear the thread.
pub fn chat_panel(
    ui: &mut egui::Ui,
    store: &ChatStore,
    input_text: &mut String,
) -> Option<ChatAction> {
    let Some(session) = store.current_session() else {
        empty_state(ui, true);
        return None;
    };

    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.heading(RichText::new(&session.title).color(TEXT_PRIMARY).strong());
                        ui.label(
                            RichText::new(message_count_label(session.messages.len()))
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if !session.messages.is_empty() {
                            let clear = ui.add(
                                egui::Button::new(
                                    RichText::new("Clear").color(TEXT_SECONDARY).small(),
                                )
                                .frame(false),
                            );
                            if clear
                                .on_hover_text("Clear all messages in this chat")
                                .clicked()
                            {
                                action = Some(ChatAction::Clear);
                            }
                        }
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if session.messages.is_empty() {
                            empty_state(ui, false);
                        } else {
                            for message in &session.messages {
                                render_message(ui, message);
                                ui.add_space(4.0);
                            }
                        }

                        if store.is_loading() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    RichText::new("Waiting for reply...")
                                        .color(TEXT_SECONDARY)
                                        .small(),
                                );
                            });
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(input_text)
                        .hint_text("Type your message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = !input_text.trim().is_empty() && !store.is_loading();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        let text = input_text.trim().to_string();
                        action = Some(ChatAction::Send(text));
                        input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    action
}

/// Display name for a message's author.
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "Assistant",
        Role::System => "System",
    }
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label_color, bg) = match message.role {
        Role::User => (ACCENT_HOVER, ACCENT_SOFT),
        Role::Assistant => (TEXT_SECONDARY, BG_SURFACE),
        Role::System => (TEXT_SECONDARY, BG_PRIMARY),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(role_label(message.role))
                    .color(label_color)
                    .strong()
                    .small(),
            );
            ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
        });
}

fn empty_state(ui: &mut egui::Ui, show_title: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        if show_title {
            ui.heading(RichText::new("Welcome").color(TEXT_PRIMARY));
        }
        ui.label(
            RichText::new("Select a chat from the sidebar or start a new one")
                .color(TEXT_SECONDARY),
        );
    });
}
