//! Sidebar panel — session list with creation and deletion.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use chat_core::store::ChatStore;

use crate::theme::*;

/// What the caller should do after rendering the sidebar
pub enum SidebarAction {
    NewChat,
    Select(String),
    Delete(String),
}

/// Render the sidebar. Returns Some(action) when the user clicked
/// something; the caller applies it to the store.
pub fn sidebar_panel(ui: &mut egui::Ui, store: &ChatStore) -> Option<SidebarAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SIDEBAR)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                let new_chat = ui.add_sized(
                    Vec2::new(ui.available_width(), 32.0),
                    egui::Button::new(RichText::new("+ New Chat").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING),
                );
                if new_chat.clicked() {
                    action = Some(SidebarAction::NewChat);
                }

                ui.add_space(8.0);
                ui.separator();

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for session in store.sessions() {
                            let selected =
                                store.current_session_id() == Some(session.id.as_str());
                            if let Some(row_action) = session_row(ui, session, selected) {
                                action = Some(row_action);
                            }
                            ui.add_space(2.0);
                        }

                        if store.sessions().is_empty() {
                            ui.add_space(12.0);
                            ui.label(
                                RichText::new("No conversations yet")
                                    .color(TEXT_SECONDARY)
                                    .small()
                                    .italics(),
                            );
                        }
                    });
            });
        });

    action
}

fn session_row(
    ui: &mut egui::Ui,
    session: &chat_types::session::Session,
    selected: bool,
) -> Option<SidebarAction> {
    let mut action = None;
    let fill = if selected { ACCENT_SOFT } else { BG_SIDEBAR };

    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let label = ui
                    .vertical(|ui| {
                        ui.label(
                            RichText::new(&session.title)
                                .color(TEXT_PRIMARY)
                                .strong(),
                        );
                        ui.label(
                            RichText::new(message_count_label(session.messages.len()))
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                    })
                    .response;

                if label.interact(egui::Sense::click()).clicked() {
                    action = Some(SidebarAction::Select(session.id.clone()));
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let delete = ui.add(
                        egui::Button::new(RichText::new("✕").color(TEXT_SECONDARY).small())
                            .frame(false),
                    );
                    if delete.on_hover_text("Delete chat").clicked() {
                        action = Some(SidebarAction::Delete(session.id.clone()));
                    }
                });
            });
        });

    action
}

/// "1 message" / "n messages" label under each session title.
pub fn message_count_label(count: usize) -> String {
    if count == 1 {
        "1 message".to_string()
    } else {
        format!("{} messages", count)
    }
}
