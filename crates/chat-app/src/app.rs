//! Main egui application — composes the sidebar, chat thread, and
//! settings panels around a single shared store.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, Align, CentralPanel, Layout, RichText, SidePanel, TopBottomPanel};

use chat_core::persist::{SessionStorage, STORAGE_KEY};
use chat_core::ports::{ChatApi, StorageBackend};
use chat_core::store::{self, ChatStore};
use chat_platform::api::HttpChatClient;
use chat_platform::storage::auto_detect_storage;
use chat_types::config::ChatConfig;
use chat_ui::panels::chat::{chat_panel, ChatAction};
use chat_ui::panels::settings::settings_panel;
use chat_ui::panels::sidebar::{sidebar_panel, SidebarAction};
use chat_ui::theme;

const CONFIG_STORAGE_KEY: &str = "chat:config";

/// The main application state
pub struct ChatApp {
    store: Rc<RefCell<ChatStore>>,
    api: Rc<dyn ChatApi>,
    config: ChatConfig,
    backend: Rc<dyn StorageBackend>,
    input_text: String,
    show_settings: bool,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let backend = auto_detect_storage();

        // First launch only: write starter sessions before the store loads
        if matches!(backend.get(STORAGE_KEY), Ok(None)) {
            seed_starter_content(backend.clone());
        }

        let store = ChatStore::new(SessionStorage::new(backend.clone()));
        let config = restore_config(backend.as_ref());
        let api: Rc<dyn ChatApi> = Rc::new(HttpChatClient::new(&config));

        Self {
            store: Rc::new(RefCell::new(store)),
            api,
            config,
            backend,
            input_text: String::new(),
            show_settings: false,
            first_frame: true,
        }
    }

    fn rebuild_api(&mut self) {
        self.api = Rc::new(HttpChatClient::new(&self.config));
    }

    fn save_config(&self) {
        let json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize config: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(CONFIG_STORAGE_KEY, &json) {
            log::error!("Failed to save config: {}", e);
        }
    }

    /// Run the send round-trip off the UI thread's current frame.
    fn dispatch_send(&self, session_id: String, text: String, ctx: &egui::Context) {
        let store = self.store.clone();
        let api = self.api.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            store::send_message(&store, api.as_ref(), &session_id, &text).await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Keep repainting while a reply is pending so the spinner animates
        if self.store.borrow().is_loading() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("AI Chat")
                        .strong()
                        .color(theme::ACCENT_HOVER)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!("Storage: {}", self.backend.backend_name()))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .selectable_label(self.show_settings, "Settings")
                        .clicked()
                    {
                        self.show_settings = !self.show_settings;
                    }
                });
            });
        });

        // ── Sidebar ──────────────────────────────────────────
        SidePanel::left("sidebar")
            .min_width(200.0)
            .default_width(240.0)
            .show(ctx, |ui| {
                let action = {
                    let store = self.store.borrow();
                    sidebar_panel(ui, &store)
                };
                match action {
                    Some(SidebarAction::NewChat) => {
                        if self.store.borrow_mut().create_session().is_none() {
                            log::info!("Reusing existing empty chat");
                        }
                    }
                    Some(SidebarAction::Select(id)) => {
                        self.store.borrow_mut().select_session(&id);
                    }
                    Some(SidebarAction::Delete(id)) => {
                        self.store.borrow_mut().delete_session(&id);
                    }
                    None => {}
                }
            });

        // ── Settings side panel ──────────────────────────────
        if self.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    if settings_panel(ui, &mut self.config) {
                        self.rebuild_api();
                        self.save_config();
                    }
                });
        }

        // ── Chat thread ──────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let action = {
                let store = self.store.borrow();
                chat_panel(ui, &store, &mut self.input_text)
            };
            match action {
                Some(ChatAction::Send(text)) => {
                    let session_id = self
                        .store
                        .borrow()
                        .current_session_id()
                        .map(String::from);
                    if let Some(id) = session_id {
                        self.dispatch_send(id, text, ctx);
                    }
                }
                Some(ChatAction::Clear) => {
                    let session_id = self
                        .store
                        .borrow()
                        .current_session_id()
                        .map(String::from);
                    if let Some(id) = session_id {
                        self.store.borrow_mut().clear_session(&id);
                    }
                }
                None => {}
            }
        });
    }
}

fn restore_config(backend: &dyn StorageBackend) -> ChatConfig {
    match backend.get(CONFIG_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(config) => {
                log::info!("Config restored from storage");
                config
            }
            Err(e) => {
                log::warn!("Discarding unparsable config: {}", e);
                ChatConfig::default()
            }
        },
        Ok(None) => ChatConfig::default(),
        Err(e) => {
            log::warn!("Failed to read config: {}", e);
            ChatConfig::default()
        }
    }
}

fn seed_starter_content(backend: Rc<dyn StorageBackend>) {
    crate::seed::init_starter_data(&SessionStorage::new(backend));
    log::info!("Starter sessions written");
}
