//! UI theme constants — warm light palette

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_SIDEBAR: Color32 = Color32::from_rgb(253, 242, 233);
pub const BG_SURFACE: Color32 = Color32::from_rgb(243, 244, 246);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
pub const ACCENT: Color32 = Color32::from_rgb(255, 171, 118);
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(230, 160, 112);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(255, 237, 224);
pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.extreme_bg_color = BG_SURFACE;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = ACCENT_SOFT;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_HOVER);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
