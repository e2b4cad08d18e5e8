//! Theme Styling Functions
//!
//! Helpers for applying the group admin theme consistently.

use eframe::egui::{self, Color32, CornerRadius, RichText, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.panel_fill = colors::PAGE_BG;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors::BUTTON_PRIMARY);

    style.visuals.selection.bg_fill = colors::SELECTED_ITEM;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::BUTTON_PRIMARY);

    ctx.set_style(style);
}

/// Frame around one group
pub fn group_box_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::same(12))
}

/// Frame for popup windows
pub fn popup_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(40),
        })
}

/// Frame for the success banner
pub fn success_frame() -> egui::Frame {
    banner_frame(colors::SUCCESS_BG)
}

/// Frame for the error banner
pub fn error_frame() -> egui::Frame {
    banner_frame(colors::ERROR_BG)
}

fn banner_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// A filled blue button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(colors::BUTTON_TEXT))
        .fill(colors::BUTTON_PRIMARY)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(4))
}

/// A small red button for removals
pub fn danger_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(colors::BUTTON_TEXT).small())
        .fill(colors::DANGER)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(4))
}
