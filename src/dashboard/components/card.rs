//! Titled card container

use egui::{RichText, Rounding, Stroke};
use crate::dashboard::theme::ThemeColors;

/// Render a white card with a heading and return what the body closure returns
pub fn titled_card<R>(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(ThemeColors::BG_CARD)
        .stroke(Stroke::new(1.0, ThemeColors::BORDER))
        .rounding(Rounding::same(8.0))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(18.0).strong().color(ThemeColors::TEXT_PRIMARY));
            ui.add_space(12.0);
            body(ui)
        })
        .inner
}

/// A small pill-shaped label
pub fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32, text_color: egui::Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).color(text_color));
        });
}
