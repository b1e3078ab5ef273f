//! Stat card component for the headline numbers

use egui::{Color32, RichText, Rounding, Stroke};
use crate::dashboard::theme::ThemeColors;

/// A card displaying one headline number
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub accent: Color32,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>, accent: Color32) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            accent,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, width: f32) {
        egui::Frame::none()
            .fill(ThemeColors::BG_CARD)
            .stroke(Stroke::new(1.0, ThemeColors::BORDER))
            .rounding(Rounding::same(8.0))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(width);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&self.value)
                            .size(26.0)
                            .color(self.accent)
                            .strong()
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&self.label)
                            .size(13.0)
                            .color(ThemeColors::TEXT_MUTED)
                    );
                });
            });
    }
}
