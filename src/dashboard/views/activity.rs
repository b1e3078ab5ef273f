//! Recent activity feed

use egui::{RichText, Rounding};

use crate::dashboard::components::{badge, titled_card};
use crate::dashboard::theme::ThemeColors;
use crate::roster::ActivityEntry;

pub fn render_recent_activity(ui: &mut egui::Ui, activities: &[ActivityEntry]) {
    titled_card(ui, "Recent Activity", |ui| {
        for entry in activities {
            egui::Frame::none()
                .fill(ThemeColors::BG_MUTED)
                .rounding(Rounding::same(6.0))
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&entry.student).size(14.0).strong());
                                badge(ui, &entry.class_tag, ThemeColors::BG_CARD, ThemeColors::TEXT_SECONDARY);
                            });
                            ui.label(
                                RichText::new(&entry.description)
                                    .size(12.0)
                                    .color(ThemeColors::TEXT_MUTED)
                            );
                        });
                        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                            ui.label(
                                RichText::new(&entry.outcome)
                                    .size(14.0)
                                    .strong()
                                    .color(ThemeColors::DASHBOARD_GREEN)
                            );
                            ui.label(
                                RichText::new(&entry.time_label)
                                    .size(12.0)
                                    .color(ThemeColors::TEXT_MUTED)
                            );
                        });
                    });
                });
            ui.add_space(6.0);
        }
    });
}
