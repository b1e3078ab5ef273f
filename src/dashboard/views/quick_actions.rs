//! Quick actions panel

use crate::dashboard::components::titled_card;
use crate::dashboard::state::DashboardAction;
use crate::dashboard::theme::{accent_button, ThemeColors};

/// Render the four quick action buttons in a 2x2 grid
pub fn render_quick_actions(ui: &mut egui::Ui, actions: &mut Vec<DashboardAction>) {
    titled_card(ui, "Quick Actions", |ui| {
        let width = ((ui.available_width() - 12.0) / 2.0).max(120.0);
        let size = egui::vec2(width, 44.0);

        egui::Grid::new("quick_actions")
            .num_columns(2)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                if ui.add(accent_button("+ Assign Quiz", ThemeColors::DASHBOARD_ORANGE).min_size(size)).clicked() {
                    actions.push(DashboardAction::OpenQuizModal);
                }
                if ui.add(accent_button("View Reports", ThemeColors::DASHBOARD_GREEN).min_size(size)).clicked() {
                    actions.push(DashboardAction::ViewReports);
                }
                ui.end_row();

                if ui.add(accent_button("Schedule", ThemeColors::DASHBOARD_BLUE).min_size(size)).clicked() {
                    actions.push(DashboardAction::Schedule);
                }
                if ui.add(accent_button("Messages", ThemeColors::DASHBOARD_INDIGO).min_size(size)).clicked() {
                    actions.push(DashboardAction::Messages);
                }
                ui.end_row();
            });
    });
}
