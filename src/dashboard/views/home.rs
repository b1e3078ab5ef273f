//! Home view - header, headline statistics and the two dashboard columns

use egui::RichText;

use crate::dashboard::components::{badge, StatCard};
use crate::dashboard::session::{DashboardSession, TeacherIdentity};
use crate::dashboard::state::DashboardAction;
use crate::dashboard::stats::DashboardStats;
use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::dashboard::views::{render_classes_view, render_quick_actions, render_recent_activity};

/// Render the header strip. Returns true when the Home button was clicked.
pub fn render_header(ui: &mut egui::Ui, identity: &TeacherIdentity) -> bool {
    let mut go_home = false;

    ui.horizontal(|ui| {
        let home = egui::Button::new(RichText::new("Home").color(ThemeColors::TEXT_ON_ACCENT))
            .fill(color_with_alpha(egui::Color32::WHITE, 40));
        if ui.add(home).clicked() {
            go_home = true;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            badge(
                ui,
                &format!("Teacher ID: {}", identity.id),
                color_with_alpha(egui::Color32::WHITE, 50),
                ThemeColors::TEXT_ON_ACCENT,
            );
        });
    });

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("Welcome, {}", identity.name))
                .size(28.0)
                .strong()
                .color(ThemeColors::TEXT_ON_ACCENT)
        );
        ui.label(
            RichText::new("Teacher Dashboard - Monitor and Guide Student Progress")
                .size(16.0)
                .color(ThemeColors::BG_MUTED)
        );
    });

    go_home
}

/// Render the four headline numbers
pub fn render_stats(ui: &mut egui::Ui, stats: &DashboardStats) {
    let spacing = 16.0;
    let width = ((ui.available_width() - spacing * 3.0) / 4.0 - 32.0).max(120.0);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = spacing;
        StatCard::new("Total Students", stats.total_students.to_string(), ThemeColors::DASHBOARD_BLUE)
            .show(ui, width);
        StatCard::new("Active Classes", stats.active_classes.to_string(), ThemeColors::DASHBOARD_ORANGE)
            .show(ui, width);
        StatCard::new("Avg Progress", format!("{}%", stats.average_progress), ThemeColors::DASHBOARD_GREEN)
            .show(ui, width);
        StatCard::new("Badges Awarded", stats.badges_awarded.to_string(), ThemeColors::DASHBOARD_INDIGO)
            .show(ui, width);
    });
}

/// Render the dashboard body below the header
pub fn render_home_view(ui: &mut egui::Ui, session: &DashboardSession, actions: &mut Vec<DashboardAction>) {
    render_stats(ui, &session.stats());

    ui.add_space(24.0);

    ui.columns(2, |columns| {
        render_classes_view(&mut columns[0], session.state(), actions);

        render_quick_actions(&mut columns[1], actions);
        columns[1].add_space(16.0);
        render_recent_activity(&mut columns[1], session.state().activities());
    });
}
