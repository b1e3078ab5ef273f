//! Classes view - the "My Classes" list

use egui::{RichText, Rounding, Stroke};

use crate::dashboard::components::badge;
use crate::dashboard::state::{DashboardAction, DashboardState};
use crate::dashboard::theme::{accent_button, ThemeColors};
use crate::roster::ClassRecord;

/// Render the class list with its Add Class button
pub fn render_classes_view(ui: &mut egui::Ui, state: &DashboardState, actions: &mut Vec<DashboardAction>) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("My Classes").size(22.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(accent_button("+ Add Class", ThemeColors::DASHBOARD_BLUE)).clicked() {
                actions.push(DashboardAction::AddClass);
            }
        });
    });

    ui.add_space(12.0);

    let selected = state.selected_class_id();
    for class in state.classes() {
        let is_selected = selected == Some(&class.id);
        render_class_card(ui, class, is_selected, actions);
        ui.add_space(12.0);
    }
}

/// Render a single class card
fn render_class_card(
    ui: &mut egui::Ui,
    class: &ClassRecord,
    is_selected: bool,
    actions: &mut Vec<DashboardAction>,
) {
    let stroke = if is_selected {
        Stroke::new(2.0, ThemeColors::DASHBOARD_ORANGE)
    } else {
        Stroke::new(1.0, ThemeColors::BORDER)
    };

    egui::Frame::none()
        .fill(ThemeColors::BG_CARD)
        .stroke(stroke)
        .rounding(Rounding::same(8.0))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                let title = RichText::new(&class.name).size(17.0).strong();
                if ui.selectable_label(is_selected, title).clicked() {
                    actions.push(DashboardAction::SelectClass(class.id.clone()));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(
                        ui,
                        &format!("{} students", class.student_count),
                        ThemeColors::BG_MUTED,
                        ThemeColors::TEXT_SECONDARY,
                    );
                });
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Class Avg Progress").size(13.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{}%", class.average_progress())).size(13.0).strong());
                });
            });
            ui.add(
                egui::ProgressBar::new(class.progress_fraction())
                    .desired_height(8.0)
                    .fill(ThemeColors::DASHBOARD_BLUE)
            );

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{} subjects", class.subjects.len()))
                        .size(13.0)
                        .color(ThemeColors::TEXT_MUTED)
                );
                if !class.quizzes.is_empty() {
                    ui.label(
                        RichText::new(format!("· {} quizzes assigned", class.quizzes.len()))
                            .size(13.0)
                            .color(ThemeColors::DASHBOARD_ORANGE)
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Right-to-left, so Analytics lands right of View
                    if ui.button("Analytics").clicked() {
                        actions.push(DashboardAction::ClassAnalytics(class.id.clone()));
                    }
                    if ui.button("View").clicked() {
                        actions.push(DashboardAction::ViewClass(class.id.clone()));
                    }
                });
            });
        });
}
