//! Landing view - call to action that launches the dashboard

use egui::RichText;

use crate::dashboard::theme::{accent_button, ThemeColors};

/// Render the landing view. Returns true when the user asked to start.
pub fn render_landing_view(ui: &mut egui::Ui) -> bool {
    let mut launch = false;

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 110.0).max(24.0));

        ui.label(
            RichText::new("Teacher Dashboard Demo")
                .size(36.0)
                .strong()
                .color(ThemeColors::TEXT_ON_ACCENT)
        );
        ui.add_space(12.0);
        ui.label(
            RichText::new("Experience the complete teacher dashboard with working quiz assignment")
                .size(18.0)
                .color(ThemeColors::BG_MUTED)
        );
        ui.add_space(32.0);

        if ui
            .add(accent_button("Launch Dashboard", ThemeColors::DASHBOARD_INDIGO).min_size(egui::vec2(200.0, 44.0)))
            .clicked()
        {
            launch = true;
        }
    });

    launch
}
