//! Dashboard theme and styling
//!
//! Light classroom theme with the four dashboard accent colours.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Classroom colour palette
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_PAGE: Color32 = Color32::from_rgb(243, 245, 249);
    pub const BG_CARD: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BG_MUTED: Color32 = Color32::from_rgb(236, 239, 244);
    pub const BG_HOVER: Color32 = Color32::from_rgb(226, 232, 240);

    // Accent colors
    pub const DASHBOARD_BLUE: Color32 = Color32::from_rgb(37, 99, 235);
    pub const DASHBOARD_ORANGE: Color32 = Color32::from_rgb(234, 88, 12);
    pub const DASHBOARD_GREEN: Color32 = Color32::from_rgb(22, 163, 74);
    pub const DASHBOARD_INDIGO: Color32 = Color32::from_rgb(79, 70, 229);
    pub const DESTRUCTIVE: Color32 = Color32::from_rgb(220, 38, 38);

    pub const HEADER: Color32 = Color32::from_rgb(67, 97, 238);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(75, 85, 99);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

    // Border colors
    pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
}

/// Apply the classroom theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::light();

    visuals.window_fill = ThemeColors::BG_CARD;
    visuals.panel_fill = ThemeColors::BG_PAGE;
    visuals.faint_bg_color = ThemeColors::BG_MUTED;
    visuals.extreme_bg_color = ThemeColors::BG_CARD;

    visuals.widgets.inactive.rounding = Rounding::same(6.0);
    visuals.widgets.hovered.bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.rounding = Rounding::same(6.0);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = color_with_alpha(ThemeColors::DASHBOARD_BLUE, 64);
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::DASHBOARD_BLUE);

    visuals.window_rounding = Rounding::same(10.0);
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::BORDER);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(20.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// A filled button in one of the accent colours
pub fn accent_button(text: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_owned()).color(ThemeColors::TEXT_ON_ACCENT).strong())
        .fill(fill)
}
