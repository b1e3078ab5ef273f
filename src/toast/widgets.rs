//! Styles for toast widgets

use egui::Color32;

use crate::dashboard::theme::ThemeColors;
use crate::shared::Severity;

/// Style configuration for a toast
#[derive(Debug, Clone)]
pub struct ToastStyle {
    pub background: Color32,
    pub accent: Color32,
    pub title_color: Color32,
    pub text_color: Color32,
    pub corner_radius: f32,
    pub padding: f32,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            background: ThemeColors::BG_CARD,
            accent: ThemeColors::DASHBOARD_BLUE,
            title_color: ThemeColors::TEXT_PRIMARY,
            text_color: ThemeColors::TEXT_SECONDARY,
            corner_radius: 8.0,
            padding: 12.0,
        }
    }
}

/// Severity-based style overrides
#[derive(Debug, Clone)]
pub struct SeverityStyles {
    pub info: ToastStyle,
    pub error: ToastStyle,
}

impl Default for SeverityStyles {
    fn default() -> Self {
        Self {
            info: ToastStyle::default(),
            error: ToastStyle {
                background: ThemeColors::DESTRUCTIVE,
                accent: ThemeColors::DESTRUCTIVE,
                title_color: Color32::WHITE,
                text_color: Color32::from_rgb(255, 228, 228),
                ..Default::default()
            },
        }
    }
}

impl SeverityStyles {
    pub fn for_severity(&self, severity: Severity) -> &ToastStyle {
        match severity {
            Severity::Info => &self.info,
            Severity::Error => &self.error,
        }
    }
}
