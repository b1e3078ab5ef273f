//! Dashboard application entry point

use eframe::egui;
use std::sync::Arc;
use tracing::info;

use crate::app::{AppShell, Screen};
use crate::config::AppConfig;
use crate::dashboard::session::DashboardSession;
use crate::dashboard::state::DashboardAction;
use crate::dashboard::theme::{self, ThemeColors};
use crate::dashboard::views::{render_header, render_home_view, render_landing_view, render_quiz_modal};
use crate::shared::ChannelNotifier;
use crate::toast::ToastBoard;

/// The main window
pub struct DashboardApp {
    /// Landing/dashboard coordinator
    shell: AppShell,
    /// Toast stack fed by the dashboard's notifier
    toasts: ToastBoard,
    /// Whether theme has been applied
    theme_applied: bool,
    /// Window size from config
    window_size: [f32; 2],
}

impl DashboardApp {
    /// Create a new dashboard application
    pub fn new(config: AppConfig) -> Self {
        let toasts = ToastBoard::new(config.notifications.clone());
        let notifier = Arc::new(ChannelNotifier::new(toasts.sender()));
        let window_size = [config.window.width, config.window.height];

        Self {
            shell: AppShell::new(config, notifier),
            toasts,
            theme_applied: false,
            window_size,
        }
    }

    /// Create eframe options for the dashboard window
    pub fn options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size([900.0, 600.0])
                .with_title("Teacher Dashboard"),
            ..Default::default()
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        let mut launch = false;
        let mut go_home = false;

        match self.shell.screen_mut() {
            Screen::Landing => {
                egui::CentralPanel::default()
                    .frame(egui::Frame::none().fill(ThemeColors::HEADER))
                    .show(ctx, |ui| {
                        launch = render_landing_view(ui);
                    });
            }
            Screen::Dashboard(session) => {
                go_home = show_dashboard(ctx, session);
            }
        }

        if launch {
            self.shell.launch_dashboard();
        }
        if go_home {
            self.shell.return_to_landing();
        }

        self.toasts.show(ctx);
    }
}

/// Draw one dashboard frame and apply the actions it produced.
/// Returns true when the user asked to go back to the landing view.
fn show_dashboard(ctx: &egui::Context, session: &mut DashboardSession) -> bool {
    let mut actions: Vec<DashboardAction> = Vec::new();
    let mut go_home = false;
    let modal_open = session.state().quiz_modal().is_open();

    egui::TopBottomPanel::top("header")
        .frame(egui::Frame::none().fill(ThemeColors::HEADER).inner_margin(24.0))
        .show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                go_home = render_header(ui, session.identity());
            });
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(ThemeColors::BG_PAGE).inner_margin(24.0))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    render_home_view(ui, session, &mut actions);
                });
            });
        });

    render_quiz_modal(ctx, session.state(), &mut actions);

    session.dispatch_all(actions);
    go_home
}

/// Run the dashboard application
pub fn run_dashboard(config: AppConfig) -> Result<(), eframe::Error> {
    let app = DashboardApp::new(config);
    info!("Opening dashboard window");
    eframe::run_native(
        "Teacher Dashboard",
        app.options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
