//! Application Coordinator
//!
//! Decides which view is on screen and owns the dashboard session while it
//! is visible. Returning to the landing view drops the session and all of
//! its state.

use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::dashboard::session::{DashboardSession, TeacherIdentity};
use crate::shared::Notifier;

/// Which top-level view is visible
pub enum Screen {
    Landing,
    Dashboard(Box<DashboardSession>),
}

/// Main application coordinator
pub struct AppShell {
    config: AppConfig,
    notifier: Arc<dyn Notifier>,
    screen: Screen,
}

impl AppShell {
    pub fn new(config: AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        let open_dashboard = config.window.open_dashboard_on_start;
        let mut shell = Self {
            config,
            notifier,
            screen: Screen::Landing,
        };
        if open_dashboard {
            shell.launch_dashboard();
        }
        shell
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn is_dashboard_visible(&self) -> bool {
        matches!(self.screen, Screen::Dashboard(_))
    }

    /// Show the dashboard with freshly seeded data
    pub fn launch_dashboard(&mut self) {
        if self.is_dashboard_visible() {
            return;
        }
        info!("Launching dashboard");
        let session = DashboardSession::new(
            TeacherIdentity::from(&self.config.teacher),
            self.config.stats.source,
            self.notifier.clone(),
        );
        self.screen = Screen::Dashboard(Box::new(session));
    }

    /// Go back to the landing view, discarding dashboard state
    pub fn return_to_landing(&mut self) {
        if self.is_dashboard_visible() {
            info!("Returning to landing view");
        }
        self.screen = Screen::Landing;
    }
}
