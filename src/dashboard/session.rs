//! A live dashboard instance
//!
//! Owns the dashboard state for as long as the dashboard is on screen and
//! reports every action's outcome through the injected [`Notifier`].

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{StatsSource, TeacherConfig};
use crate::dashboard::state::{DashboardAction, DashboardState};
use crate::dashboard::stats::DashboardStats;
use crate::shared::{Notification, Notifier};

/// Who the dashboard is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherIdentity {
    pub name: String,
    pub id: String,
}

impl From<&TeacherConfig> for TeacherIdentity {
    fn from(config: &TeacherConfig) -> Self {
        Self {
            name: config.name.clone(),
            id: config.id.clone(),
        }
    }
}

pub struct DashboardSession {
    identity: TeacherIdentity,
    state: DashboardState,
    stats_source: StatsSource,
    notifier: Arc<dyn Notifier>,
}

impl DashboardSession {
    /// Start a dashboard seeded with the demo classes
    pub fn new(identity: TeacherIdentity, stats_source: StatsSource, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_state(identity, DashboardState::default(), stats_source, notifier)
    }

    pub fn with_state(
        identity: TeacherIdentity,
        state: DashboardState,
        stats_source: StatsSource,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        info!(teacher = %identity.id, classes = state.classes().len(), "Dashboard session started");
        Self {
            identity,
            state,
            stats_source,
            notifier,
        }
    }

    pub fn identity(&self) -> &TeacherIdentity {
        &self.identity
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(self.state.classes(), self.stats_source)
    }

    /// Apply an action and report its outcome
    pub fn dispatch(&mut self, action: DashboardAction) {
        match self.state.apply(action) {
            Ok(Some(notification)) => self.notifier.notify(notification),
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "Dashboard action rejected");
                self.notifier.notify(Notification::from(&err));
            }
        }
    }

    /// Apply actions in the order they were emitted
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = DashboardAction>) {
        for action in actions {
            self.dispatch(action);
        }
    }
}

impl Drop for DashboardSession {
    fn drop(&mut self) {
        info!(teacher = %self.identity.id, "Dashboard session closed, discarding state");
    }
}
