//! Toast presentation
//!
//! Drains notifications sent by the dashboard and shows them stacked in the
//! bottom-right corner until they expire.

pub mod widgets;

use crossbeam_channel::{unbounded, Receiver, Sender};
use egui::{Align2, RichText, Rounding, Stroke, Vec2};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::NotificationSettings;
use crate::shared::Notification;
use crate::toast::widgets::{SeverityStyles, ToastStyle};

/// A notification with timing information for display
#[derive(Debug, Clone)]
struct DisplayToast {
    notification: Notification,
    expires_at: Instant,
}

impl DisplayToast {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Receives notifications and keeps the visible stack
pub struct ToastBoard {
    toasts: Vec<DisplayToast>,
    settings: NotificationSettings,
    styles: SeverityStyles,
    receiver: Receiver<Notification>,
    sender: Sender<Notification>,
}

impl ToastBoard {
    pub fn new(settings: NotificationSettings) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            toasts: Vec::new(),
            settings,
            styles: SeverityStyles::default(),
            receiver,
            sender,
        }
    }

    /// Get a sender for posting notifications to this board
    pub fn sender(&self) -> Sender<Notification> {
        self.sender.clone()
    }

    /// Pull pending notifications and drop expired toasts
    pub fn poll(&mut self, now: Instant) {
        while let Ok(notification) = self.receiver.try_recv() {
            self.push(notification, now);
        }
        self.toasts.retain(|t| !t.is_expired(now));
    }

    fn push(&mut self, notification: Notification, now: Instant) {
        debug!(title = %notification.title, error = notification.is_error(), "Toast shown");
        self.toasts.push(DisplayToast {
            notification,
            expires_at: now + Duration::from_millis(self.settings.duration_ms),
        });

        let max = self.settings.max_visible.max(1);
        if self.toasts.len() > max {
            let excess = self.toasts.len() - max;
            self.toasts.drain(..excess);
        }
    }

    /// Draw the toast stack
    pub fn show(&mut self, ctx: &egui::Context) {
        self.poll(Instant::now());

        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_board"))
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-16.0, -16.0))
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                for toast in &self.toasts {
                    let style = self.styles.for_severity(toast.notification.severity);
                    draw_toast(ui, &toast.notification, style);
                    ui.add_space(8.0);
                }
            });

        // Keep repainting so toasts disappear on time
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn draw_toast(ui: &mut egui::Ui, notification: &Notification, style: &ToastStyle) {
    egui::Frame::none()
        .fill(style.background)
        .stroke(Stroke::new(1.0, style.accent))
        .rounding(Rounding::same(style.corner_radius))
        .inner_margin(style.padding)
        .show(ui, |ui| {
            ui.set_min_width(280.0);
            ui.label(RichText::new(&notification.title).strong().color(style.title_color));
            ui.label(RichText::new(&notification.description).size(13.0).color(style.text_color));
        });
}
