//! Dashboard views

pub mod activity;
pub mod classes;
pub mod home;
pub mod landing;
pub mod quick_actions;
pub mod quiz_modal;

pub use activity::render_recent_activity;
pub use classes::render_classes_view;
pub use home::{render_header, render_home_view};
pub use landing::render_landing_view;
pub use quick_actions::render_quick_actions;
pub use quiz_modal::render_quiz_modal;
