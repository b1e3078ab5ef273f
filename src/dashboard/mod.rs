//! Dashboard UI Module
//!
//! The teacher dashboard: class roster, headline statistics, recent
//! activity, quick actions and the quiz assignment modal.

pub mod app;
pub mod components;
pub mod error;
pub mod session;
pub mod state;
pub mod stats;
pub mod theme;
pub mod views;
