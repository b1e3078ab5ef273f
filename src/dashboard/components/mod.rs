//! Reusable UI components for the dashboard

pub mod card;
pub mod stat_card;

pub use card::{badge, titled_card};
pub use stat_card::StatCard;
