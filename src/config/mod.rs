//! Application Configuration
//!
//! Teacher identity, window and notification preferences stored in TOML format.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Identity shown in the dashboard header
    pub teacher: TeacherConfig,
    /// Window settings
    pub window: WindowConfig,
    /// Toast notification settings
    pub notifications: NotificationSettings,
    /// Aggregate statistics settings
    pub stats: StatsConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Teacher identity handed to the dashboard on launch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeacherConfig {
    /// Display name used in the welcome line
    pub name: String,
    /// Identifier shown in the header badge
    pub id: String,
}

impl Default for TeacherConfig {
    fn default() -> Self {
        Self {
            name: "Dr. Sarah Johnson".to_string(),
            id: "TCH-2024-001".to_string(),
        }
    }
}

/// Window-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width
    pub width: f32,
    /// Initial window height
    pub height: f32,
    /// Skip the landing view and open the dashboard directly
    pub open_dashboard_on_start: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            open_dashboard_on_start: false,
        }
    }
}

/// Toast notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long a toast stays on screen
    pub duration_ms: u64,
    /// Maximum number of toasts shown at once
    pub max_visible: usize,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            max_visible: 4,
        }
    }
}

/// Where the headline statistics come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsSource {
    /// Fixed display constants
    #[default]
    Fixed,
    /// Computed from the class records
    Derived,
}

/// Aggregate statistics settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub source: StatsSource,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "teacherdashboard", "TeacherDashboard")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Default location of the configuration file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
