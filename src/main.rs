//! Teacher Dashboard - class rosters, progress overview and quiz assignment
//!
//! A single-window demo: a landing page launches a dashboard whose data
//! lives only for as long as the dashboard is open.

mod app;
mod config;
mod dashboard;
mod roster;
mod shared;
mod toast;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;

/// Teacher Dashboard - demo class overview and quiz assignment
#[derive(Parser, Debug)]
#[command(name = "teacher-dashboard")]
#[command(about = "A demo teacher dashboard with working quiz assignment")]
struct Args {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the teacher display name
    #[arg(long)]
    teacher_name: Option<String>,

    /// Override the teacher identifier
    #[arg(long)]
    teacher_id: Option<String>,

    /// Skip the landing page and open the dashboard directly
    #[arg(long)]
    open_dashboard: bool,

    /// Write the default configuration file and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.write_default_config {
        let path = match args.config {
            Some(path) => path,
            None => config::default_config_path()?,
        };
        config::save_config(&AppConfig::default(), &path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let (mut config, source) = load_or_create_config(args.config.as_deref());

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &source {
        ConfigSource::File(path) => info!("Loaded configuration from {:?}", path),
        ConfigSource::Unreadable(path, reason) => {
            warn!("Ignoring unreadable config {:?}: {}", path, reason);
        }
        ConfigSource::Default => info!("Using default configuration"),
    }

    apply_overrides(&mut config, &args);

    info!(teacher = %config.teacher.id, stats = ?config.stats.source, "Teacher Dashboard starting...");

    if let Err(e) = dashboard::app::run_dashboard(config) {
        tracing::error!("Dashboard error: {}", e);
    }

    info!("Teacher Dashboard shutdown complete");

    Ok(())
}

/// Command-line flags win over the config file
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(name) = &args.teacher_name {
        config.teacher.name = name.clone();
    }
    if let Some(id) = &args.teacher_id {
        config.teacher.id = id.clone();
    }
    if args.open_dashboard {
        config.window.open_dashboard_on_start = true;
    }
}

/// Where the configuration came from
#[derive(Debug)]
enum ConfigSource {
    File(PathBuf),
    Unreadable(PathBuf, String),
    Default,
}

/// Load configuration from file or fall back to defaults
fn load_or_create_config(explicit: Option<&Path>) -> (AppConfig, ConfigSource) {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config::default_config_path().ok(),
    };

    if let Some(path) = path {
        if path.exists() {
            return match config::load_config(&path) {
                Ok(config) => (config, ConfigSource::File(path)),
                Err(e) => (AppConfig::default(), ConfigSource::Unreadable(path, e.to_string())),
            };
        }
    }
    (AppConfig::default(), ConfigSource::Default)
}
