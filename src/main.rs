use clap::Parser;
use deepforge::core::config::{self, CliOverrides, DeepForgeConfig};
use log::{info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deepforge", about = "DeepForge AI chat view for the terminal")]
struct Args {
    /// Start with the sidebar collapsed
    #[arg(long)]
    collapsed: bool,

    /// Draw a static background instead of the aurora animation
    #[arg(long)]
    no_animation: bool,

    /// Read configuration from this file instead of ~/.deepforge/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let (file_config, config_error) = match loaded {
        Ok(file_config) => (file_config, None),
        Err(e) => (DeepForgeConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        collapsed: args.collapsed,
        no_animation: args.no_animation,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to deepforge.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("deepforge.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    info!(
        "DeepForge starting up (sidebar expanded: {}, animation: {})",
        resolved.sidebar_start_expanded, resolved.animate_background
    );

    deepforge::tui::run(resolved)
}
