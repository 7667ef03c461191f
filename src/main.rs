use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use strawhat::core::config::{self, CliOverrides, StrawhatConfig};
use strawhat::core::router::ScreenId;
use strawhat::tui;

#[derive(Parser)]
#[command(name = "strawhat", about = "One Piece episodes and movies in your terminal")]
struct Args {
    /// Config file to use instead of ~/.strawhat/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Go straight to the main screens
    #[arg(long)]
    skip_landing: bool,

    /// Screen to open first (home, movies, episodes, about, contact)
    #[arg(short, long)]
    screen: Option<ScreenId>,

    /// Where to write the debug log
    #[arg(long, default_value = "strawhat.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Strawhat starting up");

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        StrawhatConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            start_screen: args.screen,
            skip_landing: args.skip_landing,
        },
    );
    log::info!(
        "Start screen: {}, skip landing: {}",
        resolved.start_screen,
        resolved.skip_landing
    );

    tui::run(resolved)
}
