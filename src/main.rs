use clap::Parser;
use eframe::egui;
use log::{info, LevelFilter};

use health_tracker::app::TrackerApp;
use health_tracker::cli::Cli;
use health_tracker::config::Config;
use health_tracker::views::APP_TITLE;
use health_tracker::Result;

fn setup_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    // RUST_LOG still overrides the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_ref())?;
    info!(
        "Starting {} ({}x{}, {:?} theme)",
        APP_TITLE, config.window_width, config.window_height, config.theme
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(TrackerApp::new(cc, &config)))),
    )?;
    Ok(())
}
