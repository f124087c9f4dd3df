use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc::unbounded_channel;

use parser_studio::app::{App, AppEvent};
use parser_studio::client::shared_service;
use parser_studio::config::Config;
use parser_studio::error::Result;
use parser_studio::logging;
use parser_studio::ui::TuiManager;

/// Interactive workspace for the product-text parser service
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Parser service base URL (overrides config and environment)
    #[arg(long)]
    base_url: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env(|key| std::env::var(key).ok());
    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = log_file;
    }

    logging::init(&config.logging)?;
    tracing::info!(base_url = %config.service.base_url, "Starting Parser Studio");

    let runtime = tokio::runtime::Runtime::new()?;
    // Lets the UI loop spawn service calls from this thread.
    let _runtime_guard = runtime.enter();

    let service = shared_service(config.service.clone())?;
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(service, tx).with_stats_visible(config.ui.show_stats);
    app.load_reference_data();
    if config.ui.show_examples_on_start {
        app.handle_event(AppEvent::ToggleExamples);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(
        &mut app,
        &mut rx,
        Duration::from_millis(config.ui.tick_rate_ms),
    )?;

    tracing::info!("Parser Studio exited");
    Ok(())
}
