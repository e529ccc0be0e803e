mod config;
mod domain;
mod feed;
mod narration;
mod presentation;
mod watcher;

use config::{Config, ConfigError};
use feed::{FileSource, HttpSource};
use narration::Verbosity;
use std::env;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};
use watcher::{RenderedPage, Watcher};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

fn parse_flag_value(prefix: &str) -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(prefix).map(str::to_string))
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // Logs go to stderr so stdout carries only the rendered rows.
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn print_page(page: &RenderedPage) {
    for row in &page.rows {
        println!("{}\n", row.to_text());
    }
    println!(
        "-- {} rows shown, {} rejected, {} matching",
        page.rows.len(),
        page.rejected,
        page.records_filtered
    );
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config_path = parse_flag_value("--config=").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let input = parse_flag_value("--input=");

    let mut config = match Config::load(&config_path) {
        Ok(config) => config,
        // A saved page can be narrated without any config file.
        Err(ConfigError::ReadFile { .. }) if input.is_some() => Config::offline(),
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return;
        }
    };

    if env::args().any(|arg| arg == "--brief") {
        config.narration.verbosity = Verbosity::Brief;
    }

    init_tracing(config.app.log_level.as_deref());

    match input {
        Some(path) => narrate_file(&config, &path).await,
        None => watch(&config, &config_path).await,
    }
}

/// Narrates the first page of a saved endpoint response.
async fn narrate_file(config: &Config, path: &str) {
    let watcher = Watcher::new(Arc::new(FileSource::new(path)), config);

    match watcher.poll().await {
        Some(page) => print_page(&page),
        None => error!(input = %path, "Failed to read saved page"),
    }
}

/// Polls the configured endpoint until interrupted.
async fn watch(config: &Config, config_path: &str) {
    let source = match HttpSource::new(&config.feed) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "Failed to create feed client");
            return;
        }
    };

    info!(config = %config_path, app = %config.app.name, url = %source.url(), "Watcher initialized");

    let watcher = Watcher::new(Arc::new(source), config);
    if let Err(e) = watcher.start(print_page).await {
        error!(error = %e, "Watcher error");
    }
}
