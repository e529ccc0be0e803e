//! Dashboard watcher.
//!
//! Polls the bundle feed on a fixed interval, narrates every valid route and
//! hands the rendered rows to the caller.

mod error;
mod stats;

pub use error::WatcherError;
pub use stats::Stats;

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::{Config, FreshnessConfig};
use crate::feed::{BundlePage, BundleSource, PageOrder, PageRequest};
use crate::narration::Narrator;
use crate::presentation::RowView;

/// Rows rendered from one page.
#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    pub rows: Vec<RowView>,
    /// Rows that failed to decode or validate.
    pub rejected: usize,
    pub records_filtered: u64,
}

/// Watcher keeps the table current by reloading one page on every tick.
pub struct Watcher {
    source: Arc<dyn BundleSource>,
    narrator: Narrator,
    freshness: FreshnessConfig,

    page_length: u32,
    order: Option<PageOrder>,
    refresh_interval: Duration,

    // Runtime state
    draw: Mutex<u64>,
    started_at: Mutex<Option<Instant>>,
    running: Mutex<bool>,
    stats: Mutex<Stats>,
}

impl Watcher {
    /// Creates a watcher reading from `source` with settings from `cfg`.
    pub fn new(source: Arc<dyn BundleSource>, cfg: &Config) -> Self {
        let refresh_interval = Some(cfg.feed.refresh_interval)
            .filter(|d| !d.is_zero())
            .unwrap_or(Duration::from_secs(3));

        Self {
            source,
            narrator: Narrator::new(cfg.narration.verbosity),
            freshness: cfg.freshness.clone(),
            page_length: cfg.feed.page_length,
            order: cfg.feed.order,
            refresh_interval,
            draw: Mutex::new(0),
            started_at: Mutex::new(None),
            running: Mutex::new(false),
            stats: Mutex::new(Stats::default()),
        }
    }

    /// Polls until [`Watcher::stop`] is called or Ctrl+C is received.
    ///
    /// `on_page` receives the rendered rows of every successful poll.
    pub async fn start<F>(&self, mut on_page: F) -> Result<(), WatcherError>
    where
        F: FnMut(&RenderedPage) + Send,
    {
        {
            let mut running = self.running.lock().await;
            if *running {
                return Err(WatcherError::AlreadyRunning);
            }
            *running = true;
        }

        {
            let mut started_at = self.started_at.lock().await;
            *started_at = Some(Instant::now());
        }

        info!(
            source = self.source.name(),
            refresh_interval = ?self.refresh_interval,
            page_length = self.page_length,
            verbosity = ?self.narrator.verbosity(),
            "Starting bundle watcher"
        );

        let mut interval = tokio::time::interval(self.refresh_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if !self.is_running().await {
                        break;
                    }
                    if let Some(page) = self.poll().await {
                        on_page(&page);
                    }
                }
                _ = &mut shutdown => {
                    info!("Interrupt received");
                    break;
                }
            }
        }

        self.stop().await;
        Ok(())
    }

    /// Stops the poll loop after the current tick.
    pub async fn stop(&self) {
        {
            let mut running = self.running.lock().await;
            if !*running {
                return;
            }
            *running = false;
        }

        let stats = self.stats().await;
        info!(
            uptime = ?self.uptime().await,
            poll_cycles = stats.poll_cycles,
            rows_rendered = stats.rows_rendered,
            routes_rejected = stats.routes_rejected,
            fetch_errors = stats.fetch_errors,
            "Watcher stopped"
        );
    }

    /// Returns a copy of the current statistics.
    pub async fn stats(&self) -> Stats {
        self.stats.lock().await.clone()
    }

    /// Returns true if the poll loop is running.
    pub async fn is_running(&self) -> bool {
        *self.running.lock().await
    }

    /// Returns how long the watcher has been running.
    pub async fn uptime(&self) -> Duration {
        self.started_at
            .lock()
            .await
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Fetches and renders the first page once.
    pub async fn poll(&self) -> Option<RenderedPage> {
        let draw = {
            let mut draw = self.draw.lock().await;
            *draw += 1;
            *draw
        };
        let request = PageRequest::new(draw, 0, self.page_length).with_order(self.order);

        let result = self.source.fetch(&request).await;

        let mut stats = self.stats.lock().await;
        stats.poll_cycles += 1;

        match result {
            Ok(page) => {
                let rendered = self.render_page(&page, Utc::now());
                stats.rows_rendered += rendered.rows.len() as u64;
                stats.routes_rejected += rendered.rejected as u64;
                stats.last_records_filtered = rendered.records_filtered;
                debug!(
                    draw,
                    rows = rendered.rows.len(),
                    rejected = rendered.rejected,
                    "Page rendered"
                );
                Some(rendered)
            }
            Err(e) => {
                stats.fetch_errors += 1;
                warn!(draw, source = self.source.name(), error = %e, "Failed to fetch page");
                None
            }
        }
    }

    /// Validates, narrates and renders every row of a page.
    ///
    /// Rows that break the data contract are logged and skipped.
    pub fn render_page(&self, page: &BundlePage, now: DateTime<Utc>) -> RenderedPage {
        let mut rendered = RenderedPage {
            records_filtered: page.records_filtered,
            ..Default::default()
        };

        for (index, route) in page.routes().enumerate() {
            let route = match route {
                Ok(route) => route,
                Err(e) => {
                    warn!(row = index, error = %e, "Failed to decode route");
                    rendered.rejected += 1;
                    continue;
                }
            };

            match self.narrator.narrate_checked(&route) {
                Ok(narration) => {
                    rendered
                        .rows
                        .push(RowView::build(&route, &narration, now, &self.freshness));
                }
                Err(e) => {
                    warn!(
                        row = index,
                        diagram = %route.diagram(),
                        error = %e,
                        "Route rejected"
                    );
                    rendered.rejected += 1;
                }
            }
        }

        rendered
    }
}
