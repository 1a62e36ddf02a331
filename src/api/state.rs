//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::catalog::CatalogSource;
use crate::config::ApiConfig;
use crate::dashboard::{load_catalog, Dashboard};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The dashboard session; every event takes the write lock
    pub dashboard: Arc<RwLock<Dashboard>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time, reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(dashboard: Dashboard, config: ApiConfig) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Start the one-shot catalog load in the background.
    ///
    /// Requests are served while it runs; restored widgets render at once
    /// and the sidebar fills in once the catalog is installed.
    pub fn spawn_catalog_load(&self, source: Box<dyn CatalogSource>) -> JoinHandle<bool> {
        tokio::spawn(load_catalog(Arc::clone(&self.dashboard), source))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub async fn catalog_loaded(&self) -> bool {
        self.dashboard.read().await.catalog().is_some()
    }
}
