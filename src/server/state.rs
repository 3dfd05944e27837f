//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::SiteConfig;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Site bundle configuration
    pub site: Arc<SiteConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: Arc::new(site),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn dist_dir(&self) -> &Path {
        &self.site.dist_dir
    }

    /// Whether the compiled bundle's entry document is present
    pub fn bundle_present(&self) -> bool {
        self.site.index_path().is_file()
    }
}
