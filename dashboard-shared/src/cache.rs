/// Page-cache invalidation
///
/// Mutating actions mark the rendered invoice listing stale through a
/// [`CacheInvalidator`]. The bundled [`PathRevalidator`] keeps a generation
/// counter per path: a renderer that remembers the generation it rendered at
/// knows its copy is stale once the counter moves.
///
/// # Example
///
/// ```
/// use dashboard_shared::cache::{CacheInvalidator, PathRevalidator};
///
/// # async fn example() {
/// let cache = PathRevalidator::new();
/// cache.revalidate_path("/dashboard/invoices").await;
/// assert_eq!(cache.generation("/dashboard/invoices").await, 1);
/// # }
/// ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Path of the invoice listing view
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Marks cached renders of a path stale
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    async fn revalidate_path(&self, path: &str);
}

/// Last revalidation of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revalidation {
    /// Incremented on every revalidation
    pub generation: u64,

    pub at: DateTime<Utc>,
}

/// In-process revalidation registry
#[derive(Clone, Default)]
pub struct PathRevalidator {
    paths: Arc<RwLock<HashMap<String, Revalidation>>>,
}

impl PathRevalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation of a path; 0 if it was never revalidated
    pub async fn generation(&self, path: &str) -> u64 {
        self.paths
            .read()
            .await
            .get(path)
            .map(|r| r.generation)
            .unwrap_or(0)
    }

    pub async fn last_revalidation(&self, path: &str) -> Option<Revalidation> {
        self.paths.read().await.get(path).copied()
    }

    /// Whether a render taken at `generation` is out of date
    pub async fn is_stale(&self, path: &str, generation: u64) -> bool {
        self.generation(path).await > generation
    }
}

#[async_trait]
impl CacheInvalidator for PathRevalidator {
    async fn revalidate_path(&self, path: &str) {
        let mut paths = self.paths.write().await;
        let entry = paths.entry(path.to_string()).or_insert(Revalidation {
            generation: 0,
            at: Utc::now(),
        });
        entry.generation += 1;
        entry.at = Utc::now();

        debug!(path, generation = entry.generation, "Revalidated path");
    }
}
