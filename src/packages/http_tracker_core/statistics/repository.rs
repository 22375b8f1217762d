use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use super::metrics::Metrics;

/// A repository for the tracker metrics.
#[derive(Clone)]
pub struct Repository {
    pub stats: Arc<RwLock<Metrics>>,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(Metrics::default())),
        }
    }

    pub async fn get_stats(&self) -> RwLockReadGuard<'_, Metrics> {
        self.stats.read().await
    }

    pub async fn increase_tcp4_announces(&self) {
        let mut stats_lock = self.stats.write().await;
        stats_lock.tcp4_announces_handled += 1;
        drop(stats_lock);
    }

    pub async fn increase_tcp4_lists(&self) {
        let mut stats_lock = self.stats.write().await;
        stats_lock.tcp4_lists_handled += 1;
        drop(stats_lock);
    }

    pub async fn increase_tcp6_announces(&self) {
        let mut stats_lock = self.stats.write().await;
        stats_lock.tcp6_announces_handled += 1;
        drop(stats_lock);
    }

    pub async fn increase_tcp6_lists(&self) {
        let mut stats_lock = self.stats.write().await;
        stats_lock.tcp6_lists_handled += 1;
        drop(stats_lock);
    }

    pub async fn increase_invalid_announces(&self) {
        let mut stats_lock = self.stats.write().await;
        stats_lock.invalid_announces += 1;
        drop(stats_lock);
    }

    pub async fn increase_peers_evicted(&self, count: u64) {
        let mut stats_lock = self.stats.write().await;
        stats_lock.peers_evicted += count;
        drop(stats_lock);
    }
}
