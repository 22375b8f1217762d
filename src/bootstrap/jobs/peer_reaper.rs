//! Job that runs a task on intervals to evict the peers that stopped
//! announcing.
//!
//! A peer is evicted when its last announce is older than the configured
//! `max_peer_timeout`. Depending on the tracker policy the swarms left without
//! peers are removed too.
//!
//! The job stops when the application receives a `ctrl_c` signal (or the halt
//! future given to [`start_job_until`] completes) or when the registry
//! manager has been dropped.
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use rendezvous_tracker_clock::clock::Time;
use rendezvous_tracker_configuration::Core;
use rendezvous_tracker_core::registry::manager::RegistryManager;
use tokio::task::JoinHandle;

use crate::packages::http_tracker_core::statistics;
use crate::packages::http_tracker_core::statistics::event::Event;
use crate::CurrentClock;

pub const REAPER_LOG_TARGET: &str = "PEER REAPER";

/// It starts a job for evicting inactive peers from the registry. The job
/// stops on `ctrl_c`.
///
/// The first sweep runs one `inactive_peer_cleanup_interval` after the job
/// starts.
#[must_use]
pub fn start_job(
    config: &Core,
    registry_manager: &Arc<RegistryManager>,
    http_stats_event_sender: &Arc<Option<Box<dyn statistics::event::sender::Sender>>>,
) -> JoinHandle<()> {
    start_job_until(config, registry_manager, http_stats_event_sender, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(target: REAPER_LOG_TARGET, "Unable to listen for the shutdown signal: {err}");
            futures::future::pending::<()>().await;
        }
    })
}

/// Same as [`start_job`] but the job stops when `halt` completes.
///
/// `halt` is created once, before the first tick, so a halt that completes
/// while a sweep is in progress is seen on the next loop iteration.
#[must_use]
pub fn start_job_until<F>(
    config: &Core,
    registry_manager: &Arc<RegistryManager>,
    http_stats_event_sender: &Arc<Option<Box<dyn statistics::event::sender::Sender>>>,
    halt: F,
) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let weak_registry_manager = std::sync::Arc::downgrade(registry_manager);
    let http_stats_event_sender = http_stats_event_sender.clone();
    // A zero period would panic the interval.
    let interval = config.inactive_peer_cleanup_interval.max(1);

    tokio::spawn(async move {
        tokio::pin!(halt);

        let interval = std::time::Duration::from_secs(interval);
        let mut interval = tokio::time::interval(interval);
        interval.tick().await;

        loop {
            tokio::select! {
                () = &mut halt => {
                    tracing::info!(target: REAPER_LOG_TARGET, "Stopping peer reaper job ...");
                    break;
                }
                _ = interval.tick() => {
                    if let Some(registry_manager) = weak_registry_manager.upgrade() {
                        let start_time = Instant::now();

                        let evicted = registry_manager.cleanup_peers_at(CurrentClock::now());

                        if evicted > 0 {
                            tracing::info!(target: REAPER_LOG_TARGET, "Evicted {evicted} peers in: {}ms", start_time.elapsed().as_millis());

                            if let Some(sender) = http_stats_event_sender.as_deref() {
                                let count = u64::try_from(evicted).unwrap_or(u64::MAX);

                                if let Some(Err(err)) = sender.send_event(Event::PeersEvicted { count }).await {
                                    tracing::warn!(target: REAPER_LOG_TARGET, "Failed to send statistics event: {err}");
                                }
                            }
                        }
                    } else {
                        break;
                    }
                }
            }
        }
    })
}
