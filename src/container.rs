use std::sync::Arc;

use rendezvous_tracker_configuration::{Configuration, Core, HttpTracker};
use rendezvous_tracker_core::announce_handler::AnnounceHandler;
use rendezvous_tracker_core::container::TrackerCoreContainer;
use rendezvous_tracker_core::list_handler::ListHandler;
use rendezvous_tracker_core::registry::manager::RegistryManager;

use crate::packages::http_tracker_core::statistics;

/// Every service the application needs, built once at startup.
pub struct AppContainer {
    pub core_config: Arc<Core>,
    pub http_tracker_config: Arc<HttpTracker>,
    pub tracker_core_container: Arc<TrackerCoreContainer>,
    pub http_stats_event_sender: Arc<Option<Box<dyn statistics::event::sender::Sender>>>,
    pub http_stats_repository: Arc<statistics::repository::Repository>,
}

impl AppContainer {
    /// It must be called from inside a Tokio runtime when usage statistics
    /// are enabled because it spawns the statistics listener.
    #[must_use]
    pub fn initialize(configuration: &Configuration) -> AppContainer {
        let core_config = Arc::new(configuration.core.clone());

        let tracker_core_container = Arc::new(TrackerCoreContainer::initialize(&core_config));

        let (http_stats_event_sender, http_stats_repository) = statistics::setup::factory(core_config.tracker_usage_statistics);

        AppContainer {
            core_config,
            http_tracker_config: Arc::new(configuration.http_tracker.clone()),
            tracker_core_container,
            http_stats_event_sender: Arc::new(http_stats_event_sender),
            http_stats_repository: Arc::new(http_stats_repository),
        }
    }

    #[must_use]
    pub fn registry_manager(&self) -> Arc<RegistryManager> {
        self.tracker_core_container.registry_manager.clone()
    }
}

/// The services the HTTP tracker handlers depend on.
pub struct HttpTrackerCoreContainer {
    pub http_tracker_config: Arc<HttpTracker>,
    pub announce_handler: Arc<AnnounceHandler>,
    pub list_handler: Arc<ListHandler>,
    pub http_stats_event_sender: Arc<Option<Box<dyn statistics::event::sender::Sender>>>,
}

impl HttpTrackerCoreContainer {
    #[must_use]
    pub fn from_app_container(app_container: &AppContainer) -> Arc<Self> {
        Arc::new(Self {
            http_tracker_config: app_container.http_tracker_config.clone(),
            announce_handler: app_container.tracker_core_container.announce_handler.clone(),
            list_handler: app_container.tracker_core_container.list_handler.clone(),
            http_stats_event_sender: app_container.http_stats_event_sender.clone(),
        })
    }
}
