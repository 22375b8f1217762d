use std::sync::Arc;

use rendezvous_tracker_configuration::Core;

use crate::announce_handler::AnnounceHandler;
use crate::list_handler::ListHandler;
use crate::registry::manager::RegistryManager;
use crate::registry::repository::in_memory::InMemoryPeerRegistry;

/// The core services, all sharing the same registry instance.
pub struct TrackerCoreContainer {
    pub core_config: Arc<Core>,
    pub in_memory_peer_registry: Arc<InMemoryPeerRegistry>,
    pub announce_handler: Arc<AnnounceHandler>,
    pub list_handler: Arc<ListHandler>,
    pub registry_manager: Arc<RegistryManager>,
}

impl TrackerCoreContainer {
    #[must_use]
    pub fn initialize(core_config: &Arc<Core>) -> Self {
        let in_memory_peer_registry = Arc::new(InMemoryPeerRegistry::default());

        Self::initialize_with(core_config, &in_memory_peer_registry)
    }

    /// Builds the services around an existing registry.
    #[must_use]
    pub fn initialize_with(core_config: &Arc<Core>, in_memory_peer_registry: &Arc<InMemoryPeerRegistry>) -> Self {
        let announce_handler = Arc::new(AnnounceHandler::new(in_memory_peer_registry));
        let list_handler = Arc::new(ListHandler::new(in_memory_peer_registry));
        let registry_manager = Arc::new(RegistryManager::new(core_config, in_memory_peer_registry));

        Self {
            core_config: core_config.clone(),
            in_memory_peer_registry: in_memory_peer_registry.clone(),
            announce_handler,
            list_handler,
            registry_manager,
        }
    }
}
