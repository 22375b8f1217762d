use crate::packages::http_tracker_core::statistics::event::Event;
use crate::packages::http_tracker_core::statistics::repository::Repository;

pub async fn handle_event(event: Event, stats_repository: &Repository) {
    match event {
        // TCP4
        Event::Tcp4Announce => {
            stats_repository.increase_tcp4_announces().await;
        }
        Event::Tcp4List => {
            stats_repository.increase_tcp4_lists().await;
        }

        // TCP6
        Event::Tcp6Announce => {
            stats_repository.increase_tcp6_announces().await;
        }
        Event::Tcp6List => {
            stats_repository.increase_tcp6_lists().await;
        }

        // Rejected requests
        Event::InvalidAnnounce => {
            stats_repository.increase_invalid_announces().await;
        }

        // Reaper
        Event::PeersEvicted { count } => {
            stats_repository.increase_peers_evicted(count).await;
        }
    }

    tracing::debug!("stats: {:?}", stats_repository.get_stats().await);
}

#[cfg(test)]
mod tests {
    use crate::packages::http_tracker_core::statistics::event::handler::handle_event;
    use crate::packages::http_tracker_core::statistics::event::Event;
    use crate::packages::http_tracker_core::statistics::repository::Repository;

    #[tokio::test]
    async fn should_increase_the_tcp4_announces_counter_when_it_receives_a_tcp4_announce_event() {
        let stats_repository = Repository::new();

        handle_event(Event::Tcp4Announce, &stats_repository).await;

        let stats = stats_repository.get_stats().await;

        assert_eq!(stats.tcp4_announces_handled, 1);
    }

    #[tokio::test]
    async fn should_increase_the_tcp4_lists_counter_when_it_receives_a_tcp4_list_event() {
        let stats_repository = Repository::new();

        handle_event(Event::Tcp4List, &stats_repository).await;

        let stats = stats_repository.get_stats().await;

        assert_eq!(stats.tcp4_lists_handled, 1);
    }

    #[tokio::test]
    async fn should_increase_the_tcp6_announces_counter_when_it_receives_a_tcp6_announce_event() {
        let stats_repository = Repository::new();

        handle_event(Event::Tcp6Announce, &stats_repository).await;

        let stats = stats_repository.get_stats().await;

        assert_eq!(stats.tcp6_announces_handled, 1);
    }

    #[tokio::test]
    async fn should_increase_the_tcp6_lists_counter_when_it_receives_a_tcp6_list_event() {
        let stats_repository = Repository::new();

        handle_event(Event::Tcp6List, &stats_repository).await;

        let stats = stats_repository.get_stats().await;

        assert_eq!(stats.tcp6_lists_handled, 1);
    }

    #[tokio::test]
    async fn should_increase_the_invalid_announces_counter_when_it_receives_an_invalid_announce_event() {
        let stats_repository = Repository::new();

        handle_event(Event::InvalidAnnounce, &stats_repository).await;

        let stats = stats_repository.get_stats().await;

        assert_eq!(stats.invalid_announces, 1);
    }

    #[tokio::test]
    async fn should_add_the_number_of_evicted_peers_when_it_receives_a_peers_evicted_event() {
        let stats_repository = Repository::new();

        handle_event(Event::PeersEvicted { count: 3 }, &stats_repository).await;
        handle_event(Event::PeersEvicted { count: 2 }, &stats_repository).await;

        let stats = stats_repository.get_stats().await;

        assert_eq!(stats.peers_evicted, 5);
    }
}
