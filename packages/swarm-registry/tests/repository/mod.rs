use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer::fixture::PeerBuilder;
use rendezvous_tracker_primitives::registry_metrics::RegistryMetrics;
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;
use rendezvous_tracker_swarm_registry::{RegistryDashMap, RegistryRwLockParkingLot};
use rstest::{fixture, rstest};

use crate::common::repo::Repo;

#[fixture]
fn rw_lock_parking_lot() -> Repo {
    Repo::RwLockParkingLot(RegistryRwLockParkingLot::default())
}

#[fixture]
fn dash_map() -> Repo {
    Repo::DashMap(RegistryDashMap::default())
}

fn at(secs: u64) -> DurationSinceUnixEpoch {
    DurationSinceUnixEpoch::from_secs(secs)
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn it_should_return_the_whole_swarm_after_upserting_a_peer(#[case] repo: Repo) {
    repo.upsert_peer(&PeerBuilder::default().with_peer_id("peer1").build());

    let peers = repo.upsert_peer(&PeerBuilder::default().with_peer_id("peer2").build());

    assert_eq!(peers.len(), 2);
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn it_should_keep_one_record_per_peer_id_when_a_peer_announces_twice(#[case] repo: Repo) {
    repo.upsert_peer(&PeerBuilder::default().last_updated_on(at(10)).build());
    let peers = repo.upsert_peer(&PeerBuilder::default().last_updated_on(at(12)).build());

    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].updated, at(12));
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn it_should_isolate_swarms_from_each_other(#[case] repo: Repo) {
    repo.upsert_peer(&PeerBuilder::default().with_info_hash("A").with_peer_id("p1").build());

    assert!(repo.get_swarm_peers(&InfoHash::from("B")).is_empty());
    assert!(!repo.get_snapshot().contains_key(&InfoHash::from("B")));
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn the_snapshot_should_not_change_after_later_upserts(#[case] repo: Repo) {
    repo.upsert_peer(&PeerBuilder::default().with_peer_id("peer1").build());

    let snapshot = repo.get_snapshot();

    repo.upsert_peer(&PeerBuilder::default().with_peer_id("peer2").build());
    repo.remove_inactive_peers(at(u64::MAX / 2));

    assert_eq!(snapshot[&InfoHash::from("hashA")].len(), 1);
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn it_should_evict_only_the_peers_updated_before_the_cutoff(#[case] repo: Repo) {
    let lifespan = Duration::from_secs(35);
    let now = at(100);

    // updated + lifespan < now
    repo.upsert_peer(&PeerBuilder::default().with_peer_id("expired").last_updated_on(at(64)).build());
    // updated + lifespan == now
    repo.upsert_peer(&PeerBuilder::default().with_peer_id("boundary").last_updated_on(at(65)).build());
    repo.upsert_peer(&PeerBuilder::default().with_peer_id("fresh").last_updated_on(at(90)).build());

    let removed = repo.remove_inactive_peers(now - lifespan);

    let peer_ids: Vec<String> = repo
        .get_swarm_peers(&InfoHash::from("hashA"))
        .iter()
        .map(|peer| peer.peer_id.to_string())
        .collect();

    assert_eq!(removed, 1);
    assert_eq!(peer_ids, vec!["boundary".to_string(), "fresh".to_string()]);
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn peerless_swarms_should_not_be_visible_even_before_they_are_removed(#[case] repo: Repo) {
    repo.upsert_peer(&PeerBuilder::default().last_updated_on(at(0)).build());

    repo.remove_inactive_peers(at(1));

    assert!(repo.get_snapshot().is_empty());
    assert_eq!(repo.get_metrics(), RegistryMetrics::default());
    assert_eq!(repo.remove_peerless_swarms(), 1);
    assert_eq!(repo.remove_peerless_swarms(), 0);
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn it_should_count_swarms_and_peers(#[case] repo: Repo) {
    repo.upsert_peer(&PeerBuilder::default().with_info_hash("A").with_peer_id("p1").build());
    repo.upsert_peer(&PeerBuilder::default().with_info_hash("A").with_peer_id("p2").build());
    repo.upsert_peer(&PeerBuilder::default().with_info_hash("B").with_peer_id("p1").build());

    assert_eq!(repo.get_metrics(), RegistryMetrics { swarms: 2, peers: 3 });
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn concurrent_upserts_of_distinct_peers_should_all_be_stored(#[case] repo: Repo) {
    const PEERS: usize = 64;

    let repo = Arc::new(repo);

    thread::scope(|scope| {
        for idx in 0..PEERS {
            let repo = repo.clone();
            scope.spawn(move || {
                let peer_id = format!("peer{idx:02}");
                let port = format!("{}", 6000 + idx);
                repo.upsert_peer(
                    &PeerBuilder::default()
                        .with_peer_id(&peer_id)
                        .with_public_address("10.0.0.1", &port)
                        .build(),
                );
            });
        }
    });

    let peers = repo.get_swarm_peers(&InfoHash::from("hashA"));

    assert_eq!(peers.len(), PEERS);
    for peer in peers {
        let idx: usize = peer.peer_id.as_str().trim_start_matches("peer").parse().unwrap();
        assert_eq!(peer.public_port, format!("{}", 6000 + idx));
    }
}

#[rstest]
#[case::rw_lock_parking_lot(rw_lock_parking_lot())]
#[case::dash_map(dash_map())]
fn sweeping_concurrently_with_announces_should_never_drop_a_fresh_peer(#[case] repo: Repo) {
    const WRITERS: u64 = 8;
    const ROUNDS: u64 = 500;

    let cutoff = at(50);
    let repo = Arc::new(repo);
    let writers_done = AtomicBool::new(false);

    thread::scope(|scope| {
        let sweeper = {
            let repo = repo.clone();
            let writers_done = &writers_done;
            scope.spawn(move || {
                while !writers_done.load(Ordering::Acquire) {
                    let stale = PeerBuilder::default().with_peer_id("stale").last_updated_on(at(0)).build();
                    repo.upsert_peer(&stale);
                    repo.remove_inactive_peers(cutoff);
                    repo.remove_peerless_swarms();
                }
            })
        };

        let writers: Vec<_> = (0..WRITERS)
            .map(|idx| {
                let repo = repo.clone();
                scope.spawn(move || {
                    let peer_id = format!("fresh{idx}");
                    for round in 0..ROUNDS {
                        let peers = repo.upsert_peer(
                            &PeerBuilder::default()
                                .with_peer_id(&peer_id)
                                .last_updated_on(at(100 + round))
                                .build(),
                        );

                        assert!(peers.iter().any(|peer| peer.peer_id.as_str() == peer_id));
                    }
                })
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }

        writers_done.store(true, Ordering::Release);
        sweeper.join().unwrap();
    });

    repo.remove_inactive_peers(cutoff);

    let mut peer_ids: Vec<String> = repo
        .get_swarm_peers(&InfoHash::from("hashA"))
        .iter()
        .map(|peer| peer.peer_id.as_str().to_string())
        .collect();
    peer_ids.sort();

    let expected: Vec<String> = (0..WRITERS).map(|idx| format!("fresh{idx}")).collect();
    assert_eq!(peer_ids, expected);
    assert_eq!(repo.get_metrics(), RegistryMetrics { swarms: 1, peers: WRITERS });
}
