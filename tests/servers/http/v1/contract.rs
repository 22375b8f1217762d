use rendezvous_http_protocol::v1::requests::announce::Announce;

fn announce_request(peer_id: &str, info_hash: &str, public_ip: &str, public_port: &str) -> Announce {
    Announce {
        peer_id: peer_id.to_owned(),
        info_hash: info_hash.to_owned(),
        public_ip: public_ip.to_owned(),
        public_port: public_port.to_owned(),
    }
}

mod receiving_an_announce_request {
    use rendezvous_http_protocol::v1::responses;

    use super::announce_request;
    use crate::servers::http::environment::{ephemeral_configuration, Environment};

    #[tokio::test]
    async fn should_respond_with_the_swarm_including_the_announcing_peer() {
        let env = Environment::started().await;
        let client = env.client();

        let first = client
            .announce(&announce_request("peer1", "hashA", "1.2.3.4", "6000"))
            .await
            .unwrap();

        assert_eq!(first.info_hash, "hashA");
        assert_eq!(
            first.peers,
            vec![responses::PeerRecord {
                peer_id: "peer1".to_owned(),
                info_hash: "hashA".to_owned(),
                public_ip: "1.2.3.4".to_owned(),
                public_port: "6000".to_owned(),
            }]
        );

        let second = client
            .announce(&announce_request("peer2", "hashA", "5.6.7.8", "6001"))
            .await
            .unwrap();

        let mut peer_ids: Vec<String> = second.peers.into_iter().map(|peer| peer.peer_id).collect();
        peer_ids.sort();

        assert_eq!(peer_ids, vec!["peer1".to_owned(), "peer2".to_owned()]);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_replace_the_address_of_a_peer_that_announces_again() {
        let env = Environment::started().await;
        let client = env.client();

        client
            .announce(&announce_request("peer1", "hashA", "1.1.1.1", "1000"))
            .await
            .unwrap();

        let response = client
            .announce(&announce_request("peer1", "hashA", "3.3.3.3", "3000"))
            .await
            .unwrap();

        assert_eq!(response.peers.len(), 1);
        assert_eq!(response.peers[0].public_ip, "3.3.3.3");
        assert_eq!(response.peers[0].public_port, "3000");

        env.stop().await;
    }

    #[tokio::test]
    async fn should_respond_with_bad_request_when_the_info_hash_is_empty() {
        let env = Environment::started().await;

        let response = env
            .client()
            .announce_raw(r#"{"peerId":"peer1","infoHash":"","publicIp":"1.2.3.4","publicPort":"6000"}"#.to_owned())
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);

        let error: responses::Error = response.json().await.unwrap();

        assert!(error.failure_reason.contains("info hash is empty"));

        env.stop().await;
    }

    #[tokio::test]
    async fn should_respond_with_bad_request_when_the_peer_id_is_missing() {
        let env = Environment::started().await;

        let response = env
            .client()
            .announce_raw(r#"{"infoHash":"hashA","publicIp":"1.2.3.4","publicPort":"6000"}"#.to_owned())
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);

        let error: responses::Error = response.json().await.unwrap();

        assert!(error.failure_reason.contains("peer ID is empty"));

        env.stop().await;
    }

    #[tokio::test]
    async fn should_reject_a_body_that_is_not_json() {
        let env = Environment::started().await;

        let response = env.client().announce_raw("not json".to_owned()).await.unwrap();

        assert!(response.status().is_client_error());

        let error: responses::Error = response.json().await.unwrap();

        assert!(!error.failure_reason.is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn should_reject_a_body_larger_than_the_configured_limit() {
        let mut configuration = ephemeral_configuration();
        configuration.http_tracker.max_body_size = 64;

        let env = Environment::started_with(configuration).await;

        let body = r#"{"peerId":"peer1","infoHash":"hashA","publicIp":"1111:2222:3333:4444:5555:6666:7777:8888","publicPort":"6000"}"#.to_owned();

        let response = env.client().announce_raw(body).await.unwrap();

        assert_eq!(response.status().as_u16(), 413);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_register_a_rejected_peer() {
        let env = Environment::started().await;
        let client = env.client();

        client
            .announce_raw(r#"{"peerId":"","infoHash":"hashA","publicIp":"1.2.3.4","publicPort":"6000"}"#.to_owned())
            .await
            .unwrap();

        assert!(client.list().await.unwrap().swarms.is_empty());

        env.stop().await;
    }
}

mod receiving_a_list_request {
    use super::announce_request;
    use crate::servers::http::environment::Environment;

    #[tokio::test]
    async fn should_respond_with_an_empty_map_when_no_peer_has_announced() {
        let env = Environment::started().await;

        let list = env.client().list().await.unwrap();

        assert!(list.swarms.is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn should_respond_with_every_swarm_and_its_peers() {
        let env = Environment::started().await;
        let client = env.client();

        client
            .announce(&announce_request("peer1", "hashA", "1.2.3.4", "6000"))
            .await
            .unwrap();
        client
            .announce(&announce_request("peer2", "hashA", "5.6.7.8", "6001"))
            .await
            .unwrap();
        client
            .announce(&announce_request("peer3", "hashB", "9.9.9.9", "7000"))
            .await
            .unwrap();

        let list = client.list().await.unwrap();

        assert_eq!(list.swarms.len(), 2);
        assert_eq!(list.swarms["hashA"].len(), 2);
        assert_eq!(list.swarms["hashA"]["peer2"].public_ip, "5.6.7.8");
        assert_eq!(list.swarms["hashB"]["peer3"].public_port, "7000");

        env.stop().await;
    }
}

mod keeping_a_peer_alive {
    use std::time::Duration;

    use rendezvous_tracker_client::v1::heartbeat::heartbeat;
    use tokio::sync::oneshot;

    use super::announce_request;
    use crate::servers::http::environment::Environment;

    #[tokio::test]
    async fn should_announce_the_peer_periodically_until_it_is_halted() {
        let env = Environment::started().await;
        let client = env.client();

        let (halt_sender, halt_receiver) = oneshot::channel();

        let heartbeat_task = tokio::spawn(async move {
            heartbeat(
                &client,
                &announce_request("peer1", "hashA", "1.2.3.4", "6000"),
                Duration::from_millis(20),
                halt_receiver,
            )
            .await
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        halt_sender.send(()).unwrap();

        let announces = heartbeat_task.await.unwrap();

        assert!(announces >= 2);
        assert_eq!(env.client().list().await.unwrap().swarms["hashA"].len(), 1);

        env.stop().await;
    }
}

mod collecting_usage_statistics {
    use std::time::Duration;

    use super::announce_request;
    use crate::servers::http::environment::Environment;

    #[tokio::test]
    async fn should_count_the_announces_and_the_lists_handled() {
        let env = Environment::started().await;
        let client = env.client();

        client
            .announce(&announce_request("peer1", "hashA", "1.2.3.4", "6000"))
            .await
            .unwrap();
        client.list().await.unwrap();

        let repository = env.app_container.http_stats_repository.clone();

        // The events are handled by the statistics listener in its own task.
        let mut handled = false;
        for _ in 0..50 {
            let stats = repository.get_stats().await;
            if stats.tcp4_announces_handled == 1 && stats.tcp4_lists_handled == 1 {
                handled = true;
                break;
            }
            drop(stats);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert!(handled);

        env.stop().await;
    }
}
