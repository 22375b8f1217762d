use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use rendezvous_tracker::container::{AppContainer, HttpTrackerCoreContainer};
use rendezvous_tracker::servers::http::server::{HttpServer, Running};
use rendezvous_tracker_client::connection_info::ConnectionInfo;
use rendezvous_tracker_client::v1::client::Client;
use rendezvous_tracker_configuration::Configuration;

/// A running HTTP tracker bound to an ephemeral port on the loopback
/// interface.
pub struct Environment {
    pub app_container: Arc<AppContainer>,
    pub server: HttpServer<Running>,
}

impl Environment {
    pub async fn started() -> Self {
        Self::started_with(ephemeral_configuration()).await
    }

    pub async fn started_with(configuration: Configuration) -> Self {
        let app_container = Arc::new(AppContainer::initialize(&configuration));

        let server = HttpServer::new(configuration.http_tracker.bind_address)
            .start(HttpTrackerCoreContainer::from_app_container(&app_container))
            .await
            .expect("it should start the HTTP tracker");

        Self { app_container, server }
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }

    pub fn client(&self) -> Client {
        let connection_info: ConnectionInfo = format!("http://{}", self.bind_address())
            .parse()
            .expect("it should be a valid URL");

        Client::new(connection_info).expect("it should build the client")
    }

    pub async fn stop(self) {
        self.server.stop().await.expect("it should stop the HTTP tracker");
    }
}

pub fn ephemeral_configuration() -> Configuration {
    let mut configuration = Configuration::default();

    configuration.http_tracker.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    configuration
}
