//! Module to handle the HTTP server instances.
//!
//! The server is a small state machine: a [`Stopped`] server can be started
//! and a [`Running`] server can be stopped, which gives back a stopped server
//! bound to the same configured address.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::routes::router;
use super::HTTP_TRACKER_LOG_TARGET;
use crate::container::HttpTrackerCoreContainer;

/// Error that can occur when starting or stopping the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not bind the HTTP tracker to {addr}: {source}")]
    UnableToBind { addr: SocketAddr, source: std::io::Error },

    #[error("Could not get the local address the HTTP tracker is bound to: {source}")]
    UnableToGetLocalAddress { source: std::io::Error },

    #[error("The HTTP tracker stopped with an error: {source}")]
    ServerFailed { source: std::io::Error },

    #[error("The HTTP tracker task could not be joined: {source}")]
    UnableToJoinTask { source: tokio::task::JoinError },
}

/// A HTTP server instance in one of its states.
pub struct HttpServer<S> {
    pub state: S,
}

/// A stopped HTTP server. It only knows the address it will bind to.
pub struct Stopped {
    bind_address: SocketAddr,
}

/// A running HTTP server.
pub struct Running {
    /// The address the server is actually bound to. It differs from the
    /// configured one when the configured port is `0`.
    pub binding: SocketAddr,
    bind_address: SocketAddr,
    halt_task: oneshot::Sender<()>,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl HttpServer<Stopped> {
    #[must_use]
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            state: Stopped { bind_address },
        }
    }

    /// It binds the listener and spawns the server task.
    ///
    /// # Errors
    ///
    /// It would return an error if the address can't be bound.
    pub async fn start(self, http_tracker_container: Arc<HttpTrackerCoreContainer>) -> Result<HttpServer<Running>, Error> {
        let bind_address = self.state.bind_address;

        let listener = TcpListener::bind(bind_address)
            .await
            .map_err(|source| Error::UnableToBind {
                addr: bind_address,
                source,
            })?;

        let binding = listener
            .local_addr()
            .map_err(|source| Error::UnableToGetLocalAddress { source })?;

        let app = router(http_tracker_container);

        let (halt_task, halt_receiver) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
                .with_graceful_shutdown(async move {
                    // A dropped sender also halts the server.
                    let _ = halt_receiver.await;
                    tracing::info!(target: HTTP_TRACKER_LOG_TARGET, "Stopping server on: http://{binding} ...");
                })
                .await
        });

        tracing::info!(target: HTTP_TRACKER_LOG_TARGET, "Started on: http://{binding}");

        Ok(HttpServer {
            state: Running {
                binding,
                bind_address,
                halt_task,
                task,
            },
        })
    }
}

impl HttpServer<Running> {
    /// It stops accepting connections and waits for the in-flight requests
    /// to finish.
    ///
    /// # Errors
    ///
    /// It would return an error if the server task failed or panicked.
    pub async fn stop(self) -> Result<HttpServer<Stopped>, Error> {
        // The receiver is gone only if the server task already finished.
        let _ = self.state.halt_task.send(());

        self.state
            .task
            .await
            .map_err(|source| Error::UnableToJoinTask { source })?
            .map_err(|source| Error::ServerFailed { source })?;

        tracing::info!(target: HTTP_TRACKER_LOG_TARGET, "Stopped server on: http://{}", self.state.binding);

        Ok(HttpServer {
            state: Stopped {
                bind_address: self.state.bind_address,
            },
        })
    }
}
