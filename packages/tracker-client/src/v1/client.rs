use std::time::Duration;

use rendezvous_http_protocol::v1::{requests, responses};
use reqwest::{Response, StatusCode};
use thiserror::Error;
use url::Url;

use crate::connection_info::ConnectionInfo;

/// Path of the peers resource. `POST` announces, `GET` lists.
pub const PEERS_PATH: &str = "peers";

/// Default timeout for a single request to the tracker.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request to the tracker failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Invalid tracker URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// HTTP client for the tracker API.
#[derive(Debug, Clone)]
pub struct Client {
    connection_info: ConnectionInfo,
    client: reqwest::Client,
}

impl Client {
    /// # Errors
    ///
    /// Will return an error if the HTTP client can't be built.
    pub fn new(connection_info: ConnectionInfo) -> Result<Self, Error> {
        Self::with_timeout(connection_info, DEFAULT_REQUEST_TIMEOUT)
    }

    /// # Errors
    ///
    /// Will return an error if the HTTP client can't be built.
    pub fn with_timeout(connection_info: ConnectionInfo, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { connection_info, client })
    }

    /// Announces a peer and returns its swarm.
    ///
    /// # Errors
    ///
    /// Will return an error if the request fails or the tracker rejects the
    /// announce.
    pub async fn announce(&self, request: &requests::announce::Announce) -> Result<responses::Announce, Error> {
        let response = self.client.post(self.peers_url()?).json(request).send().await?;

        Ok(Self::ok(response).await?.json::<responses::Announce>().await?)
    }

    /// Returns all the swarms in the tracker.
    ///
    /// # Errors
    ///
    /// Will return an error if the request fails.
    pub async fn list(&self) -> Result<responses::List, Error> {
        let response = self.client.get(self.peers_url()?).send().await?;

        Ok(Self::ok(response).await?.json::<responses::List>().await?)
    }

    /// Sends an announce and returns the raw HTTP response, whatever the
    /// status code.
    ///
    /// # Errors
    ///
    /// Will return an error if the request can't be sent.
    pub async fn announce_raw(&self, body: String) -> Result<Response, Error> {
        Ok(self
            .client
            .post(self.peers_url()?)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?)
    }

    fn peers_url(&self) -> Result<Url, Error> {
        Ok(self.connection_info.origin.join(PEERS_PATH)?)
    }

    async fn ok(response: Response) -> Result<Response, Error> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        Err(Error::UnexpectedStatus { status, body })
    }
}
