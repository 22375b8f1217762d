use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// Where the tracker is listening.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub origin: Url,
}

impl ConnectionInfo {
    #[must_use]
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }
}

impl FromStr for ConnectionInfo {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(Url::parse(s)?))
    }
}
