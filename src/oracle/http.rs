use tracing::{debug, warn};

use super::{MoveOracle, MoveRequest};
use crate::error::OracleError;

/// Oracle backed by a remote move service: POSTs the request as JSON and
/// expects a bare integer column back.
#[derive(Debug, Clone)]
pub struct HttpOracle {
    url: String,
    client: reqwest::Client,
}

impl HttpOracle {
    pub fn new(url: impl Into<String>) -> Self {
        HttpOracle {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl MoveOracle for HttpOracle {
    async fn choose_move(&self, request: &MoveRequest) -> Result<usize, OracleError> {
        debug!(url = %self.url, player = request.player, level = request.level, "requesting oracle move");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "oracle returned error status");
                OracleError::Unavailable(e.to_string())
            })?;

        let column: usize = response.json().await?;
        debug!(column, "oracle chose column");
        Ok(column)
    }

    fn name(&self) -> &str {
        "Remote"
    }
}
