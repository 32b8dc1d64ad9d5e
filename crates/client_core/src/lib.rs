use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{QuotePrediction, QuoteRequest};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_PREDICT_PATH: &str = "/predict";

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("invalid prediction endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("failed to reach prediction service: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("prediction service responded with status {status}")]
    Status { status: u16 },
    #[error("failed to decode prediction response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("prediction client unavailable: {0}")]
    Unavailable(String),
}

/// The external model-serving backend, seen through its single HTTP contract.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, request: &QuoteRequest) -> Result<QuotePrediction, PredictionError>;
}

pub struct HttpPredictionClient {
    http: Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    pub fn new(server_url: &str, predict_path: &str) -> Result<Self, PredictionError> {
        Self::with_http(Client::new(), server_url, predict_path)
    }

    pub fn with_http(
        http: Client,
        server_url: &str,
        predict_path: &str,
    ) -> Result<Self, PredictionError> {
        let endpoint = endpoint_url(server_url, predict_path)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn predict(&self, request: &QuoteRequest) -> Result<QuotePrediction, PredictionError> {
        debug!(endpoint = %self.endpoint, "posting quote request");
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(PredictionError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "prediction service rejected quote request");
            return Err(PredictionError::Status {
                status: status.as_u16(),
            });
        }

        let body: QuotePrediction = res.json().await.map_err(PredictionError::Decode)?;
        debug!(predicted_charge = body.predicted_charge, "received prediction");
        Ok(body)
    }
}

fn endpoint_url(server_url: &str, predict_path: &str) -> Result<Url, PredictionError> {
    let base = server_url.trim().trim_end_matches('/');
    let path = predict_path.trim();
    let endpoint = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };

    Url::parse(&endpoint).map_err(|source| PredictionError::InvalidEndpoint { endpoint, source })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
