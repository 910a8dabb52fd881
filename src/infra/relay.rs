//! Transport through a CORS relay.
//!
//! The relay fetches the target URL on our behalf and answers with a JSON
//! envelope whose `contents` field carries the target's body as a string,
//! which then needs a second parse.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

const USER_AGENT: &str = "steam-revenue-calculator/1.0.0";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status: {0}")]
    Status(String),
    #[error("relay response missing contents")]
    MissingContents,
    #[error("failed to decode relayed body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches a JSON document from `target` and returns it parsed.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn get_json(&self, target: &Url) -> Result<Value, RelayError>;
}

#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    #[serde(default)]
    contents: Option<String>,
    #[serde(default)]
    status: Option<RelayStatus>,
}

#[derive(Debug, Deserialize)]
struct RelayStatus {
    #[serde(default)]
    http_code: Option<u16>,
}

#[derive(Clone)]
pub struct AllOriginsRelay {
    http: Client,
    endpoint: Url,
}

impl AllOriginsRelay {
    pub fn new(endpoint: &str) -> Result<Self, RelayError> {
        let endpoint = Url::parse(endpoint)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, endpoint })
    }

    fn relay_url(&self, target: &Url) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("url", target.as_str());
        url
    }
}

#[async_trait]
impl Relay for AllOriginsRelay {
    async fn get_json(&self, target: &Url) -> Result<Value, RelayError> {
        let url = self.relay_url(target);
        tracing::debug!("Requesting {target} via relay");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let envelope: RelayEnvelope = response.json().await?;
        unwrap_envelope(envelope)
    }
}

fn unwrap_envelope(envelope: RelayEnvelope) -> Result<Value, RelayError> {
    if let Some(status) = envelope.status {
        if status.http_code != Some(200) {
            let code = status
                .http_code
                .map(|code| code.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            return Err(RelayError::Status(code));
        }
    }

    let contents = envelope.contents.ok_or(RelayError::MissingContents)?;
    Ok(serde_json::from_str(&contents)?)
}
