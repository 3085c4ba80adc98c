use crate::domain::model::{Astronaut, CrewManifest, LocationReport, PassReport, PassRequest};
use crate::domain::ports::IssApi;
use crate::utils::error::{IssError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_API_BASE: &str = "http://api.open-notify.org";

const CURRENT_POSITION_PATH: &str = "/iss-now.json";
const PASS_PREDICTIONS_PATH: &str = "/iss-pass.json";
const ASTRONAUTS_PATH: &str = "/astros.json";

/// GET `url` and decode the body as JSON.
///
/// Anything other than HTTP 200, a transport failure, a body that is not
/// JSON, or a `message` field other than `"success"` becomes `RemoteApi`.
pub async fn fetch_json(
    client: &Client,
    url: &str,
    params: Option<&[(&str, String)]>,
) -> Result<Value> {
    tracing::debug!("GET {} params={:?}", url, params);

    let mut request = client.get(url);
    if let Some(params) = params {
        request = request.query(params);
    }

    let response = request
        .send()
        .await
        .map_err(|e| IssError::remote(url, format!("request failed: {}", e)))?;

    let status = response.status();
    tracing::debug!("API response status: {}", status);
    if status != StatusCode::OK {
        return Err(IssError::remote(url, format!("HTTP {}", status)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| IssError::remote(url, format!("failed to read body: {}", e)))?;

    let value: Value = serde_json::from_str(&body)
        .map_err(|e| IssError::remote(url, format!("malformed JSON body: {}", e)))?;

    if let Some(message) = value.get("message").and_then(Value::as_str) {
        if message != "success" {
            return Err(IssError::remote(url, format!("API reported '{}'", message)));
        }
    }

    Ok(value)
}

fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| IssError::remote(url, format!("unexpected response shape: {}", e)))
}

#[derive(Debug, Deserialize)]
struct PeopleResponse {
    #[serde(default)]
    number: Option<u32>,
    people: Vec<Astronaut>,
}

/// `IssApi` backed by the open-notify HTTP endpoints.
#[derive(Debug, Clone)]
pub struct OpenNotifyClient {
    client: Client,
    base_url: String,
}

impl OpenNotifyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for OpenNotifyClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[async_trait]
impl IssApi for OpenNotifyClient {
    async fn current_location(&self) -> Result<LocationReport> {
        let url = self.endpoint(CURRENT_POSITION_PATH);
        let value = fetch_json(&self.client, &url, None).await?;
        decode(&url, value)
    }

    async fn passes(&self, request: &PassRequest) -> Result<PassReport> {
        let url = self.endpoint(PASS_PREDICTIONS_PATH);
        let params = request.query_params();
        let value = fetch_json(&self.client, &url, Some(params.as_slice())).await?;
        decode(&url, value)
    }

    async fn people_in_space(&self) -> Result<CrewManifest> {
        let url = self.endpoint(ASTRONAUTS_PATH);
        let value = fetch_json(&self.client, &url, None).await?;
        let response: PeopleResponse = decode(&url, value)?;
        Ok(CrewManifest::from_astronauts(response.people).with_reported_count(response.number))
    }
}
