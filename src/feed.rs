use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::FeedConfig;

/// One flight observation as reported by the feed. Fields the scorer does
/// not use are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "type", default)]
    pub aircraft_type: Option<String>,
    #[serde(default)]
    pub callsign: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(default)]
    pub orig_iata: Option<String>,
}

/// All flights returned by one fetch call, with the fetch timestamp.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub flights: Vec<FlightRecord>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    data: Vec<FlightRecord>,
}

// lat_max, lat_min, lon_min, lon_max: the whole world
const WORLD_BOUNDS: &str = "90,-90,-180,180";

/// HTTP client for the aircraft-tracking feed.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch the current world snapshot. Any failure (missing key, HTTP
    /// error, parse error) surfaces as an `Err` the caller decides how to
    /// degrade on; there are no retries.
    pub async fn fetch_snapshot(&self, config: &FeedConfig) -> Result<Snapshot> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("Feed API key is not configured"))?;

        if config.endpoint.is_empty() {
            return Err(anyhow!("Feed endpoint is not configured"));
        }

        let response = self
            .client
            .get(&config.endpoint)
            .query(&[("bounds", WORLD_BOUNDS)])
            .header("Accept", "application/json")
            .header("Accept-Version", "v1")
            .header("Authorization", format!("Bearer {}", api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Feed request failed with status: {}",
                response.status()
            ));
        }

        let body: FeedResponse = response
            .json()
            .await
            .context("Failed to parse feed response")?;

        Ok(Snapshot {
            flights: body.data,
            fetched_at: Utc::now(),
        })
    }
}
