//! Get AQI readings from the prediction server.
//!
//! The server answers `GET /predict?city=<name>` with a JSON object:
//!
//! - `City`: the city name, echoed back
//! - `Current AQI`: the live reading (US AQI) from the upstream air-quality feed
//! - `Predicted AQI`: the model's estimate for the next day
//! - `Category`: severity label for the prediction
//!
//! On failure it answers with a 4xx/5xx and an `error` key instead.

use async_trait::async_trait;
use chrono::Utc;
use gloo_net::http::Request;

use super::{AqiReading, AqiSource};
use crate::error::FetchError;

/// AqiSource backed by the prediction server's HTTP API.
#[derive(Clone, Debug)]
pub struct PredictApi {
    base_url: String,
}

impl PredictApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        PredictApi {
            base_url: base_url.into(),
        }
    }

    /// URL of the prediction endpoint, without the query.
    pub fn endpoint(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait(?Send)]
impl AqiSource for PredictApi {
    async fn fetch(&self, city: &str) -> Result<AqiReading, FetchError> {
        let response = Request::get(&self.endpoint())
            .query([("city", city)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let mut reading = AqiReading::from_json(&body)?;
        reading.fetched_at = Some(Utc::now());
        Ok(reading)
    }
}
