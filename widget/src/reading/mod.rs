//! Types for surfacing AQI readings.

use std::{cell::RefCell, collections::HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::FetchError;

/// A reading for one city, as served by the `/predict` endpoint.
///
/// Every field may be missing from the response;
/// a missing field is shown as "not available".
#[derive(Default, Clone, Debug, PartialEq, Deserialize)]
pub struct AqiReading {
    /// City name, as echoed back by the server.
    #[serde(rename = "City")]
    pub city: Option<String>,

    /// Latest observed AQI.
    #[serde(rename = "Current AQI", default, deserialize_with = "lenient_number")]
    pub current: Option<f64>,

    /// Model prediction for the next day.
    #[serde(rename = "Predicted AQI", default, deserialize_with = "lenient_number")]
    pub predicted: Option<f64>,

    /// Severity label, e.g. "Moderate".
    #[serde(rename = "Category")]
    pub category: Option<String>,

    /// Time at which the reading was received, if the source records it.
    #[serde(skip)]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl AqiReading {
    /// Decode a reading from a JSON response body.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Accept a number, or a string holding one.
/// Anything else that isn't null reads as absent rather than failing the whole reading.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(v)) => Some(v),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

/// A type that can get the AQI reading for a city.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait AqiSource {
    async fn fetch(&self, city: &str) -> Result<AqiReading, FetchError>;
}

/// Get a reading for the city, or `None` if it could not be had.
///
/// Failures are logged here and go no further.
pub async fn fetch_aqi<S>(source: &S, city: &str) -> Option<AqiReading>
where
    S: AqiSource + ?Sized,
{
    tracing::info!("fetching AQI data for {city}");
    match source.fetch(city).await {
        Ok(reading) => {
            tracing::info!("data for {city}: {:?}", reading);
            Some(reading)
        }
        Err(e) => {
            tracing::warn!("error fetching AQI for {city}: {e}");
            None
        }
    }
}

#[cfg(feature = "web")]
pub mod predict;

/// Fake AQI source: serves fixed readings, and fails for any city it doesn't know.
#[derive(Default)]
pub struct FakeAqiSource {
    pub readings: HashMap<String, AqiReading>,
    calls: RefCell<Vec<String>>,
}

impl FakeAqiSource {
    pub fn new() -> Self {
        Default::default()
    }

    /// Serve this reading for the city.
    pub fn with(mut self, city: &str, reading: AqiReading) -> Self {
        self.readings.insert(city.to_owned(), reading);
        self
    }

    /// Cities requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AqiSource for FakeAqiSource {
    async fn fetch(&self, city: &str) -> Result<AqiReading, FetchError> {
        self.calls.borrow_mut().push(city.to_owned());
        self.readings
            .get(city)
            .cloned()
            .ok_or(FetchError::Status(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_body() {
        let body = r#"{
            "City": "Lahore",
            "Current AQI": 152,
            "Predicted AQI": 148.2561,
            "Category": "Unhealthy for Sensitive Groups"
        }"#;
        let reading = AqiReading::from_json(body).expect("body should decode");
        assert_eq!(reading.city.as_deref(), Some("Lahore"));
        assert_eq!(reading.current, Some(152.0));
        assert_eq!(reading.predicted, Some(148.2561));
        assert_eq!(
            reading.category.as_deref(),
            Some("Unhealthy for Sensitive Groups")
        );
        assert_eq!(reading.fetched_at, None);
    }

    #[test]
    fn decode_missing_and_null_keys() {
        let reading = AqiReading::from_json(r#"{"Current AQI": null, "error": "upstream"}"#)
            .expect("body should decode");
        assert_eq!(reading, AqiReading::default());
    }

    #[test]
    fn decode_numbers_sent_as_strings() {
        let reading = AqiReading::from_json(
            r#"{"Current AQI": "152", "Predicted AQI": "n/a", "Category": "Unhealthy"}"#,
        )
        .expect("body should decode");
        assert_eq!(reading.current, Some(152.0));
        assert_eq!(reading.predicted, None);
        assert_eq!(reading.category.as_deref(), Some("Unhealthy"));

        let reading = AqiReading::from_json(r#"{"Current AQI": [1, 2]}"#)
            .expect("body should decode");
        assert_eq!(reading.current, None);
    }

    #[test]
    fn decode_garbage_fails() {
        let err = AqiReading::from_json("<html>oops</html>").expect_err("should not decode");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn failure_becomes_none() {
        let source = FakeAqiSource::new().with(
            "Multan",
            AqiReading {
                current: Some(80.0),
                ..Default::default()
            },
        );
        assert!(fetch_aqi(&source, "Lahore").await.is_none());
        let reading = fetch_aqi(&source, "Multan").await.expect("known city");
        assert_eq!(reading.current, Some(80.0));
        assert_eq!(source.calls(), ["Lahore", "Multan"]);
    }
}
