//! An air-quality widget.
//!
//! Shows a card per city with the current and predicted AQI,
//! and a marker on a six-band severity strip.
//!
//! # Building
//! The browser build needs the `web` feature and a wasm32 target, e.g.
//! `wasm-pack build widget --target web -- --features web`.
//! The page must contain an element with id `cities` to hold the cards.
//!
pub mod bands;
pub mod card;
pub mod error;
pub mod reading;
pub mod simulator;
pub mod strip;

#[cfg(feature = "web")]
pub mod dom;
#[cfg(feature = "web")]
mod web;

use card::{provision_card, Card};
use error::PageError;
use reading::{fetch_aqi, AqiSource};
use strip::show_reading;

/// A Page is the render target for city cards.
/// In the browser, this is the document's `#cities` container.
pub trait Page {
    /// Remove all cards.
    fn clear(&mut self) -> Result<(), PageError>;

    /// Returns true iff an element with this id is on the page.
    fn contains(&self, id: &str) -> bool;

    /// Append a new card, with its placeholder contents, to the page.
    fn add_card(&mut self, card: &Card) -> Result<(), PageError>;

    /// Replace the text of an element.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PageError>;

    /// Set an element's horizontal offset, as a percentage of its container.
    fn set_left(&mut self, id: &str, percent: f64) -> Result<(), PageError>;
}

/// Settings for the widget.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Base URL of the prediction server.
    pub base_url: String,
    /// Cities to show, in display order.
    pub cities: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: "http://127.0.0.1:5000".to_owned(),
            cities: ["Lahore", "Multan", "Bahawalpur", "Rawalpindi", "Faisalabad"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Outcome of one refresh.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct RefreshSummary {
    /// Cities whose cards now show a reading.
    pub updated: Vec<String>,
    /// Cities left showing placeholders.
    pub failed: Vec<String>,
}

/// Fills in city cards from an AQI source.
pub struct Dashboard {
    settings: Settings,
}

impl From<Settings> for Dashboard {
    fn from(settings: Settings) -> Self {
        Dashboard { settings }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Settings::default().into()
    }
}

impl Dashboard {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Rebuild the cards and fill in each city, one at a time.
    ///
    /// A city that can't be fetched keeps its placeholders;
    /// later cities are still processed.
    pub async fn refresh<P, S>(&self, page: &mut P, source: &S) -> RefreshSummary
    where
        P: Page + ?Sized,
        S: AqiSource + ?Sized,
    {
        let mut summary = RefreshSummary::default();
        if let Err(e) = page.clear() {
            tracing::error!("could not clear city cards: {e}");
        }

        for city in &self.settings.cities {
            match Self::refresh_city(page, source, city).await {
                Ok(true) => summary.updated.push(city.clone()),
                Ok(false) => summary.failed.push(city.clone()),
                Err(e) => {
                    tracing::error!("could not update card for {city}: {e}");
                    summary.failed.push(city.clone());
                }
            }
        }
        tracing::info!(
            "refreshed {} cities, {} without data",
            summary.updated.len(),
            summary.failed.len()
        );
        summary
    }

    /// Returns Ok(false) if there was no reading to show.
    async fn refresh_city<P, S>(page: &mut P, source: &S, city: &str) -> Result<bool, PageError>
    where
        P: Page + ?Sized,
        S: AqiSource + ?Sized,
    {
        let ids = provision_card(page, city)?;
        let Some(reading) = fetch_aqi(source, city).await else {
            return Ok(false);
        };
        show_reading(page, &ids, &reading)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardIds, LOADING};
    use crate::reading::{AqiReading, FakeAqiSource};
    use crate::simulator::SimPage;

    fn reading(current: f64, predicted: f64, category: &str) -> AqiReading {
        AqiReading {
            current: Some(current),
            predicted: Some(predicted),
            category: Some(category.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "http://127.0.0.1:5000");
        assert_eq!(settings.cities.len(), 5);
        assert_eq!(settings.cities[0], "Lahore");
    }

    #[tokio::test]
    async fn failed_city_keeps_placeholders() {
        let source = FakeAqiSource::new()
            .with("Lahore", reading(152.0, 148.25613, "Unhealthy"))
            .with("Bahawalpur", reading(25.0, 30.0, "Good"));
        let dashboard: Dashboard = Settings {
            cities: ["Lahore", "Multan", "Bahawalpur"].map(String::from).to_vec(),
            ..Default::default()
        }
        .into();
        let mut page = SimPage::new();

        let summary = dashboard.refresh(&mut page, &source).await;
        assert_eq!(summary.updated, ["Lahore", "Bahawalpur"]);
        assert_eq!(summary.failed, ["Multan"]);
        assert_eq!(page.cards().len(), 3);

        let lahore = CardIds::for_city("Lahore");
        assert_eq!(page.text(&lahore.current), Some("152"));
        assert_eq!(page.text(&lahore.predicted), Some("148.256"));
        assert_eq!(page.text(&lahore.category), Some("Category: Unhealthy"));

        let multan = CardIds::for_city("Multan");
        assert_eq!(page.text(&multan.current), Some(LOADING));
        assert_eq!(page.text(&multan.predicted), Some(LOADING));
        assert_eq!(page.text(&multan.category), Some("Category: Loading..."));
        assert_eq!(page.left(&multan.marker), None);

        let bahawalpur = CardIds::for_city("Bahawalpur");
        let left = page.left(&bahawalpur.marker).expect("marker should move");
        assert!((left - 8.33).abs() < 0.01);
    }

    #[tokio::test]
    async fn cities_fetched_in_order() {
        let source = FakeAqiSource::new();
        let dashboard = Dashboard::default();
        let mut page = SimPage::new();

        let summary = dashboard.refresh(&mut page, &source).await;
        assert_eq!(source.calls(), dashboard.settings().cities);
        assert_eq!(summary.failed, dashboard.settings().cities);
        let titles: Vec<_> = page.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, dashboard.settings().cities);
    }

    #[tokio::test]
    async fn refresh_replaces_cards() {
        let source = FakeAqiSource::new().with("Multan", reading(90.0, 95.0, "Moderate"));
        let dashboard = Dashboard::default();
        let mut page = SimPage::new();

        dashboard.refresh(&mut page, &source).await;
        dashboard.refresh(&mut page, &source).await;
        assert_eq!(page.cards().len(), dashboard.settings().cities.len());
    }
}
