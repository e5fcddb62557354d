//! Placeholder cards for each city.

use crate::{
    bands::{Band, BANDS},
    error::PageError,
    Page,
};

/// Text shown in a readout until data arrives.
pub const LOADING: &str = "Loading...";

/// Text shown for a value the server didn't provide.
pub const UNAVAILABLE: &str = "N/A";

/// Element ids for one city's card.
///
/// Every id is suffixed with the lowercased city name,
/// so cards for different cities never share elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardIds {
    pub card: String,
    pub current: String,
    pub predicted: String,
    pub strip: String,
    pub marker: String,
    pub category: String,
}

impl CardIds {
    pub fn for_city(city: &str) -> Self {
        let key = city.to_lowercase();
        CardIds {
            card: format!("city-{key}"),
            current: format!("current-{key}"),
            predicted: format!("predicted-{key}"),
            strip: format!("aqiColorBlocks-{key}"),
            marker: format!("aqiIndicator-{key}"),
            category: format!("aqiCategory-{key}"),
        }
    }
}

/// Contents of a freshly-provisioned card.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub ids: CardIds,
}

impl Card {
    pub fn new(city: &str) -> Self {
        Card {
            title: city.to_owned(),
            ids: CardIds::for_city(city),
        }
    }

    /// Background colours of the strip segments, left to right.
    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        let bands: &'static [Band] = &BANDS;
        bands.iter().map(|band| band.color)
    }

    /// Initial text of the category label.
    pub fn category_placeholder(&self) -> String {
        category_text(LOADING)
    }
}

/// Text of the category label.
pub fn category_text(category: &str) -> String {
    format!("Category: {category}")
}

/// Make sure the city has a card on the page, adding one if needed.
///
/// Returns the ids of the card's elements.
pub fn provision_card<P>(page: &mut P, city: &str) -> Result<CardIds, PageError>
where
    P: Page + ?Sized,
{
    let card = Card::new(city);
    if page.contains(&card.ids.card) {
        tracing::debug!("card for {city} already present");
        return Ok(card.ids);
    }
    page.add_card(&card)?;
    Ok(card.ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::SimPage;

    #[test]
    fn ids_use_lowercase_key() {
        let ids = CardIds::for_city("Rawalpindi");
        assert_eq!(ids.card, "city-rawalpindi");
        assert_eq!(ids.current, "current-rawalpindi");
        assert_eq!(ids.predicted, "predicted-rawalpindi");
        assert_eq!(ids.strip, "aqiColorBlocks-rawalpindi");
        assert_eq!(ids.marker, "aqiIndicator-rawalpindi");
        assert_eq!(ids.category, "aqiCategory-rawalpindi");
    }

    #[test]
    fn new_card_has_placeholders() {
        let mut page = SimPage::new();
        let ids = provision_card(&mut page, "Lahore").expect("should add card");

        assert_eq!(page.text(&ids.current), Some(LOADING));
        assert_eq!(page.text(&ids.predicted), Some(LOADING));
        assert_eq!(page.text(&ids.category), Some("Category: Loading..."));
        assert_eq!(page.left(&ids.marker), None);

        let cards = page.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Lahore");
        assert_eq!(cards[0].segments.len(), 6);
        assert_eq!(cards[0].segments[0], "#008000");
    }

    #[test]
    fn provisioning_is_idempotent() {
        let mut page = SimPage::new();
        let first = provision_card(&mut page, "Multan").expect("should add card");
        page.set_text(&first.current, "42").expect("readout exists");

        let second = provision_card(&mut page, "Multan").expect("should find card");
        assert_eq!(first, second);
        assert_eq!(page.cards().len(), 1);
        // The existing card is left alone.
        assert_eq!(page.text(&first.current), Some("42"));
    }
}
