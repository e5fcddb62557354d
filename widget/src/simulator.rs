use std::collections::HashMap;

use crate::{card::Card, error::PageError, Page};

/// A card as laid out on a [SimPage].
#[derive(Clone, Debug, PartialEq)]
pub struct SimCard {
    pub id: String,
    pub title: String,
    pub segments: Vec<&'static str>,
}

/// Per-element state: text content and horizontal offset.
#[derive(Default, Clone, Debug, PartialEq)]
struct SimElement {
    text: String,
    left: Option<f64>,
}

/// Page implementation held in memory, for running without a browser.
#[derive(Default, Debug)]
pub struct SimPage {
    cards: Vec<SimCard>,
    elements: HashMap<String, SimElement>,
}

impl SimPage {
    pub fn new() -> Self {
        Default::default()
    }

    /// Cards on the page, in the order they were added.
    pub fn cards(&self) -> &[SimCard] {
        &self.cards
    }

    /// Text of the element, if it exists.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    /// Horizontal offset of the element, if it exists and has been positioned.
    pub fn left(&self, id: &str) -> Option<f64> {
        self.elements.get(id).and_then(|e| e.left)
    }

    fn element(&mut self, id: &str) -> Result<&mut SimElement, PageError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::missing(id))
    }
}

impl Page for SimPage {
    fn clear(&mut self) -> Result<(), PageError> {
        self.cards.clear();
        self.elements.clear();
        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn add_card(&mut self, card: &Card) -> Result<(), PageError> {
        let ids = &card.ids;
        let all = [
            &ids.card,
            &ids.current,
            &ids.predicted,
            &ids.strip,
            &ids.marker,
            &ids.category,
        ];
        if let Some(id) = all.into_iter().find(|id| self.contains(id)) {
            return Err(PageError::Dom(format!("duplicate id {id:?}")));
        }

        let placeholder = SimElement {
            text: crate::card::LOADING.to_owned(),
            left: None,
        };
        self.elements.insert(ids.card.clone(), SimElement::default());
        self.elements.insert(ids.current.clone(), placeholder.clone());
        self.elements.insert(ids.predicted.clone(), placeholder);
        self.elements.insert(ids.strip.clone(), SimElement::default());
        self.elements.insert(ids.marker.clone(), SimElement::default());
        self.elements.insert(
            ids.category.clone(),
            SimElement {
                text: card.category_placeholder(),
                left: None,
            },
        );
        self.cards.push(SimCard {
            id: ids.card.clone(),
            title: card.title.clone(),
            segments: card.segments().collect(),
        });
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PageError> {
        self.element(id)?.text = text.to_owned();
        Ok(())
    }

    fn set_left(&mut self, id: &str, percent: f64) -> Result<(), PageError> {
        self.element(id)?.left = Some(percent);
        Ok(())
    }
}
