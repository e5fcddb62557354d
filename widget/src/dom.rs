//! Page implementation on the browser document.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::{card::Card, card::LOADING, error::PageError, Page};

const STRIP_STYLE: &str = "display: flex; width: 100%; height: 50px; margin-top: 10px;";
const MARKER_STYLE: &str =
    "position: relative; width: 4px; height: 50px; background: black; top: -50px;";
const CATEGORY_STYLE: &str = "text-align: center; margin-top: 10px; font-weight: bold;";

/// Page backed by the live DOM.
/// Cards are appended to the element with id `cities`.
pub struct DomPage {
    document: Document,
    container: Element,
}

fn dom_error(e: JsValue) -> PageError {
    PageError::Dom(format!("{e:?}"))
}

impl DomPage {
    pub const CONTAINER_ID: &'static str = "cities";

    /// Attach to the current document's card container.
    pub fn new() -> Result<Self, PageError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PageError::NoDocument)?;
        let container = document
            .get_element_by_id(Self::CONTAINER_ID)
            .ok_or_else(|| PageError::missing(Self::CONTAINER_ID))?;
        Ok(DomPage {
            document,
            container,
        })
    }

    fn get(&self, id: &str) -> Result<Element, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::missing(id))
    }

    /// Create a detached element.
    fn element(
        &self,
        tag: &str,
        id: Option<&str>,
        style: Option<&str>,
        text: Option<&str>,
    ) -> Result<Element, PageError> {
        let el = self.document.create_element(tag).map_err(dom_error)?;
        if let Some(id) = id {
            el.set_id(id);
        }
        if let Some(style) = style {
            el.set_attribute("style", style).map_err(dom_error)?;
        }
        if text.is_some() {
            el.set_text_content(text);
        }
        Ok(el)
    }

    /// A `<p><strong>{label}</strong> <span id={id}>Loading...</span></p>` readout.
    fn readout(&self, label: &str, id: &str) -> Result<Element, PageError> {
        let p = self.element("p", None, None, None)?;
        let strong = self.element("strong", None, None, Some(label))?;
        let value = self.element("span", Some(id), None, Some(LOADING))?;
        p.append_child(&strong).map_err(dom_error)?;
        p.append_child(&self.document.create_text_node(" "))
            .map_err(dom_error)?;
        p.append_child(&value).map_err(dom_error)?;
        Ok(p)
    }
}

impl Page for DomPage {
    fn clear(&mut self) -> Result<(), PageError> {
        self.container.set_inner_html("");
        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn add_card(&mut self, card: &Card) -> Result<(), PageError> {
        let ids = &card.ids;
        let root = self.element("div", Some(&ids.card), None, None)?;
        root.set_class_name("city");

        let title = self.element("h2", None, None, Some(&card.title))?;
        let current = self.readout("Current AQI:", &ids.current)?;
        let predicted = self.readout("Predicted AQI:", &ids.predicted)?;

        let strip = self.element("div", Some(&ids.strip), Some(STRIP_STYLE), None)?;
        for color in card.segments() {
            let style = format!("flex: 1; background: {color};");
            let segment = self.element("div", None, Some(&style), None)?;
            strip.append_child(&segment).map_err(dom_error)?;
        }

        let marker = self.element("div", Some(&ids.marker), Some(MARKER_STYLE), None)?;
        let category = self.element(
            "p",
            Some(&ids.category),
            Some(CATEGORY_STYLE),
            Some(&card.category_placeholder()),
        )?;

        for child in [&title, &current, &predicted, &strip, &marker, &category] {
            root.append_child(child).map_err(dom_error)?;
        }
        self.container.append_child(&root).map_err(dom_error)?;
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PageError> {
        self.get(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_left(&mut self, id: &str, percent: f64) -> Result<(), PageError> {
        let el: HtmlElement = self
            .get(id)?
            .dyn_into()
            .map_err(|_| PageError::Dom(format!("{id:?} is not an HTML element")))?;
        el.style()
            .set_property("left", &format!("{percent}%"))
            .map_err(dom_error)
    }
}
