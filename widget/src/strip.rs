//! Drawing routines for a card's readouts and severity strip.

use crate::{
    bands::{gauge, Gauge},
    card::{category_text, CardIds, UNAVAILABLE},
    error::PageError,
    reading::AqiReading,
    Page,
};

/// Move the marker to the value's place on the strip, and label it.
pub fn render_strip<P>(
    page: &mut P,
    ids: &CardIds,
    value: f64,
    category: &str,
) -> Result<Gauge, PageError>
where
    P: Page + ?Sized,
{
    let g = gauge(value);
    page.set_left(&ids.marker, g.position)?;
    page.set_text(&ids.category, &category_text(category))?;
    Ok(g)
}

/// Fill a card with a reading.
pub fn show_reading<P>(page: &mut P, ids: &CardIds, reading: &AqiReading) -> Result<(), PageError>
where
    P: Page + ?Sized,
{
    page.set_text(&ids.current, &format_current(reading.current))?;
    page.set_text(&ids.predicted, &format_predicted(reading.predicted))?;

    let category = reading.category.as_deref().unwrap_or(UNAVAILABLE);
    match reading.current {
        Some(current) => {
            let g = render_strip(page, ids, current, category)?;
            tracing::debug!(
                "{} at {:.2}% ({})",
                ids.card,
                g.position,
                g.band.label
            );
        }
        // Nothing to place; leave the marker where it is.
        None => page.set_text(&ids.category, &category_text(category))?,
    }
    Ok(())
}

/// Current AQI as the server reported it.
pub fn format_current(value: Option<f64>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_owned(), |v| v.to_string())
}

/// Predicted AQI, to three decimal places.
pub fn format_predicted(value: Option<f64>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_owned(), |v| format!("{v:.3}"))
}
