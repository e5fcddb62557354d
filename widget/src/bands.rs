//! Routine for placing an AQI value on the severity strip.

/// Highest value the strip can show; anything above is pinned to the right edge.
pub const MAX_AQI: f64 = 500.0;

/// A contiguous range of the AQI scale with a severity label.
///
/// The lower bound is implied by the previous band's upper bound (or 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub label: &'static str,
    /// Inclusive upper bound.
    pub max: f64,
    /// CSS colour of this band's segment in the strip.
    pub color: &'static str,
}

/// The US EPA severity bands, in increasing order.
pub const BANDS: [Band; 6] = [
    Band {
        label: "Good",
        max: 50.0,
        color: "#008000",
    },
    Band {
        label: "Moderate",
        max: 100.0,
        color: "#ADFF2F",
    },
    Band {
        label: "Unhealthy for Sensitive Groups",
        max: 150.0,
        color: "#FFFF00",
    },
    Band {
        label: "Unhealthy",
        max: 200.0,
        color: "#FFA500",
    },
    Band {
        label: "Very Unhealthy",
        max: 300.0,
        color: "#FF0000",
    },
    Band {
        label: "Hazardous",
        max: MAX_AQI,
        color: "#800080",
    },
];

/// Where a value lands on the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    /// Index into [BANDS].
    pub index: usize,
    pub band: Band,
    /// The input after clamping to [0, MAX_AQI].
    pub value: f64,
    /// Horizontal offset of the marker, 0.0 to 100.0.
    pub position: f64,
}

/// Restrict a raw value to the range covered by the strip.
/// NaN and negative values count as 0.
pub fn clamp_aqi(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_AQI)
}

/// Find the band for the value and the marker's position within the strip.
///
/// Each band gets an equal share of the strip's width,
/// regardless of how much of the AQI scale it spans.
pub fn gauge(value: f64) -> Gauge {
    let value = clamp_aqi(value);
    let index = BANDS
        .iter()
        .position(|band| value <= band.max)
        .unwrap_or(BANDS.len() - 1);
    let band = BANDS[index];

    let min = if index == 0 { 0.0 } else { BANDS[index - 1].max };
    let within = (value - min) / (band.max - min);
    // Scale once, so the top of the last band is exactly 100.
    let position = (index as f64 + within) * 100.0 / BANDS.len() as f64;
    tracing::trace!(
        "AQI {value:.1} in band {index} ({}), position {position:.2}%",
        band.label
    );

    Gauge {
        index,
        band,
        value,
        position,
    }
}
