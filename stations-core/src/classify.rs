//! Presentation classification for station readings.
//!
//! Maps raw values onto the display categories the views render with:
//! operational status -> status badge category, UV index -> severity band.
//! Both mappings are total; they never fail on unexpected input.

use crate::model::StationStatus;

/// Display category of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// Station is reporting normally.
    Healthy,
    /// Station is not reporting.
    Unavailable,
    /// Station is up but under service.
    Degraded,
    /// Fallback for values the dashboard does not recognize.
    Neutral,
}

impl StatusCategory {
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Healthy => "active",
            StatusCategory::Unavailable => "unavailable",
            StatusCategory::Degraded => "under service",
            StatusCategory::Neutral => "unknown",
        }
    }
}

/// Classify a raw status string into its display category.
///
/// Total over arbitrary input: anything other than the three known statuses
/// falls back to [`StatusCategory::Neutral`].
pub fn status_category(raw: &str) -> StatusCategory {
    match raw {
        "online" => StatusCategory::Healthy,
        "offline" => StatusCategory::Unavailable,
        "maintenance" => StatusCategory::Degraded,
        _ => StatusCategory::Neutral,
    }
}

impl StationStatus {
    /// Display category for an already-typed status value.
    pub fn category(self) -> StatusCategory {
        status_category(self.as_str())
    }
}

/// UV severity band, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UvBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvBand {
    /// Band for a UV index. Bands are contiguous and cover every `u8`,
    /// boundaries inclusive on the lower band.
    pub fn from_index(index: u8) -> Self {
        match index {
            0..=2 => UvBand::Low,
            3..=5 => UvBand::Moderate,
            6..=7 => UvBand::High,
            8..=10 => UvBand::VeryHigh,
            _ => UvBand::Extreme,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UvBand::Low => "Low",
            UvBand::Moderate => "Moderate",
            UvBand::High => "High",
            UvBand::VeryHigh => "Very High",
            UvBand::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for UvBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
