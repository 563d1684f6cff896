use serde::{Deserialize, Serialize};

/// Whether a station is currently reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Online,
    Offline,
    Maintenance,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Online => "online",
            StationStatus::Offline => "offline",
            StationStatus::Maintenance => "maintenance",
        }
    }

    pub const fn all() -> &'static [StationStatus] {
        &[StationStatus::Online, StationStatus::Offline, StationStatus::Maintenance]
    }
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One entry of the station list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSummary {
    pub id: String,
    pub name: String,
    pub location: String,
    /// °C
    pub temperature: f64,
    /// Percent, 0-100.
    pub humidity: u8,
    pub status: StationStatus,
    /// Opaque display string; never parsed.
    pub last_update: String,
}

/// The full record behind the station detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDetail {
    pub id: String,
    pub name: String,
    pub location: String,
    /// °C
    pub temperature: f64,
    /// Percent, 0-100.
    pub humidity: u8,
    /// hPa
    pub pressure: f64,
    /// km/h
    pub wind_speed: f64,
    /// Compass abbreviation, e.g. "NE".
    pub wind_direction: String,
    /// km
    pub visibility: f64,
    pub uv_index: u8,
    pub status: StationStatus,
    /// Opaque display string; never parsed.
    pub last_update: String,
    pub coordinates: Coordinates,
    /// Meters above sea level.
    pub elevation: i32,
    /// Install date as an opaque display string.
    pub installed: String,
}

impl StationDetail {
    /// Project the list-view fields out of a full record.
    ///
    /// Summaries are always derived from the detail record, so the shared
    /// fields of the two views cannot drift apart.
    pub fn summary(&self) -> StationSummary {
        StationSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            temperature: self.temperature,
            humidity: self.humidity,
            status: self.status,
            last_update: self.last_update.clone(),
        }
    }
}
