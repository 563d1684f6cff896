//! Static in-memory station table.
//!
//! Stand-in for a live telemetry store. Each entry is a full snapshot; the
//! list view is served as a projection of the same records, so summary and
//! detail can never disagree on shared fields.

use async_trait::async_trait;

use crate::model::{Coordinates, StationDetail, StationStatus, StationSummary};

use super::{SourceError, StationSource};

/// One hardcoded station snapshot.
struct StationRecord {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    temperature: f64,
    humidity: u8,
    pressure: f64,
    wind_speed: f64,
    wind_direction: &'static str,
    visibility: f64,
    uv_index: u8,
    status: StationStatus,
    last_update: &'static str,
    lat: f64,
    lng: f64,
    elevation: i32,
    installed: &'static str,
}

/// All known stations, in display order. Single source of truth for the
/// dashboard; both views are served from this table.
static STATIONS: &[StationRecord] = &[
    StationRecord {
        id: "1",
        name: "Beijing Central",
        location: "Beijing, China",
        temperature: 22.5,
        humidity: 65,
        pressure: 1013.2,
        wind_speed: 12.3,
        wind_direction: "NE",
        visibility: 15.2,
        uv_index: 6,
        status: StationStatus::Online,
        last_update: "2025-08-26 10:30:00",
        lat: 39.9042,
        lng: 116.4074,
        elevation: 43,
        installed: "2020-03-15",
    },
    StationRecord {
        id: "2",
        name: "Shanghai Harbor",
        location: "Shanghai, China",
        temperature: 28.3,
        humidity: 78,
        pressure: 1009.8,
        wind_speed: 8.7,
        wind_direction: "SE",
        visibility: 12.5,
        uv_index: 8,
        status: StationStatus::Online,
        last_update: "2025-08-26 10:29:00",
        lat: 31.2304,
        lng: 121.4737,
        elevation: 4,
        installed: "2019-11-22",
    },
    StationRecord {
        id: "3",
        name: "Guangzhou Airport",
        location: "Guangzhou, China",
        temperature: 31.2,
        humidity: 82,
        pressure: 1005.1,
        wind_speed: 6.2,
        wind_direction: "SW",
        visibility: 8.3,
        uv_index: 9,
        status: StationStatus::Maintenance,
        last_update: "2025-08-26 09:15:00",
        lat: 23.1291,
        lng: 113.2644,
        elevation: 11,
        installed: "2021-07-08",
    },
    StationRecord {
        id: "4",
        name: "Shenzhen Tech",
        location: "Shenzhen, China",
        temperature: 29.8,
        humidity: 71,
        pressure: 1007.6,
        wind_speed: 9.8,
        wind_direction: "S",
        visibility: 14.1,
        uv_index: 7,
        status: StationStatus::Online,
        last_update: "2025-08-26 10:28:00",
        lat: 22.3193,
        lng: 114.1694,
        elevation: 8,
        installed: "2020-12-03",
    },
    StationRecord {
        id: "5",
        name: "Chengdu West",
        location: "Chengdu, China",
        temperature: 25.1,
        humidity: 68,
        pressure: 952.3,
        wind_speed: 4.5,
        wind_direction: "W",
        visibility: 11.7,
        uv_index: 5,
        status: StationStatus::Offline,
        last_update: "2025-08-26 08:45:00",
        lat: 30.5728,
        lng: 104.0668,
        elevation: 505,
        installed: "2018-05-14",
    },
    StationRecord {
        id: "6",
        name: "Hangzhou Lake",
        location: "Hangzhou, China",
        temperature: 26.7,
        humidity: 73,
        pressure: 1011.4,
        wind_speed: 7.3,
        wind_direction: "NW",
        visibility: 13.8,
        uv_index: 6,
        status: StationStatus::Online,
        last_update: "2025-08-26 10:31:00",
        lat: 30.2741,
        lng: 120.1551,
        elevation: 19,
        installed: "2019-09-27",
    },
];

impl StationRecord {
    fn detail(&self) -> StationDetail {
        StationDetail {
            id: self.id.to_string(),
            name: self.name.to_string(),
            location: self.location.to_string(),
            temperature: self.temperature,
            humidity: self.humidity,
            pressure: self.pressure,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction.to_string(),
            visibility: self.visibility,
            uv_index: self.uv_index,
            status: self.status,
            last_update: self.last_update.to_string(),
            coordinates: Coordinates { lat: self.lat, lng: self.lng },
            elevation: self.elevation,
            installed: self.installed.to_string(),
        }
    }
}

/// [`StationSource`] over the static table. Lookups resolve immediately;
/// the async surface exists so a real store can suspend in its place.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockStationSource;

impl MockStationSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StationSource for MockStationSource {
    async fn all_stations(&self) -> Result<Vec<StationSummary>, SourceError> {
        tracing::debug!(count = STATIONS.len(), "listing stations");
        Ok(STATIONS.iter().map(|record| record.detail().summary()).collect())
    }

    async fn station_by_id(&self, id: &str) -> Result<StationDetail, SourceError> {
        tracing::debug!(id, "looking up station");
        STATIONS
            .iter()
            .find(|record| record.id == id)
            .map(StationRecord::detail)
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_duplicate_station_ids() {
        let mut seen = std::collections::HashSet::new();
        for record in STATIONS {
            assert!(seen.insert(record.id), "duplicate station id '{}' in table", record.id);
        }
    }

    #[test]
    fn humidity_stays_within_percent_range() {
        for record in STATIONS {
            assert!(record.humidity <= 100, "humidity out of range for '{}'", record.name);
        }
    }

    #[tokio::test]
    async fn list_is_non_empty_and_stable_across_calls() {
        let source = MockStationSource::new();

        let first = source.all_stations().await.expect("list must succeed");
        let second = source.all_stations().await.expect("list must succeed");

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(first.len(), STATIONS.len());
    }

    #[tokio::test]
    async fn every_listed_id_resolves_to_its_own_record() {
        let source = MockStationSource::new();

        for summary in source.all_stations().await.expect("list must succeed") {
            let detail = source
                .station_by_id(&summary.id)
                .await
                .expect("listed station must resolve");
            assert_eq!(detail.id, summary.id);
        }
    }

    #[tokio::test]
    async fn undefined_ids_return_not_found() {
        let source = MockStationSource::new();

        for id in ["999", "", "abc"] {
            let err = source.station_by_id(id).await.unwrap_err();
            assert_eq!(err, SourceError::NotFound(id.to_string()));
        }
    }

    #[tokio::test]
    async fn lookup_is_exact_match_only() {
        let source = MockStationSource::new();

        // Defined id "1" must not match padded or partial forms.
        assert!(source.station_by_id(" 1").await.is_err());
        assert!(source.station_by_id("1 ").await.is_err());
        assert!(source.station_by_id("01").await.is_err());
    }

    #[tokio::test]
    async fn summary_and_detail_agree_on_shared_fields() {
        let source = MockStationSource::new();

        for summary in source.all_stations().await.expect("list must succeed") {
            let detail = source
                .station_by_id(&summary.id)
                .await
                .expect("listed station must resolve");
            assert_eq!(detail.summary(), summary);
        }
    }
}
