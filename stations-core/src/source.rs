use crate::model::{StationDetail, StationSummary};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod mock;

pub use mock::MockStationSource;

/// Errors a station lookup can produce.
///
/// The in-memory source only ever fails with [`SourceError::NotFound`]; a
/// source backed by a real telemetry store would grow fetch-failure, timeout,
/// and malformed-identifier variants here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("no station with id '{0}'")]
    NotFound(String),
}

/// Read interface over the station store.
///
/// The dashboard views only ever read: the full summary collection for the
/// list page and one full record for the detail page. Keeping the surface
/// this narrow lets the static table be swapped for a live telemetry store
/// without touching the render layer.
#[async_trait]
pub trait StationSource: Send + Sync + Debug {
    /// Every known station, in stable source order.
    async fn all_stations(&self) -> Result<Vec<StationSummary>, SourceError>;

    /// The full record for one station. Exact, case-sensitive id match.
    async fn station_by_id(&self, id: &str) -> Result<StationDetail, SourceError>;
}

/// Construct the default source.
///
/// Until a real telemetry store exists, the static mock table is the only
/// implementation.
pub fn default_source() -> Box<dyn StationSource> {
    Box::new(MockStationSource::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_names_the_id() {
        let err = SourceError::NotFound("999".to_string());
        assert!(err.to_string().contains("999"));
        assert!(err.to_string().contains("no station"));
    }

    #[tokio::test]
    async fn default_source_serves_the_mock_table() {
        let source = default_source();
        let stations = source.all_stations().await.expect("list must succeed");
        assert!(!stations.is_empty());
    }
}
