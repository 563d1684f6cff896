//! Text rendering for the dashboard pages.
//!
//! Pure functions from a fetch state to the page text, so the page layout is
//! testable without touching the terminal.

use stations_core::{FetchState, SourceError, StationDetail, StationSummary, UvBand};

/// Render the station list page.
pub fn station_list(state: &FetchState<Vec<StationSummary>>) -> String {
    let stations = match state {
        FetchState::Loading => return "Loading weather stations...\n".to_string(),
        FetchState::Failed(err) => return format!("Failed to load weather stations: {err}\n"),
        FetchState::Ready(stations) if stations.is_empty() => {
            return "No weather stations found.\n".to_string();
        }
        FetchState::Ready(stations) => stations,
    };

    let mut output = String::from(
        "Weather Stations\nMonitor weather data from stations across the network.\n\n",
    );

    for station in stations {
        output.push_str(&format!(
            "{} ({})\n  Status:      {} ({})\n  Temperature: {}\u{00b0}C\n  Humidity:    {}%\n  Last Update: {}\n  Details:     stations show {}\n\n",
            station.name,
            station.location,
            station.status,
            station.status.category().label(),
            station.temperature,
            station.humidity,
            station.last_update,
            station.id,
        ));
    }

    output
}

/// Render the station detail page.
pub fn station_detail(state: &FetchState<StationDetail>) -> String {
    let station = match state {
        FetchState::Loading => return "Loading station details...\n".to_string(),
        FetchState::Failed(SourceError::NotFound(id)) => return station_not_found(id),
        FetchState::Ready(station) => station,
    };

    let uv_band = UvBand::from_index(station.uv_index);

    let mut output = format!(
        "{} ({})\nStatus: {} ({})\n\n",
        station.name,
        station.location,
        station.status,
        station.status.category().label(),
    );

    output.push_str("Current Conditions:\n");
    output.push_str(&format!("  Temperature: {}\u{00b0}C\n", station.temperature));
    output.push_str(&format!("  Humidity:    {}%\n", station.humidity));
    output.push_str(&format!("  Pressure:    {} hPa\n", station.pressure));
    output.push_str(&format!("  Wind:        {} km/h {}\n", station.wind_speed, station.wind_direction));
    output.push_str(&format!("  Visibility:  {} km\n", station.visibility));

    output.push_str(&format!("\nUV Index: {} ({})\n\n", station.uv_index, uv_band.label()));

    output.push_str("Station Info:\n");
    output.push_str(&format!("  Station ID:  {}\n", station.id));
    output.push_str(&format!(
        "  Coordinates: {:.4}, {:.4}\n",
        station.coordinates.lat, station.coordinates.lng
    ));
    output.push_str(&format!("  Elevation:   {} m\n", station.elevation));
    output.push_str(&format!("  Installed:   {}\n", station.installed));
    output.push_str(&format!("  Last Update: {}\n", station.last_update));

    output.push_str(&format!(
        "\nActions:\n  stations history {id}   View historical data\n  stations export {id}    Export station data\n  stations alerts {id}    Configure alerts\n",
        id = station.id,
    ));

    output.push_str("\nBack to the station list: stations list\n");
    output
}

/// Render the not-found page for a missing station id.
pub fn station_not_found(id: &str) -> String {
    format!(
        "Station Not Found\nNo weather station with id '{id}' exists.\nHint: run `stations list` to see available stations.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stations_core::{Coordinates, StationStatus};

    fn sample_summary(id: &str, name: &str) -> StationSummary {
        StationSummary {
            id: id.to_string(),
            name: name.to_string(),
            location: "Somewhere".to_string(),
            temperature: 20.0,
            humidity: 50,
            status: StationStatus::Online,
            last_update: "2025-08-26 10:00:00".to_string(),
        }
    }

    fn sample_detail() -> StationDetail {
        StationDetail {
            id: "9".to_string(),
            name: "Harbor East".to_string(),
            location: "Somewhere".to_string(),
            temperature: 24.5,
            humidity: 60,
            pressure: 1010.0,
            wind_speed: 11.0,
            wind_direction: "NE".to_string(),
            visibility: 10.0,
            uv_index: 8,
            status: StationStatus::Maintenance,
            last_update: "2025-08-26 10:00:00".to_string(),
            coordinates: Coordinates { lat: 1.23456, lng: -7.654321 },
            elevation: 12,
            installed: "2020-01-01".to_string(),
        }
    }

    #[test]
    fn list_page_names_every_station() {
        let state = FetchState::Ready(vec![
            sample_summary("1", "North Field"),
            sample_summary("2", "South Field"),
        ]);

        let page = station_list(&state);

        assert!(page.contains("Weather Stations"));
        assert!(page.contains("North Field"));
        assert!(page.contains("South Field"));
        assert!(page.contains("stations show 1"));
        assert!(page.contains("stations show 2"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let state: FetchState<Vec<StationSummary>> = FetchState::Ready(vec![]);
        assert_eq!(station_list(&state), "No weather stations found.\n");
    }

    #[test]
    fn loading_states_render_their_messages() {
        let list: FetchState<Vec<StationSummary>> = FetchState::Loading;
        let detail: FetchState<StationDetail> = FetchState::Loading;

        assert_eq!(station_list(&list), "Loading weather stations...\n");
        assert_eq!(station_detail(&detail), "Loading station details...\n");
    }

    #[test]
    fn detail_page_shows_classified_values() {
        let state = FetchState::Ready(sample_detail());

        let page = station_detail(&state);

        assert!(page.contains("Harbor East"));
        assert!(page.contains("maintenance (under service)"));
        assert!(page.contains("UV Index: 8 (Very High)"));
        assert!(page.contains("Coordinates: 1.2346, -7.6543"));
        assert!(page.contains("stations history 9"));
        assert!(page.contains("Back to the station list"));
    }

    #[test]
    fn missing_station_renders_not_found_page() {
        let state: FetchState<StationDetail> =
            FetchState::Failed(SourceError::NotFound("999".to_string()));

        let page = station_detail(&state);

        assert!(page.contains("Station Not Found"));
        assert!(page.contains("'999'"));
        assert!(page.contains("stations list"));
    }
}
