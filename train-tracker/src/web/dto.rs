//! Data transfer objects for web responses.

use chrono::NaiveTime;
use serde::Serialize;

use crate::domain::{Carrier, Station, Voyage};

/// A voyage snapshot.
#[derive(Debug, Serialize)]
pub struct VoyageResponse {
    /// Carrier code (e.g., "hzpp")
    pub carrier: String,

    /// Voyage ID (train number)
    pub voyage: String,

    /// Service date, YYYY-MM-DD
    pub service_date: String,

    /// Where the train was last reported
    pub current_station: StationResult,

    /// Scheduled stops in itinerary order (empty if not fetched)
    pub stations: Vec<StationResult>,

    /// Upstream pages the data came from
    pub sources: Vec<String>,

    /// Carrier-local time of the lookup, HH:MM:SS
    pub fetched_at: String,
}

/// A station on a voyage.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station name as published by the carrier
    pub name: String,

    /// Arrival time, HH:MM
    pub arrival: Option<String>,

    /// Arrival delay in minutes
    pub arrival_delay: Option<i32>,

    /// Departure time, HH:MM
    pub departure: Option<String>,

    /// Departure delay in minutes
    pub departure_delay: Option<i32>,
}

/// A supported carrier.
#[derive(Debug, Serialize)]
pub struct CarrierResponse {
    pub code: String,
    pub name: String,
    pub homepage: String,
    pub time_zone: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl VoyageResponse {
    /// Create from a domain Voyage.
    pub fn from_voyage(carrier: &Carrier, voyage: &Voyage) -> Self {
        Self {
            carrier: carrier.code().to_string(),
            voyage: voyage.id().to_string(),
            service_date: voyage.service_date().format("%Y-%m-%d").to_string(),
            current_station: StationResult::from_station(voyage.current_station()),
            stations: voyage
                .stations()
                .iter()
                .map(StationResult::from_station)
                .collect(),
            sources: voyage.sources().to_vec(),
            fetched_at: voyage.fetched_at().format("%H:%M:%S").to_string(),
        }
    }
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name().to_string(),
            arrival: station.arrival_time().map(format_time),
            arrival_delay: station.arrival_delay().map(|d| d.minutes()),
            departure: station.departure_time().map(format_time),
            departure_delay: station.departure_delay().map(|d| d.minutes()),
        }
    }
}

impl CarrierResponse {
    pub fn from_carrier(carrier: &Carrier) -> Self {
        Self {
            code: carrier.code().to_string(),
            name: carrier.name().to_string(),
            homepage: carrier.homepage().to_string(),
            time_zone: carrier.time_zone().name().to_string(),
        }
    }
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
