//! The result of one voyage lookup.

use chrono::{NaiveDate, NaiveTime};

use super::{Station, VoyageId};

/// A snapshot of a voyage at the moment it was fetched.
///
/// Built once from a successful current-position lookup and never modified
/// afterwards. The station list is empty when the overview was not fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voyage {
    id: VoyageId,
    service_date: NaiveDate,
    current_station: Station,
    stations: Vec<Station>,
    sources: Vec<String>,
    fetched_at: NaiveTime,
}

impl Voyage {
    /// Create a voyage snapshot.
    ///
    /// `service_date` and `fetched_at` are carrier-local and must come from
    /// the same instant.
    pub fn new(
        id: VoyageId,
        service_date: NaiveDate,
        current_station: Station,
        stations: Vec<Station>,
        sources: Vec<String>,
        fetched_at: NaiveTime,
    ) -> Self {
        Self {
            id,
            service_date,
            current_station,
            stations,
            sources,
            fetched_at,
        }
    }

    pub fn id(&self) -> &VoyageId {
        &self.id
    }

    /// Carrier-local date the lookup was made on.
    pub fn service_date(&self) -> NaiveDate {
        self.service_date
    }

    /// Where the train was last reported.
    pub fn current_station(&self) -> &Station {
        &self.current_station
    }

    /// Scheduled stops in itinerary order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Upstream request targets this snapshot was built from.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Carrier-local time of the lookup.
    pub fn fetched_at(&self) -> NaiveTime {
        self.fetched_at
    }
}
