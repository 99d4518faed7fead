//! Stations on a voyage's itinerary.

use std::fmt;

use chrono::NaiveTime;

/// Delay against the timetable, in whole minutes.
///
/// Negative values mean the train is early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delay(i32);

impl Delay {
    /// Running to timetable.
    pub const ON_TIME: Delay = Delay(0);

    pub fn from_minutes(minutes: i32) -> Self {
        Delay(minutes)
    }

    pub fn minutes(&self) -> i32 {
        self.0
    }

    pub fn is_late(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} min", self.0)
    }
}

/// One point on a voyage's itinerary.
///
/// What the times mean depends on where the station came from: for a current
/// position it is the observed arrival or departure, for an overview row it
/// is the timetabled call with its reported delays. A station always carries
/// at least one time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    arrival_time: Option<NaiveTime>,
    arrival_delay: Option<Delay>,
    departure_time: Option<NaiveTime>,
    departure_delay: Option<Delay>,
}

impl Station {
    /// A station observed on arrival.
    pub fn arrived(name: impl Into<String>, time: NaiveTime, delay: Option<Delay>) -> Self {
        Self {
            name: name.into(),
            arrival_time: Some(time),
            arrival_delay: delay,
            departure_time: None,
            departure_delay: None,
        }
    }

    /// A station observed on departure (or when passing through).
    pub fn departed(name: impl Into<String>, time: NaiveTime, delay: Option<Delay>) -> Self {
        Self {
            name: name.into(),
            arrival_time: None,
            arrival_delay: None,
            departure_time: Some(time),
            departure_delay: delay,
        }
    }

    /// A timetabled call. Returns `None` if neither time is present.
    pub fn call(
        name: impl Into<String>,
        arrival: Option<(NaiveTime, Option<Delay>)>,
        departure: Option<(NaiveTime, Option<Delay>)>,
    ) -> Option<Self> {
        if arrival.is_none() && departure.is_none() {
            return None;
        }
        Some(Self {
            name: name.into(),
            arrival_time: arrival.map(|(t, _)| t),
            arrival_delay: arrival.and_then(|(_, d)| d),
            departure_time: departure.map(|(t, _)| t),
            departure_delay: departure.and_then(|(_, d)| d),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_time(&self) -> Option<NaiveTime> {
        self.arrival_time
    }

    pub fn arrival_delay(&self) -> Option<Delay> {
        self.arrival_delay
    }

    pub fn departure_time(&self) -> Option<NaiveTime> {
        self.departure_time
    }

    pub fn departure_delay(&self) -> Option<Delay> {
        self.departure_delay
    }

    /// The most recent delay known at this station.
    pub fn delay(&self) -> Option<Delay> {
        self.departure_delay.or(self.arrival_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn delay_display() {
        assert_eq!(Delay::from_minutes(5).to_string(), "+5 min");
        assert_eq!(Delay::from_minutes(-2).to_string(), "-2 min");
        assert_eq!(Delay::ON_TIME.to_string(), "+0 min");
    }

    #[test]
    fn delay_is_late() {
        assert!(Delay::from_minutes(1).is_late());
        assert!(!Delay::ON_TIME.is_late());
        assert!(!Delay::from_minutes(-3).is_late());
    }

    #[test]
    fn arrived_sets_arrival_only() {
        let s = Station::arrived("Sisak", time(10, 5), Some(Delay::from_minutes(3)));
        assert_eq!(s.name(), "Sisak");
        assert_eq!(s.arrival_time(), Some(time(10, 5)));
        assert_eq!(s.arrival_delay(), Some(Delay::from_minutes(3)));
        assert_eq!(s.departure_time(), None);
        assert_eq!(s.delay(), Some(Delay::from_minutes(3)));
    }

    #[test]
    fn departed_sets_departure_only() {
        let s = Station::departed("Sisak", time(10, 7), None);
        assert_eq!(s.arrival_time(), None);
        assert_eq!(s.departure_time(), Some(time(10, 7)));
        assert_eq!(s.delay(), None);
    }

    #[test]
    fn call_requires_a_time() {
        assert!(Station::call("Sisak", None, None).is_none());

        let s = Station::call(
            "Sisak",
            Some((time(10, 5), Some(Delay::from_minutes(2)))),
            Some((time(10, 7), Some(Delay::from_minutes(4)))),
        )
        .unwrap();
        assert_eq!(s.arrival_delay(), Some(Delay::from_minutes(2)));
        // Departure is the more recent observation
        assert_eq!(s.delay(), Some(Delay::from_minutes(4)));
    }
}
