//! HŽ HTML page parsing.
//!
//! Both pages are table layouts with the interesting values as loose text in
//! `td` cells. Cell text is whitespace-normalised (including `&nbsp;`) before
//! any matching.
//!
//! The current-position page looks like:
//!
//! ```text
//! Vlak: 203
//! Kolodvor: ZAGREB GL. KOL.
//! Odlazak 05.03.24. u 12:34 sati
//! Kasni 5 min.
//! ```
//!
//! The overview page has one five-cell row per stop: station, arrival,
//! arrival delay, departure, departure delay.
//!
//! "No data" and "page shape not recognised" are kept apart: the `try_`
//! functions return `Ok(None)` / `Ok(vec![])` for the former and
//! [`ParseError`] for the latter.

use std::sync::LazyLock;

use chrono::NaiveTime;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::domain::{Delay, Station};

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static TR: LazyLock<Selector> = LazyLock::new(|| selector("tr"));

/// Phrases the site uses when a train is unknown or not running today.
const NOT_FOUND_MARKERS: [&str; 3] = ["nije u prometu", "nema podataka", "ne postoji"];

const STATION_LABEL: &str = "Kolodvor:";

/// Cells in an overview stop row.
const OVERVIEW_COLUMNS: usize = 5;

fn selector(s: &str) -> Selector {
    // Literal selectors only
    Selector::parse(s).unwrap()
}

/// The page was fetched but does not look like the format we know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected page shape: {0}")]
    UnexpectedShape(String),
}

impl ParseError {
    fn shape(message: impl Into<String>) -> Self {
        ParseError::UnexpectedShape(message.into())
    }
}

/// Extract the train's current position.
///
/// Returns `None` when the page says the voyage is unknown, or when it cannot
/// be parsed at all (logged).
pub fn parse_current_position(body: &str) -> Option<Station> {
    try_parse_current_position(body).unwrap_or_else(|e| {
        warn!(error = %e, "could not parse current position page");
        None
    })
}

/// Extract the scheduled stops in itinerary order.
///
/// Returns an empty list when there are no stop rows, or when the page cannot
/// be parsed at all (logged).
pub fn parse_overview(body: &str) -> Vec<Station> {
    try_parse_overview(body).unwrap_or_else(|e| {
        warn!(error = %e, "could not parse overview page");
        Vec::new()
    })
}

/// Like [`parse_current_position`], but reports unrecognised pages.
pub fn try_parse_current_position(body: &str) -> Result<Option<Station>, ParseError> {
    let document = Html::parse_document(body);

    if document.select(&TABLE).next().is_none() {
        return Err(ParseError::shape("no table in current position page"));
    }

    let cells: Vec<String> = document.select(&TD).map(cell_text).collect();

    if cells_say_not_found(&cells) {
        return Ok(None);
    }

    let Some(name) = cells.iter().find_map(|c| c.strip_prefix(STATION_LABEL)) else {
        return Ok(None);
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::shape("empty station name"));
    }

    let event = cells
        .iter()
        .find_map(|c| parse_event(c))
        .ok_or_else(|| ParseError::shape("no arrival or departure line"))??;

    let delay = cells.iter().find_map(|c| parse_delay_line(c)).transpose()?;

    let station = match event {
        Event::Arrival(time) => Station::arrived(name, time, delay),
        Event::Departure(time) => Station::departed(name, time, delay),
    };
    Ok(Some(station))
}

/// Like [`parse_overview`], but reports unrecognised pages.
pub fn try_parse_overview(body: &str) -> Result<Vec<Station>, ParseError> {
    let document = Html::parse_document(body);

    if document.select(&TABLE).next().is_none() {
        return Err(ParseError::shape("no table in overview page"));
    }

    let mut stations = Vec::new();
    for row in document.select(&TR) {
        let cells: Vec<String> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "td")
            .map(cell_text)
            .collect();

        if cells.len() != OVERVIEW_COLUMNS || is_header_row(&cells) {
            continue;
        }

        stations.push(parse_stop_row(&cells)?);
    }

    Ok(stations)
}

enum Event {
    Arrival(NaiveTime),
    Departure(NaiveTime),
}

/// Parse an "Odlazak 05.03.24. u 12:34 sati" style line.
///
/// `None` if the cell is not an event line at all.
fn parse_event(cell: &str) -> Option<Result<Event, ParseError>> {
    let mut words = cell.split_whitespace();
    let kind = words.next()?;
    let make: fn(NaiveTime) -> Event = match kind {
        "Dolazak" => Event::Arrival,
        // A pass-through is reported like a departure
        "Odlazak" | "Prolazak" => Event::Departure,
        _ => return None,
    };

    let time = words.find_map(parse_hhmm);
    Some(time.map(make).ok_or_else(|| ParseError::shape(format!("no time in {cell:?}"))))
}

/// Parse a "Kasni 5 min." or "Vlak je redovit" style line.
fn parse_delay_line(cell: &str) -> Option<Result<Delay, ParseError>> {
    if let Some(rest) = cell.strip_prefix("Kasni") {
        let minutes = rest
            .split_whitespace()
            .find_map(|w| w.parse::<i32>().ok())
            .map(Delay::from_minutes)
            .ok_or_else(|| ParseError::shape(format!("no minutes in {cell:?}")));
        return Some(minutes);
    }

    let lower = cell.to_lowercase();
    if lower.contains("redovit") || lower.contains("pravovremen") {
        return Some(Ok(Delay::ON_TIME));
    }

    None
}

fn parse_stop_row(cells: &[String]) -> Result<Station, ParseError> {
    let name = cells[0].as_str();
    if name.is_empty() {
        return Err(ParseError::shape("stop row without station name"));
    }

    let arrival = optional_time(&cells[1])?;
    let arrival_delay = optional_delay(&cells[2])?;
    let departure = optional_time(&cells[3])?;
    let departure_delay = optional_delay(&cells[4])?;

    Station::call(
        name,
        arrival.map(|t| (t, arrival_delay)),
        departure.map(|t| (t, departure_delay)),
    )
    .ok_or_else(|| ParseError::shape(format!("stop {name:?} has no times")))
}

fn optional_time(cell: &str) -> Result<Option<NaiveTime>, ParseError> {
    if cell.is_empty() {
        return Ok(None);
    }
    parse_hhmm(cell)
        .map(Some)
        .ok_or_else(|| ParseError::shape(format!("bad time {cell:?}")))
}

fn optional_delay(cell: &str) -> Result<Option<Delay>, ParseError> {
    let Some(first) = cell.split_whitespace().next() else {
        return Ok(None);
    };
    first
        .parse::<i32>()
        .map(|m| Some(Delay::from_minutes(m)))
        .map_err(|_| ParseError::shape(format!("bad delay {cell:?}")))
}

fn is_header_row(cells: &[String]) -> bool {
    cells[0].eq_ignore_ascii_case("kolodvor")
}

/// Parse `HH:MM`, ignoring surrounding punctuation.
fn parse_hhmm(word: &str) -> Option<NaiveTime> {
    let word = word.trim_matches(|c: char| !c.is_ascii_digit() && c != ':');
    NaiveTime::parse_from_str(word, "%H:%M").ok()
}

/// Only cell text counts: titles, scripts and footers are ignored.
fn cells_say_not_found(cells: &[String]) -> bool {
    cells.iter().any(|cell| {
        let cell = cell.to_lowercase();
        NOT_FOUND_MARKERS.iter().any(|m| cell.contains(m))
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
