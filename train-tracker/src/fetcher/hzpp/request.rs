//! HŽ request targets.
//!
//! Both endpoints are classic ASP pages parameterised entirely through the
//! query string. `VoyageId` is ASCII-alphanumeric by construction, so it is
//! substituted without escaping.

use chrono::NaiveDate;

use crate::domain::VoyageId;

/// Current position page ("tekuća pozicija vlaka").
const CURRENT_POSITION_BASE: &str = "http://vred.hzinfra.hr/hzinfo/Default.asp";

/// Full route overview page ("pregled kretanja vlaka").
const OVERVIEW_BASE: &str = "http://najava.hzinfra.hr/hzinfo/default.asp";

/// Build the current-position request target for a voyage.
///
/// # Example
///
/// ```
/// use train_tracker::domain::VoyageId;
/// use train_tracker::fetcher::hzpp::current_position_target;
///
/// let id = VoyageId::parse("203").unwrap();
/// assert_eq!(
///     current_position_target(&id),
///     "http://vred.hzinfra.hr/hzinfo/Default.asp?vl=203&category=hzinfo&service=tpvl&screen=2"
/// );
/// ```
pub fn current_position_target(voyage_id: &VoyageId) -> String {
    format!(
        "{}?vl={}&category=hzinfo&service=tpvl&screen=2",
        CURRENT_POSITION_BASE,
        voyage_id.as_str()
    )
}

/// Build the overview request target for a voyage on a service date.
///
/// The date is sent as a fixed-width `yyMMdd` token.
pub fn overview_target(voyage_id: &VoyageId, date: NaiveDate) -> String {
    format!(
        "{}?vl={}&d1={}&category=korisnici&service=pkvl&screen=2",
        OVERVIEW_BASE,
        voyage_id.as_str(),
        date_token(date)
    )
}

fn date_token(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> VoyageId {
        VoyageId::parse(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn current_position_url() {
        assert_eq!(
            current_position_target(&id("203")),
            "http://vred.hzinfra.hr/hzinfo/Default.asp?vl=203&category=hzinfo&service=tpvl&screen=2"
        );
    }

    #[test]
    fn overview_url() {
        assert_eq!(
            overview_target(&id("203"), date(2024, 3, 5)),
            "http://najava.hzinfra.hr/hzinfo/default.asp?vl=203&d1=240305&category=korisnici&service=pkvl&screen=2"
        );
    }

    #[test]
    fn date_token_is_zero_padded() {
        assert_eq!(date_token(date(2009, 1, 2)), "090102");
        assert_eq!(date_token(date(2024, 12, 31)), "241231");
    }

    #[test]
    fn date_token_wraps_century() {
        assert_eq!(date_token(date(2100, 6, 7)), "000607");
    }
}
