//! Date and time display helpers
//!
//! Relative "time ago" labels for comments, locale-aware date and time
//! rendering, and the conversions between the `datetime-local` style input
//! value (`YYYY-MM-DDTHH:MM`) and the backend representation
//! (`YYYY-MM-DD HH:MM:SS`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Format of date values typed into trip forms
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Locale used to render calendar dates and times of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "iso")]
    Iso,
}

impl DisplayLocale {
    pub const ALL: [DisplayLocale; 4] = [
        DisplayLocale::EnUs,
        DisplayLocale::EnGb,
        DisplayLocale::DeDe,
        DisplayLocale::Iso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "en-US",
            DisplayLocale::EnGb => "en-GB",
            DisplayLocale::DeDe => "de-DE",
            DisplayLocale::Iso => "iso",
        }
    }

    fn date_pattern(&self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "%-m/%-d/%Y",
            DisplayLocale::EnGb => "%d/%m/%Y",
            DisplayLocale::DeDe => "%d.%m.%Y",
            DisplayLocale::Iso => "%Y-%m-%d",
        }
    }

    fn time_pattern(&self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "%-I:%M:%S %p",
            DisplayLocale::EnGb | DisplayLocale::DeDe | DisplayLocale::Iso => "%H:%M:%S",
        }
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayLocale::ALL
            .into_iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unsupported locale: {}", s))
    }
}

/// Calendar date portion of `timestamp` in the given locale
pub fn date_to_locale<Tz>(timestamp: &DateTime<Tz>, locale: DisplayLocale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp.format(locale.date_pattern()).to_string()
}

/// Time-of-day portion of `timestamp` in the given locale
pub fn time_to_locale<Tz>(timestamp: &DateTime<Tz>, locale: DisplayLocale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp.format(locale.time_pattern()).to_string()
}

/// Coarse relative-time label for `timestamp` as seen at `now`.
///
/// Minutes are rounded from the rounded seconds and hours from the rounded
/// minutes, so e.g. 3570 seconds reads "An hour ago" rather than
/// "60 minutes ago". Older timestamps fall back to [`date_to_locale`] in the
/// timestamp's own time zone.
pub fn time_ago_at<Tz>(timestamp: &DateTime<Tz>, now: DateTime<Utc>, locale: DisplayLocale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let elapsed = now - timestamp.with_timezone(&Utc);
    let seconds = round_half_up(elapsed.num_milliseconds() as f64 / 1000.0);
    let minutes = round_half_up(seconds as f64 / 60.0);
    let hours = round_half_up(minutes as f64 / 60.0);

    if seconds < 10 {
        "Now".to_string()
    } else if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 90 {
        "A minute ago".to_string()
    } else if minutes < 60 {
        format!("{} minutes ago", minutes)
    } else if hours < 2 {
        "An hour ago".to_string()
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else {
        date_to_locale(timestamp, locale)
    }
}

/// [`time_ago_at`] against the current clock
pub fn time_ago<Tz>(timestamp: &DateTime<Tz>, locale: DisplayLocale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time_ago_at(timestamp, Utc::now(), locale)
}

/// Convert a form input value to the backend date representation.
///
/// `2024-06-01T09:30` becomes `2024-06-01 09:30:00`; an empty input stays
/// empty.
pub fn to_submission_format(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    format!("{}:00", input.replacen('T', " ", 1))
}

/// Render a timestamp as a form input value (seconds dropped), as wall-clock
/// time in the timestamp's own zone
pub fn to_input_value<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp.format(INPUT_FORMAT).to_string()
}

/// Parse a form input value; `None` when empty or malformed
pub fn parse_input_datetime(input: &str) -> Option<NaiveDateTime> {
    if input.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(input, INPUT_FORMAT).ok()
}

// Half-way values round towards positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_time_ago_thresholds() {
        let locale = DisplayLocale::EnUs;
        let at = |d: Duration| time_ago_at(&(now() - d), now(), locale);

        assert_eq!(at(Duration::seconds(5)), "Now");
        assert_eq!(at(Duration::seconds(45)), "45 seconds ago");
        assert_eq!(at(Duration::seconds(75)), "A minute ago");
        assert_eq!(at(Duration::minutes(10)), "10 minutes ago");
        assert_eq!(at(Duration::hours(1)), "An hour ago");
        assert_eq!(at(Duration::hours(2)), "2 hours ago");
        assert_eq!(at(Duration::hours(23)), "23 hours ago");
        assert_eq!(at(Duration::hours(30)), "3/14/2024");
    }

    #[test]
    fn test_time_ago_chained_rounding() {
        let locale = DisplayLocale::Iso;
        // 3570s -> 60 minutes -> 1 hour
        assert_eq!(time_ago_at(&(now() - Duration::seconds(3570)), now(), locale), "An hour ago");
        // 89.6s rounds to 90s
        assert_eq!(time_ago_at(&(now() - Duration::milliseconds(89_600)), now(), locale), "2 minutes ago");
        // 9.5s rounds up to 10s
        assert_eq!(time_ago_at(&(now() - Duration::milliseconds(9_500)), now(), locale), "10 seconds ago");
        // 5370s -> 90 minutes -> 2 hours
        assert_eq!(time_ago_at(&(now() - Duration::seconds(5370)), now(), locale), "2 hours ago");
    }

    #[test]
    fn test_time_ago_future_timestamp_is_now() {
        let posted = now() + Duration::minutes(3);
        assert_eq!(time_ago_at(&posted, now(), DisplayLocale::EnUs), "Now");
    }

    #[test]
    fn test_time_ago_is_repeatable() {
        let posted = now() - Duration::seconds(4000);
        let first = time_ago_at(&posted, now(), DisplayLocale::EnGb);
        let second = time_ago_at(&posted, now(), DisplayLocale::EnGb);
        assert_eq!(first, second);
    }

    #[test]
    fn test_locale_rendering() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 21, 5, 9).unwrap();
        assert_eq!(date_to_locale(&ts, DisplayLocale::EnUs), "6/1/2024");
        assert_eq!(date_to_locale(&ts, DisplayLocale::EnGb), "01/06/2024");
        assert_eq!(date_to_locale(&ts, DisplayLocale::DeDe), "01.06.2024");
        assert_eq!(date_to_locale(&ts, DisplayLocale::Iso), "2024-06-01");
        assert_eq!(time_to_locale(&ts, DisplayLocale::EnUs), "9:05:09 PM");
        assert_eq!(time_to_locale(&ts, DisplayLocale::DeDe), "21:05:09");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en-gb".parse::<DisplayLocale>(), Ok(DisplayLocale::EnGb));
        assert_eq!("ISO".parse::<DisplayLocale>(), Ok(DisplayLocale::Iso));
        assert!("fr-FR".parse::<DisplayLocale>().is_err());
    }

    #[test]
    fn test_submission_format() {
        assert_eq!(to_submission_format("2024-06-01T09:30"), "2024-06-01 09:30:00");
        assert_eq!(to_submission_format(""), "");
    }

    #[test]
    fn test_input_value_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let input = to_input_value(&ts);
        assert_eq!(input, "2024-06-01T09:30");
        assert_eq!(parse_input_datetime(&input), Some(ts.naive_utc()));
        assert_eq!(parse_input_datetime(""), None);
        assert_eq!(parse_input_datetime("June 1st"), None);
    }

    #[test]
    fn test_input_value_uses_wall_clock_of_zone() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 16, 30, 0).unwrap();
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
        assert_eq!(to_input_value(&ts.with_timezone(&pacific)), "2024-06-01T09:30");
    }
}
