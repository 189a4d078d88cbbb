//! Display helpers for counts, hosts and dates

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use community_types::Community;

const SI_UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// Compact count with at most three significant digits: `1234` -> `1.23K`.
pub fn num_to_si(value: i64) -> String {
    let abs = value.unsigned_abs() as f64;
    if abs < SI_UNITS[0].0 {
        return value.to_string();
    }
    let sign = if value < 0 { "-" } else { "" };

    let mut unit = SI_UNITS
        .iter()
        .rposition(|(div, _)| abs >= *div)
        .unwrap_or(0);
    let mut digits = three_significant(abs / SI_UNITS[unit].0);

    // 999_999 rounds up to "1000K"; carry into the next unit.
    if digits == "1000" && unit + 1 < SI_UNITS.len() {
        unit += 1;
        digits = three_significant(abs / SI_UNITS[unit].0);
    }

    format!("{sign}{digits}{}", SI_UNITS[unit].1)
}

fn three_significant(scaled: f64) -> String {
    let int_digits = if scaled >= 100.0 {
        3
    } else if scaled >= 10.0 {
        2
    } else {
        1
    };
    let formatted = format!("{:.*}", 3 - int_digits, scaled);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Host part of an ActivityPub id, without port. Empty when unparsable.
pub fn hostname(actor_id: &str) -> String {
    url::Url::parse(actor_id)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// `!name@host`, the handle users type to find a community from any instance.
pub fn community_apub_name(community: &Community) -> String {
    format!("!{}@{}", community.name, hostname(&community.actor_id))
}

/// Unix seconds for a date typed into a form. Accepts RFC 3339, the
/// `datetime-local` input format, or a bare `YYYY-MM-DD` (midnight UTC).
pub fn get_unix_time(text: Option<&str>) -> Option<i64> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M") {
        return Some(dt.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::community;

    #[test]
    fn small_numbers_are_unchanged() {
        assert_eq!(num_to_si(0), "0");
        assert_eq!(num_to_si(7), "7");
        assert_eq!(num_to_si(999), "999");
        assert_eq!(num_to_si(-12), "-12");
    }

    #[test]
    fn large_numbers_are_compacted() {
        assert_eq!(num_to_si(1_000), "1K");
        assert_eq!(num_to_si(1_234), "1.23K");
        assert_eq!(num_to_si(12_345), "12.3K");
        assert_eq!(num_to_si(123_456), "123K");
        assert_eq!(num_to_si(1_500_000), "1.5M");
        assert_eq!(num_to_si(2_000_000_000), "2B");
        assert_eq!(num_to_si(-2_500), "-2.5K");
    }

    #[test]
    fn rounding_carries_into_next_unit() {
        assert_eq!(num_to_si(9_999), "10K");
        assert_eq!(num_to_si(99_999), "100K");
        assert_eq!(num_to_si(999_999), "1M");
    }

    #[test]
    fn hostname_strips_scheme_path_and_port() {
        assert_eq!(hostname("https://lemmy.ml/c/rust"), "lemmy.ml");
        assert_eq!(hostname("http://localhost:8536/c/main"), "localhost");
        assert_eq!(hostname("not a url"), "");
    }

    #[test]
    fn apub_name_includes_instance() {
        assert_eq!(community_apub_name(&community()), "!rust@lemmy.ml");
    }

    #[test]
    fn unix_time_from_form_inputs() {
        assert_eq!(get_unix_time(None), None);
        assert_eq!(get_unix_time(Some("  ")), None);
        assert_eq!(get_unix_time(Some("tomorrow")), None);
        assert_eq!(get_unix_time(Some("1970-01-02")), Some(86_400));
        assert_eq!(get_unix_time(Some("1970-01-01T01:00")), Some(3_600));
        assert_eq!(
            get_unix_time(Some("2030-01-01T00:00:00+01:00")),
            Some(1_893_452_400)
        );
    }
}
