//! Delivery-estimate text normalizer.
//!
//! Amazon search cards describe arrival windows as loose prose:
//! "Today 5 AM - 10 AM", "Tomorrow", "FREE delivery Wed, Jan 15". This module
//! turns one such fragment into a [`DeliveryEstimate`] relative to a
//! caller-supplied clock, or `None` when no date can be recovered.

use crate::amazon::models::DeliveryEstimate;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use regex_lite::Regex;
use std::sync::LazyLock;

/// Time window like "5 AM - 10 AM". Hour-only, 12-hour clock.
static TIME_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}) ([AP]M) - (\d{1,2}) ([AP]M)").unwrap());

/// Explicit date like "Wed, Jan 15".
static WEEKDAY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]{3}), ([A-Za-z]{3}) (\d{1,2})").unwrap());

/// Normalizes a delivery-text fragment into a concrete estimate.
///
/// Checked in priority order, first match wins:
/// 1. "Today" -> `now`'s date, plus the time window if one is present.
/// 2. "Tomorrow" -> `now`'s date + 1 day, no window.
/// 3. The *last* "Wed, Jan 15"-style date in the text, combined with the
///    current year. A date that already passed is rolled forward one year.
///
/// The literal phrases must be checked before the weekday pattern: a fragment
/// can contain both ("Today" next to a fallback date), and the relative
/// phrase is the binding one.
pub fn normalize(text: &str, now: NaiveDateTime) -> Option<DeliveryEstimate> {
    if text.contains("Today") {
        return Some(estimate_for(now.date(), text));
    }

    if text.contains("Tomorrow") {
        return Some(DeliveryEstimate::date_only(now.date().succ_opt()?));
    }

    // Multiple dates can appear in one fragment ("Tue, Jan 14 ... or fastest
    // Wed, Jan 15"); the last one wins.
    let caps = WEEKDAY_DATE.captures_iter(text).last()?;
    let month = month_number(&caps[2])?;
    let day: u32 = caps[3].parse().ok()?;

    // The weekday token is matched but not validated against the date.
    let mut date = NaiveDate::from_ymd_opt(now.year(), month, day)?;

    // Year wraparound: a December date scraped in late December is meant for
    // next year. Misfires on a genuinely past date, kept as-is.
    if date < now.date() {
        date = NaiveDate::from_ymd_opt(now.year() + 1, month, day)?;
    }

    Some(estimate_for(date, text))
}

fn estimate_for(date: NaiveDate, text: &str) -> DeliveryEstimate {
    match extract_window(text) {
        Some((start, end)) => DeliveryEstimate::with_window(date, start, end),
        None => DeliveryEstimate::date_only(date),
    }
}

/// Extracts a "5 AM - 10 AM" window. Both bounds or neither.
fn extract_window(text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let caps = TIME_RANGE.captures(text)?;
    let start = parse_hour(&caps[1], &caps[2])?;
    let end = parse_hour(&caps[3], &caps[4])?;
    Some((start, end))
}

/// Parses a 12-hour clock hour ("5", "PM") into a wall-clock time.
/// Hours outside 1-12 are rejected.
fn parse_hour(hour: &str, meridiem: &str) -> Option<NaiveTime> {
    let hour: u32 = hour.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let mut hour = hour % 12;
    if meridiem.eq_ignore_ascii_case("PM") {
        hour += 12;
    }

    NaiveTime::from_hms_opt(hour, 0, 0)
}

fn month_number(name: &str) -> Option<u32> {
    match name.to_ascii_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
