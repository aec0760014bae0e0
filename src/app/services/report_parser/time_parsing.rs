//! Clock and date parsing for climate report text
//!
//! Reports write times without a separator and often without a leading zero
//! (`130 PM`, `1145 AM`), and sometimes with one (`1:45 PM`). Every clock token is
//! normalized to `HH:MM` before being handed to chrono.

use super::patterns::{CLOCK_TOKEN, DATE_PHRASE};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};

/// Normalize a report clock token to `HH:MM`
///
/// Accepts three or four digits with an optional colon before the last two.
/// Returns `None` for any other shape.
pub fn normalize_clock_digits(token: &str) -> Option<String> {
    let digits: String = token.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let padded = match digits.len() {
        3 => format!("0{}", digits),
        4 => digits,
        _ => return None,
    };
    Some(format!("{}:{}", &padded[..2], &padded[2..]))
}

/// Parse clock digits plus an AM/PM marker into a time of day
pub fn parse_clock(digits: &str, meridiem: &str, field: &'static str) -> Result<NaiveTime> {
    let normalized = normalize_clock_digits(digits)
        .ok_or_else(|| Error::invalid_field(field, format!("{} {}", digits, meridiem)))?;
    let text = format!("{} {}", normalized, meridiem);

    NaiveTime::parse_from_str(&text, "%I:%M %p").map_err(|_| Error::invalid_field(field, text))
}

/// Parse a full clock token such as `145 PM` or `1:45 PM`
pub fn parse_clock_token(token: &str, field: &'static str) -> Result<NaiveTime> {
    let caps = CLOCK_TOKEN
        .captures(token)
        .ok_or_else(|| Error::invalid_field(field, token))?;
    parse_clock(&caps[1], &caps[2], field)
}

/// Month number from an English month name or its abbreviation
///
/// Accepts the full name, the three-letter abbreviation and `SEPT`.
pub fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "JANUARY",
        "FEBRUARY",
        "MARCH",
        "APRIL",
        "MAY",
        "JUNE",
        "JULY",
        "AUGUST",
        "SEPTEMBER",
        "OCTOBER",
        "NOVEMBER",
        "DECEMBER",
    ];

    let upper = name.to_ascii_uppercase();
    if upper == "SEPT" {
        return Some(9);
    }
    MONTHS
        .iter()
        .position(|month| *month == upper || (upper.len() == 3 && month.starts_with(&upper)))
        .map(|index| index as u32 + 1)
}

/// Build a calendar date from month name, day and year tokens
pub fn parse_date_parts(
    month: &str,
    day: &str,
    year: &str,
    field: &'static str,
) -> Result<NaiveDate> {
    let invalid = || Error::invalid_field(field, format!("{} {} {}", month, day, year));

    let month = month_number(month).ok_or_else(invalid)?;
    let day = day.parse::<u32>().map_err(|_| invalid())?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse a summary date phrase such as `JANUARY 16 2025` or `JAN 16, 2025`
pub fn parse_date_phrase(phrase: &str, field: &'static str) -> Result<NaiveDate> {
    let caps = DATE_PHRASE
        .captures(phrase)
        .ok_or_else(|| Error::invalid_field(field, phrase))?;
    parse_date_parts(&caps[1], &caps[2], &caps[3], field)
}
