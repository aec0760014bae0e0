//! Compiled line patterns for the climate report grammar

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid climate report regex")
}

/// WMO heading, e.g. `CDUS41 KOKX 161800`; captures the issuing office
pub static SITE_LINE: Lazy<Regex> = Lazy::new(|| compile(r"CDUS\d+\s+K([A-Z]{3})"));

/// AWIPS product line, e.g. `CLINYC`; captures the station code
pub static STATION_LINE: Lazy<Regex> = Lazy::new(|| compile(r"\bCLI([A-Z]{3})\b"));

/// Issuance line, e.g. `130 PM EST THU JAN 16 2025`
///
/// Captures the clock digits, meridiem, month name, day and year. Zone and weekday
/// tokens in between are skipped.
pub static ISSUANCE_LINE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^\s*(\d{3,4})\s+(AM|PM)\s+(?:[A-Z]+\s+)*?((?:JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)[A-Z]*)\s+(\d{1,2}),?\s+(\d{4})\b",
    )
});

/// `...THE CENTRAL PARK NY CLIMATE SUMMARY FOR JANUARY 16 2025...`
pub static SUMMARY_DATE: Lazy<Regex> =
    Lazy::new(|| compile(r"CLIMATE\s+SUMMARY\s+FOR\s+(.+?)\.\.\."));

/// Date phrase inside the summary line, e.g. `JANUARY 16 2025`
pub static DATE_PHRASE: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*([A-Z]+)\.?\s+(\d{1,2}),?\s+(\d{4})\s*$"));

/// `VALID TODAY AS OF 0400 PM LOCAL TIME.`
pub static VALID_AS_OF: Lazy<Regex> =
    Lazy::new(|| compile(r"AS\s+OF\s+(\d{3,4})\s+(AM|PM)\s+LOCAL\s+TIME"));

/// Temperature table heading
pub static TEMPERATURE_SECTION: Lazy<Regex> = Lazy::new(|| compile(r"TEMPERATURE\s+\(F\)"));

/// A `TODAY` or `YESTERDAY` label anywhere in a line
///
/// Later tables open with rows such as `  TODAY  0.00 ...`, so these bound the search
/// for the rest of the temperature table.
pub static DAY_LABEL: Lazy<Regex> = Lazy::new(|| compile(r"\b(TODAY|YESTERDAY)\b"));

/// Maximum row: value (or `MM`) with optional record marker, then time (or `MM`)
pub static MAXIMUM: Lazy<Regex> = Lazy::new(|| {
    compile(r"MAXIMUM\s+(-?\d+|MM)R?\s+(\d{1,2}:?\d{2}\s+(?:AM|PM)|MM)")
});

/// Minimum row, same shape as the maximum row
pub static MINIMUM: Lazy<Regex> = Lazy::new(|| {
    compile(r"MINIMUM\s+(-?\d+|MM)R?\s+(\d{1,2}:?\d{2}\s+(?:AM|PM)|MM)")
});

/// Average row: value (or `MM`) with optional record marker
pub static AVERAGE: Lazy<Regex> = Lazy::new(|| compile(r"AVERAGE\s+(-?\d+|MM)R?"));

/// Clock token such as `145 PM`, `1:45 PM` or `1145 AM`
pub static CLOCK_TOKEN: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(\d{1,2}:?\d{2})\s*(AM|PM)\s*$"));
