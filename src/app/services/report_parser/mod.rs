//! Parser for NWS daily climate report (CLI) text
//!
//! A climate report is loosely formatted free text. The parser walks it once with a
//! forward-only line cursor and recovers the station, issuance time, summary date and
//! the temperature table, treating the `MM` sentinel as a missing value.
//!
//! ## Architecture
//!
//! - [`cursor`] - Line cursor with anchored-search and strict-assertion primitives
//! - [`patterns`] - Compiled line patterns for each step of the report grammar
//! - [`time_parsing`] - Normalization of report clock tokens and date phrases
//! - [`parser`] - Ordered extraction steps producing a [`ClimateReport`]
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use nws_climate::app::services::report_parser::ReportParser;
//! use nws_climate::app::services::station_registry::StationRegistry;
//!
//! # fn example(text: &str) -> nws_climate::Result<()> {
//! let parser = ReportParser::new(Arc::new(StationRegistry::builtin()));
//! let report = parser.parse(text)?;
//!
//! println!("{} max={:?} min={:?}", report.station, report.max_temp, report.min_temp);
//! # Ok(())
//! # }
//! ```
//!
//! [`ClimateReport`]: crate::app::models::ClimateReport

pub mod cursor;
pub mod parser;
pub mod patterns;
pub mod time_parsing;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use cursor::LineCursor;
pub use parser::ReportParser;
