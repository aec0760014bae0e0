//! Test utilities and report fixtures for climate report parser testing
//!
//! Fixtures are assembled from the lines of a real Central Park report so individual
//! tests can swap out one line at a time.

use std::sync::Arc;

use crate::app::services::report_parser::ReportParser;
use crate::app::services::station_registry::StationRegistry;

mod parser_tests;

/// Builder for climate report text
#[derive(Debug, Clone)]
pub struct ReportFixture {
    pub site_line: String,
    pub product_line: String,
    pub issuance_line: String,
    pub summary_line: String,
    pub valid_line: Option<String>,
    pub day_label: String,
    pub maximum_line: String,
    pub minimum_line: String,
    pub average_line: String,
    pub corrected: bool,
}

impl Default for ReportFixture {
    fn default() -> Self {
        Self {
            site_line: "CDUS41 KOKX 161830".to_string(),
            product_line: "CLINYC".to_string(),
            issuance_line: "130 PM EST THU JAN 16 2025".to_string(),
            summary_line: "...THE CENTRAL PARK NY CLIMATE SUMMARY FOR JANUARY 16 2025..."
                .to_string(),
            valid_line: Some("VALID TODAY AS OF 0100 PM LOCAL TIME.".to_string()),
            day_label: "TODAY".to_string(),
            maximum_line: "  MAXIMUM         52    1:45 PM  68    1932  40     12       41"
                .to_string(),
            minimum_line: "  MINIMUM         38    6:10 AM   2    1893  27     11       30"
                .to_string(),
            average_line: "  AVERAGE         45                       34     11       36"
                .to_string(),
            corrected: false,
        }
    }
}

impl ReportFixture {
    /// Report issued the morning after its summary date
    pub fn yesterday() -> Self {
        Self {
            issuance_line: "130 AM EST FRI JAN 17 2025".to_string(),
            valid_line: None,
            day_label: "YESTERDAY".to_string(),
            ..Self::default()
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "000".to_string(),
            self.site_line.clone(),
            self.product_line.clone(),
            String::new(),
            "CLIMATE REPORT".to_string(),
            "NATIONAL WEATHER SERVICE NEW YORK, NY".to_string(),
            self.issuance_line.clone(),
            "...................................".to_string(),
            String::new(),
            self.summary_line.clone(),
        ];
        if let Some(valid) = &self.valid_line {
            lines.push(valid.clone());
        }
        if self.corrected {
            lines.push("...CORRECTED FOR MINIMUM TEMPERATURE...".to_string());
        }
        lines.extend([
            "CLIMATE NORMAL PERIOD 1991 TO 2020".to_string(),
            "CLIMATE RECORD PERIOD 1869 TO 2025".to_string(),
            String::new(),
            "WEATHER ITEM   OBSERVED TIME   RECORD YEAR NORMAL DEPARTURE LAST".to_string(),
            "                VALUE   (LST)  VALUE       VALUE  FROM      YEAR".to_string(),
            "                                                  NORMAL".to_string(),
            "...................................................................".to_string(),
            "TEMPERATURE (F)".to_string(),
            self.day_label.clone(),
            self.maximum_line.clone(),
            self.minimum_line.clone(),
            self.average_line.clone(),
            String::new(),
            "PRECIPITATION (IN)".to_string(),
            "  TODAY           0.00          1.31 1978   0.11  -0.11     0.02".to_string(),
            String::new(),
            "$$".to_string(),
        ]);
        lines.join("\n")
    }
}

/// Parser over the built-in station registry
pub fn create_test_parser() -> ReportParser {
    ReportParser::new(Arc::new(StationRegistry::builtin()))
}
