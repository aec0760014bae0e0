//! Tests for the climate report grammar

use super::*;
use crate::Error;
use crate::app::models::StationId;
use crate::app::services::station_registry::{StationProfile, StationRegistry};
use chrono::{NaiveDate, TimeZone};
use chrono_tz::America::New_York;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_same_day_report() {
    let text = ReportFixture::default().render();
    let report = create_test_parser().parse(&text).unwrap();

    assert_eq!(report.station, StationId::Nyc);
    assert_eq!(report.issuing_office, "OKX");
    assert_eq!(
        report.issuance_time,
        New_York.with_ymd_and_hms(2025, 1, 16, 13, 30, 0).unwrap()
    );
    assert_eq!(
        report.summary_date,
        NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
    );

    assert_eq!(report.max_temp, Some(52));
    assert_eq!(report.min_temp, Some(38));
    assert_eq!(report.avg_temp, Some(45));
    assert_eq!(
        report.max_temp_time,
        Some(New_York.with_ymd_and_hms(2025, 1, 16, 13, 45, 0).unwrap())
    );
    assert_eq!(
        report.min_temp_time,
        Some(New_York.with_ymd_and_hms(2025, 1, 16, 6, 10, 0).unwrap())
    );

    assert!(report.is_afternoon_report);
    assert!(!report.is_correction);
    assert_eq!(report.report_day_delta(), 0);
    assert_eq!(report.raw_text, text);
}

#[test]
fn test_parse_yesterday_report() {
    let report = create_test_parser()
        .parse(&ReportFixture::yesterday().render())
        .unwrap();

    assert_eq!(report.report_day_delta(), 1);
    assert!(report.valid_time.is_none());
    assert!(!report.is_afternoon_report);
    // Temperature times are anchored to the summary date, not the issuance date
    assert_eq!(
        report.max_temp_time,
        Some(New_York.with_ymd_and_hms(2025, 1, 16, 13, 45, 0).unwrap())
    );
}

#[test]
fn test_missing_sentinel_values() {
    let fixture = ReportFixture {
        maximum_line: "  MAXIMUM         MM      MM     68    1932  40     MM       41".to_string(),
        ..ReportFixture::default()
    };
    let report = create_test_parser().parse(&fixture.render()).unwrap();

    assert_eq!(report.max_temp, None);
    assert_eq!(report.max_temp_time, None);
    assert_eq!(report.min_temp, Some(38));
    assert_eq!(report.avg_temp, Some(45));
    assert_eq!(report.station, StationId::Nyc);
}

#[test]
fn test_missing_minimum_and_average() {
    let fixture = ReportFixture {
        minimum_line: "  MINIMUM         MM      MM      2    1893  27     MM       30".to_string(),
        average_line: "  AVERAGE         MM                       34     MM       36".to_string(),
        ..ReportFixture::default()
    };
    let report = create_test_parser().parse(&fixture.render()).unwrap();

    assert_eq!(report.max_temp, Some(52));
    assert_eq!(report.min_temp, None);
    assert_eq!(report.min_temp_time, None);
    assert_eq!(report.avg_temp, None);
}

#[test]
fn test_missing_value_drops_reported_time() {
    let fixture = ReportFixture {
        maximum_line: "  MAXIMUM         MM    1:45 PM  68    1932  40     MM       41".to_string(),
        ..ReportFixture::default()
    };
    let report = create_test_parser().parse(&fixture.render()).unwrap();

    assert_eq!(report.max_temp, None);
    assert_eq!(report.max_temp_time, None);
}

#[test]
fn test_record_marker_and_negative_values() {
    let fixture = ReportFixture {
        maximum_line: "  MAXIMUM         68R   245 PM  66    1932  40     28       41".to_string(),
        minimum_line: "  MINIMUM         -3    1159 PM  -2   1893  27    -30       30".to_string(),
        ..ReportFixture::default()
    };
    let report = create_test_parser().parse(&fixture.render()).unwrap();

    assert_eq!(report.max_temp, Some(68));
    assert_eq!(
        report.max_temp_time,
        Some(New_York.with_ymd_and_hms(2025, 1, 16, 14, 45, 0).unwrap())
    );
    assert_eq!(report.min_temp, Some(-3));
    assert_eq!(
        report.min_temp_time,
        Some(New_York.with_ymd_and_hms(2025, 1, 16, 23, 59, 0).unwrap())
    );
}

#[test]
fn test_day_delta_of_two_is_rejected() {
    let fixture = ReportFixture {
        issuance_line: "130 AM EST SAT JAN 18 2025".to_string(),
        valid_line: None,
        day_label: "YESTERDAY".to_string(),
        ..ReportFixture::default()
    };
    let err = create_test_parser().parse(&fixture.render()).unwrap_err();
    assert!(matches!(err, Error::InconsistentReportDay { delta_days: 2, .. }));
}

#[test]
fn test_mismatched_day_label_is_rejected() {
    let fixture = ReportFixture {
        day_label: "TODAY".to_string(),
        ..ReportFixture::yesterday()
    };
    let err = create_test_parser().parse(&fixture.render()).unwrap_err();
    assert!(
        matches!(err, Error::InconsistentReportDay { ref label, delta_days: 1 } if label == "TODAY")
    );

    let fixture = ReportFixture {
        day_label: "YESTERDAY".to_string(),
        ..ReportFixture::default()
    };
    assert!(matches!(
        create_test_parser().parse(&fixture.render()),
        Err(Error::InconsistentReportDay { delta_days: 0, .. })
    ));
}

#[test]
fn test_correction_marker_anywhere_in_text() {
    let fixture = ReportFixture {
        corrected: true,
        ..ReportFixture::default()
    };
    assert!(create_test_parser().parse(&fixture.render()).unwrap().is_correction);

    let appended = format!("{}\nCORRECTED", ReportFixture::default().render());
    assert!(create_test_parser().parse(&appended).unwrap().is_correction);
}

#[test]
fn test_afternoon_flag_from_valid_line() {
    let noon = ReportFixture {
        valid_line: Some("VALID TODAY AS OF 1200 PM LOCAL TIME.".to_string()),
        ..ReportFixture::default()
    };
    let report = create_test_parser().parse(&noon.render()).unwrap();
    assert!(report.is_afternoon_report);
    assert_eq!(
        report.valid_time,
        Some(New_York.with_ymd_and_hms(2025, 1, 16, 12, 0, 0).unwrap())
    );

    let morning = ReportFixture {
        valid_line: Some("VALID TODAY AS OF 0900 AM LOCAL TIME.".to_string()),
        ..ReportFixture::default()
    };
    assert!(!create_test_parser().parse(&morning.render()).unwrap().is_afternoon_report);

    let absent = ReportFixture {
        valid_line: None,
        ..ReportFixture::default()
    };
    let report = create_test_parser().parse(&absent.render()).unwrap();
    assert!(!report.is_afternoon_report);
    assert!(report.valid_time.is_none());
}

#[test]
fn test_malformed_valid_line() {
    let fixture = ReportFixture {
        valid_line: Some("VALID TODAY AS OF NOON".to_string()),
        ..ReportFixture::default()
    };
    let err = create_test_parser().parse(&fixture.render()).unwrap_err();
    assert!(matches!(err, Error::MalformedStructure { .. }));
}

#[test]
fn test_unknown_station_rejected() {
    let fixture = ReportFixture {
        product_line: "CLIXYZ".to_string(),
        ..ReportFixture::default()
    };
    let err = create_test_parser().parse(&fixture.render()).unwrap_err();
    assert!(matches!(err, Error::UnknownStation { ref code } if code == "XYZ"));
    assert!(err.is_parse_error());
}

#[test]
fn test_station_missing_from_registry() {
    let registry = StationRegistry::from_profiles([StationProfile::new(
        StationId::Lax,
        chrono_tz::America::Los_Angeles,
        "LOX",
    )]);
    let parser = ReportParser::new(Arc::new(registry));

    let err = parser.parse(&ReportFixture::default().render()).unwrap_err();
    assert!(matches!(err, Error::StationNotConfigured { .. }));
    assert!(!err.is_parse_error());
}

#[test]
fn test_missing_anchors() {
    let parser = create_test_parser();

    let err = parser.parse("").unwrap_err();
    assert!(matches!(err, Error::AnchorNotFound { field: "site" }));

    let no_station = ReportFixture {
        product_line: "CLIMATE".to_string(),
        ..ReportFixture::default()
    };
    assert!(matches!(
        parser.parse(&no_station.render()),
        Err(Error::AnchorNotFound { field: "station" })
    ));

    let no_summary = ReportFixture {
        summary_line: "...THE CENTRAL PARK NY DAILY NOTES...".to_string(),
        ..ReportFixture::default()
    };
    assert!(matches!(
        parser.parse(&no_summary.render()),
        Err(Error::AnchorNotFound {
            field: "summary date"
        })
    ));
}

#[test]
fn test_header_block_is_strict() {
    let text = ReportFixture::default()
        .render()
        .replace("CLIMATE REPORT", "CLIMATE BULLETIN");
    let err = create_test_parser().parse(&text).unwrap_err();
    assert!(
        matches!(err, Error::MalformedStructure { ref actual, .. } if actual == "CLIMATE BULLETIN")
    );

    let fixture = ReportFixture {
        issuance_line: "ISSUED THIS AFTERNOON".to_string(),
        ..ReportFixture::default()
    };
    assert!(matches!(
        create_test_parser().parse(&fixture.render()),
        Err(Error::MalformedStructure { .. })
    ));
}

#[test]
fn test_maximum_must_follow_day_label() {
    let text = ReportFixture::default().render().replace(
        "TODAY\n  MAXIMUM",
        "TODAY\n  (RECORDS INCOMPLETE)\n  MAXIMUM",
    );
    let err = create_test_parser().parse(&text).unwrap_err();
    assert!(matches!(err, Error::MalformedStructure { .. }));
}

#[test]
fn test_minimum_search_stops_at_next_day_label() {
    let fixture = ReportFixture {
        minimum_line: "  (MINIMUM NOT AVAILABLE)".to_string(),
        average_line: "YESTERDAY".to_string(),
        ..ReportFixture::default()
    };
    let text = format!(
        "{}\n  MINIMUM         30    6:10 AM",
        fixture.render()
    );
    let err = create_test_parser().parse(&text).unwrap_err();
    assert!(matches!(
        err,
        Error::AnchorNotFound {
            field: "minimum temperature"
        }
    ));
}

#[test]
fn test_average_search_stops_at_precipitation_table() {
    let fixture = ReportFixture {
        average_line: String::new(),
        ..ReportFixture::default()
    };
    let text = fixture.render().replace(
        "\n$$",
        "\nRELATIVE HUMIDITY (PERCENT)\n HIGHEST    86\n LOWEST     45\n AVERAGE    66\n\n$$",
    );

    let err = create_test_parser().parse(&text).unwrap_err();
    assert!(matches!(
        err,
        Error::AnchorNotFound {
            field: "average temperature"
        }
    ));
}

#[test]
fn test_invalid_calendar_values() {
    let fixture = ReportFixture {
        summary_line: "...THE CENTRAL PARK NY CLIMATE SUMMARY FOR FEBRUARY 30 2025...".to_string(),
        ..ReportFixture::default()
    };
    let err = create_test_parser().parse(&fixture.render()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidField {
            field: "summary date",
            ..
        }
    ));
}

#[test]
fn test_parse_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", ReportFixture::default().render()).unwrap();

    let report = create_test_parser().parse_file(file.path()).unwrap();
    assert_eq!(report.max_temp, Some(52));

    let err = create_test_parser()
        .parse_file(std::path::Path::new("/nonexistent/report.txt"))
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
