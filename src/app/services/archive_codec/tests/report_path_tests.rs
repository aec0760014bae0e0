//! Tests for the climate report path codec

use super::*;
use crate::Error;
use crate::app::models::{ArchiveKey, PartialArchiveKey, StationId};
use crate::app::services::station_registry::{StationProfile, StationRegistry};
use chrono::{Duration, TimeZone};
use chrono_tz::America::{Chicago, Los_Angeles, New_York};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn nyc_key() -> ArchiveKey {
    ArchiveKey {
        station: StationId::Nyc,
        issuance_time: local(New_York, 2025, 1, 16, 13, 30, 0),
        summary_date: date(2025, 1, 16),
    }
}

#[test]
fn test_encode_complete_key() {
    let path = create_report_codec().encode(&nyc_key().into()).unwrap();
    assert_eq!(
        path,
        PathBuf::from("/archive/cli/NYC/cli.NYC.issued-2025-01-16T13-30-00.summary-2025-01-16.txt")
    );
    assert_eq!(create_report_codec().path_for(&nyc_key()).unwrap(), path);
}

#[test]
fn test_encode_wildcards() {
    let codec = create_report_codec();

    assert_eq!(
        codec.encode(&PartialArchiveKey::any()).unwrap(),
        PathBuf::from("/archive/cli/*/cli.*.issued-*.summary-*.txt")
    );
    assert_eq!(
        codec
            .encode(&PartialArchiveKey::for_station(StationId::Mdw))
            .unwrap(),
        PathBuf::from("/archive/cli/MDW/cli.MDW.issued-*.summary-*.txt")
    );
    assert_eq!(
        codec
            .encode(&PartialArchiveKey::any().with_summary_date(date(2025, 7, 4)))
            .unwrap(),
        PathBuf::from("/archive/cli/*/cli.*.issued-*.summary-2025-07-04.txt")
    );
}

#[test]
fn test_encode_issuance_without_station_keeps_time() {
    let codec = create_report_codec();
    let key =
        PartialArchiveKey::any().with_issuance_time(local(New_York, 2025, 1, 16, 13, 30, 0));

    assert_eq!(
        codec.encode(&key).unwrap(),
        PathBuf::from("/archive/cli/*/cli.*.issued-2025-01-16T13-30-00.summary-*.txt")
    );

    let too_precise = PartialArchiveKey::any()
        .with_issuance_time(local(Chicago, 2025, 1, 16, 1, 0, 0) + Duration::milliseconds(5));
    assert!(matches!(
        codec.encode(&too_precise),
        Err(Error::UnrepresentableTimestamp { .. })
    ));
}

#[test]
fn test_encode_converts_to_station_time() {
    let key = ArchiveKey {
        issuance_time: local(chrono_tz::UTC, 2025, 1, 16, 18, 30, 0),
        ..nyc_key()
    };
    let path = create_report_codec().encode(&key.into()).unwrap();
    assert!(path.ends_with("NYC/cli.NYC.issued-2025-01-16T13-30-00.summary-2025-01-16.txt"));
}

#[test]
fn test_round_trip_across_stations_and_seasons() {
    let codec = create_report_codec();
    let registry = StationRegistry::builtin();

    for station in StationId::ALL {
        let tz = registry.timezone(station).unwrap();
        let instants = [
            local(tz, 2025, 1, 16, 13, 30, 0),
            local(tz, 2025, 7, 4, 0, 0, 59),
            // First instant of daylight time and the repeated hour's standard reading
            local(tz, 2025, 3, 9, 3, 0, 0),
            tz.from_local_datetime(&date(2025, 11, 2).and_hms_opt(1, 30, 0).unwrap())
                .latest()
                .unwrap(),
        ];

        for issuance_time in instants {
            let issued_on = issuance_time.with_timezone(&tz).date_naive();
            for summary_date in [issued_on, issued_on.pred_opt().unwrap()] {
                let key = ArchiveKey {
                    station,
                    issuance_time,
                    summary_date,
                };
                let path = codec.encode(&key.into()).unwrap();
                let decoded = codec.decode(&path).unwrap();

                assert_eq!(decoded, key, "round trip failed for {}", path.display());
                assert_eq!(decoded.issuance_time.timezone(), tz);
                assert_eq!(
                    decoded.issuance_time.naive_local(),
                    issuance_time.with_timezone(&tz).naive_local()
                );
            }
        }
    }
}

#[test]
fn test_repeated_hour_daylight_reading_is_unrepresentable() {
    let daylight = New_York
        .from_local_datetime(&date(2025, 11, 2).and_hms_opt(1, 30, 0).unwrap())
        .earliest()
        .unwrap();
    let key = ArchiveKey {
        issuance_time: daylight,
        ..nyc_key()
    };

    let err = create_report_codec().encode(&key.into()).unwrap_err();
    assert!(matches!(err, Error::UnrepresentableTimestamp { ref station, .. } if station == "NYC"));
}

#[test]
fn test_sub_second_precision_is_unrepresentable() {
    let key = ArchiveKey {
        issuance_time: nyc_key().issuance_time + Duration::milliseconds(250),
        ..nyc_key()
    };
    assert!(matches!(
        create_report_codec().path_for(&key),
        Err(Error::UnrepresentableTimestamp { .. })
    ));
}

#[test]
fn test_decode_skipped_hour_moves_forward() {
    let path = Path::new("/archive/cli/MDW/cli.MDW.issued-2025-03-09T02-30-00.summary-2025-03-08.txt");
    let key = create_report_codec().decode(path).unwrap();

    assert_eq!(key.issuance_time, local(Chicago, 2025, 3, 9, 3, 30, 0));
    assert_eq!(key.summary_date, date(2025, 3, 8));
}

#[test]
fn test_decode_rejects_station_directory_mismatch() {
    let path = Path::new("/archive/cli/MDW/cli.NYC.issued-2025-01-16T13-30-00.summary-2025-01-16.txt");
    let err = create_report_codec().decode(path).unwrap_err();
    assert!(matches!(
        err,
        Error::PathStationMismatch { ref directory, ref station, .. } if directory == "MDW" && station == "NYC"
    ));

    let bare = Path::new("cli.NYC.issued-2025-01-16T13-30-00.summary-2025-01-16.txt");
    assert!(matches!(
        create_report_codec().decode(bare),
        Err(Error::PathStationMismatch { .. })
    ));
}

#[test]
fn test_decode_rejects_malformed_names() {
    let codec = create_report_codec();
    let malformed = [
        "NYC/cli.NYC.issued-2025-01-16T13-30-00.summary-2025-01-16.csv",
        "NYC/one_minute.NYC.issued-2025-01-16T13-30-00.summary-2025-01-16.txt",
        "NYC/cli.NYC.issued-2025-01-16T13-30-00.txt",
        "NYC/cli.NYC.issued-2025-01-16T13-30-00.summary-2025-01-16.extra.txt",
        "NYC/cli.NYC.issue-2025-01-16T13-30-00.summary-2025-01-16.txt",
        "NYC/cli.NYC.issued-2025-01-16 13:30:00.summary-2025-01-16.txt",
        "NYC/cli.NYC.issued-2025-01-16T13-30-00.summary-2025-13-16.txt",
        "XYZ/cli.XYZ.issued-2025-01-16T13-30-00.summary-2025-01-16.txt",
        "NYC/cli.NYC.issued-*.summary-*.txt",
    ];

    for name in malformed {
        let path = Path::new(TEST_ROOT).join(name);
        let err = codec.decode(&path).unwrap_err();
        assert!(
            matches!(err, Error::PathFormat { .. }),
            "expected PathFormat for {}, got {:?}",
            name,
            err
        );
    }
}

#[test]
fn test_decode_uses_injected_registry() {
    // Same file, read with Los Angeles time
    let registry = StationRegistry::from_profiles([StationProfile::new(
        StationId::Nyc,
        Los_Angeles,
        "OKX",
    )]);
    let codec = ReportPathCodec::new("/archive/cli", Arc::new(registry));
    let path = create_report_codec().path_for(&nyc_key()).unwrap();

    let key = codec.decode(&path).unwrap();
    assert_eq!(key.issuance_time, local(Los_Angeles, 2025, 1, 16, 13, 30, 0));
    assert_ne!(key, nyc_key());
}

#[test]
fn test_encode_escapes_root_metacharacters() {
    let codec = ReportPathCodec::new("/data/[archive]", Arc::new(StationRegistry::builtin()));
    let pattern = codec.encode(&PartialArchiveKey::any()).unwrap();
    assert_eq!(
        pattern,
        PathBuf::from("/data/[[]archive[]]/*/cli.*.issued-*.summary-*.txt")
    );
    assert!(
        codec
            .path_for(&nyc_key())
            .unwrap()
            .starts_with("/data/[archive]/NYC")
    );
}
