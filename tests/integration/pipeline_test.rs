//! End-to-end tests for the extraction pipeline (library API)

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use coscup_extract::files::filename;
use coscup_extract::{pipeline, Clock, ExtractError, FixedClock, SkipCounts, COLUMNS};

use crate::helpers::{read_csv, temp_fixture, temp_input};

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 8, 3)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
    )
}

// ============================================================================
// Successful Runs
// ============================================================================

#[test]
fn fixture_extracts_qualifying_sessions_in_order() {
    let (temp_dir, input) = temp_fixture("coscup_detail.json");
    let output = temp_dir.path().join("out.csv");

    let extraction = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap();

    assert_eq!(extraction.output_path, output);
    assert_eq!(extraction.total_sessions, 5);
    assert_eq!(extraction.rows.len(), 2);
    assert_eq!(
        extraction.skipped,
        SkipCounts {
            not_an_object: 0,
            uri_only: 1,
            no_content: 1,
            faults: 1,
        }
    );

    let (header, records) = read_csv(&output);
    assert_eq!(header, COLUMNS);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0][0], "ABC123");
    assert_eq!(records[1][0], "DEF456");
}

#[test]
fn fixture_csv_content() {
    let (temp_dir, input) = temp_fixture("coscup_detail.json");
    let output = temp_dir.path().join("out.csv");

    pipeline::run(&input, Some(output.as_path()), &clock()).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r###"
    session_id,uri,title,description,language,speakers,start_time,end_time,room,type,tags
    ABC123,https://coscup.org/2024/zh-TW/session/ABC123,開源 社群 經營,第一行 第二行,漢語,"SPK1, SPK2",2024-08-03T10:10:00+08:00,2024-08-03T10:40:00+08:00,TR211,talk,beginner
    DEF456,https://coscup.org/2024/en/session/DEF456,"Rust in ""production""","Lessons, learned",English,SPK3,2024-08-03T13:00:00+08:00,2024-08-03T13:30:00+08:00,RB105,talk,
    "###);
}

#[test]
fn single_zh_session_row() {
    let (temp_dir, input) = temp_input(
        r#"{"sessions":[{"id":"S1","zh":{"title":"標題","description":"描述"},"speakers":["A","B"],"tags":["t1"]}]}"#,
    );
    let output = temp_dir.path().join("out.csv");

    let extraction = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap();

    assert_eq!(extraction.rows.len(), 1);
    let row = &extraction.rows[0];
    assert_eq!(row.session_id, "S1");
    assert_eq!(row.title, "標題");
    assert_eq!(row.description, "描述");
    assert_eq!(row.speakers, "A, B");
    assert_eq!(row.tags, "t1");

    let (_, records) = read_csv(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0][5], "A, B");
}

#[test]
fn zh_title_always_beats_en_title() {
    let (temp_dir, input) = temp_input(
        r#"{"sessions":[
            {"id":"1","zh":{"title":"中文一"},"en":{"title":"English one"}},
            {"id":"2","en":{"title":"English two"},"zh":{"title":"中文二","description":"d"}}
        ]}"#,
    );
    let output = temp_dir.path().join("out.csv");

    let extraction = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap();

    let titles: Vec<_> = extraction.rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["中文一", "中文二"]);
}

#[test]
fn blank_non_string_description_keeps_titled_session() {
    let (temp_dir, input) = temp_input(
        r#"{"sessions":[
            {"id":"S1","zh":{"title":"講題","description":false}},
            {"id":"S2","en":{"title":"Talk","description":{}}},
            {"id":"S3","zh":{"title":"壞","description":1}}
        ]}"#,
    );
    let output = temp_dir.path().join("out.csv");

    let extraction = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap();

    let ids: Vec<_> = extraction.rows.iter().map(|r| r.session_id.as_str()).collect();
    assert_eq!(ids, ["S1", "S2"]);
    assert_eq!(extraction.rows[0].description, "");
    assert_eq!(extraction.skipped.faults, 1);
}

#[test]
fn writes_to_clock_derived_name_under_chosen_dir() {
    let (temp_dir, input) = temp_fixture("coscup_detail.json");
    let name = filename::timestamped(clock().now());
    assert_eq!(name, "coscup_sessions_20240803_093000.csv");

    let output = temp_dir.path().join(&name);
    let extraction = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap();

    assert!(extraction.output_path.ends_with(Path::new(&name)));
    let (_, records) = read_csv(&output);
    assert_eq!(records.len(), 2);
}

#[test]
fn rerun_overwrites_output() {
    let (temp_dir, input) = temp_fixture("coscup_detail.json");
    let output = temp_dir.path().join("out.csv");
    fs::write(&output, "stale content that is much longer than nothing\n".repeat(50)).unwrap();

    pipeline::run(&input, Some(output.as_path()), &clock()).unwrap();

    let (_, records) = read_csv(&output);
    assert_eq!(records.len(), 2);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_input_is_not_found_and_writes_nothing() {
    let (temp_dir, _) = temp_input("{}");
    let input = temp_dir.path().join("does_not_exist.json");
    let output = temp_dir.path().join("out.csv");

    let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::NotFound { .. }), "got {:?}", err);
    assert!(err.to_string().contains("does_not_exist.json"));
    assert!(!output.exists());
}

#[test]
fn malformed_json_is_reported() {
    let (temp_dir, input) = temp_fixture("truncated.json");
    let output = temp_dir.path().join("out.csv");

    let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::MalformedInput { .. }), "got {:?}", err);
    assert!(!output.exists());
}

#[test]
fn invalid_utf8_is_malformed_input() {
    let (temp_dir, input) = temp_input("");
    fs::write(&input, b"{\"sessions\": [\"\xff\xfe\"]}").unwrap();
    let output = temp_dir.path().join("out.csv");

    let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::MalformedInput { .. }), "got {:?}", err);
}

#[test]
fn missing_sessions_is_schema_mismatch() {
    let (temp_dir, input) = temp_fixture("no_sessions.json");
    let output = temp_dir.path().join("out.csv");

    let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::SchemaMismatch { .. }), "got {:?}", err);
    assert!(err.is_soft());
    assert!(!output.exists());
}

#[test]
fn sessions_not_an_array_is_schema_mismatch() {
    for json in [r#"{"sessions": {"a": 1}}"#, r#"[{"sessions": []}]"#, "42"] {
        let (temp_dir, input) = temp_input(json);
        let output = temp_dir.path().join("out.csv");

        let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

        assert!(
            matches!(err, ExtractError::SchemaMismatch { .. }),
            "{} gave {:?}",
            json,
            err
        );
    }
}

#[test]
fn uri_only_session_is_no_data() {
    let (temp_dir, input) = temp_fixture("uri_only.json");
    let output = temp_dir.path().join("out.csv");

    let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::NoData { total: 1 }), "got {:?}", err);
    assert!(err.is_soft());
    assert!(!output.exists());
}

#[test]
fn empty_sessions_is_no_data() {
    let (temp_dir, input) = temp_input(r#"{"sessions": []}"#);
    let output = temp_dir.path().join("out.csv");

    let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::NoData { total: 0 }), "got {:?}", err);
}

#[test]
fn only_faulty_records_is_no_data() {
    let (temp_dir, input) = temp_input(
        r#"{"sessions": [
            {"tags": [null], "zh": {"title": "t"}},
            {"zh": {"title": 12}},
            "not a record"
        ]}"#,
    );
    let output = temp_dir.path().join("out.csv");

    let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::NoData { total: 3 }), "got {:?}", err);
}

#[test]
fn directory_as_input_is_read_error() {
    let (temp_dir, _) = temp_input("{}");
    let output = temp_dir.path().join("out.csv");

    let err = pipeline::run(temp_dir.path(), Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::Read { .. }), "got {:?}", err);
}

#[test]
fn unwritable_output_is_write_error() {
    let (temp_dir, input) = temp_fixture("coscup_detail.json");
    let output = temp_dir.path().join("missing_dir").join("out.csv");

    let err = pipeline::run(&input, Some(output.as_path()), &clock()).unwrap_err();

    assert!(matches!(err, ExtractError::Write { .. }), "got {:?}", err);
    assert!(err.to_string().contains("out.csv"));
}
