//! Tests for CatalogService: ingestion, validation and detail lookup

mod common;

use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use common::{disk_service, memory_service, MemoryFileSystem, BROKEN, SAMPLE};
use course_planner::application::ApplicationError;
use course_planner::config::Settings;
use course_planner::domain::{DomainError, Traversal};
use course_planner::util::testing::init_test_setup;

// ============================================================
// Loading
// ============================================================

#[test]
fn given_sample_file_when_loading_then_all_courses_are_listed_in_order() {
    init_test_setup();
    let mut service = disk_service();

    let report = service.load(Path::new(SAMPLE)).unwrap();

    assert_eq!(report.added, 8);
    assert_eq!(report.replaced, 0);
    assert!(report.rejected.is_empty());
    assert!(report.dangling.is_empty());
    let listing: Vec<String> = service.listing(Traversal::In).map(|c| c.id.to_string()).collect();
    assert_eq!(
        listing,
        ["CSCI100", "CSCI101", "CSCI200", "CSCI300", "CSCI301", "CSCI350", "CSCI400", "MATH201"]
    );
}

#[test]
fn given_broken_file_when_loading_then_skips_bad_lines_and_reports_them() {
    init_test_setup();
    let mut service = disk_service();

    let report = service.load(Path::new(BROKEN)).unwrap();

    assert_eq!(
        report.rejected,
        vec![
            DomainError::MissingColumns { line: 3, found: 1 },
            DomainError::EmptyCourseId { line: 5 },
        ]
    );
    // CSCI100 appears twice: the second line overwrites the first
    assert_eq!(report.added, 2);
    assert_eq!(report.replaced, 1);
    assert_eq!(service.catalog().len(), 2);
    assert_eq!(
        service.catalog().search("CSCI100").unwrap().title,
        "Intro to CS (revised)"
    );
    assert_eq!(report.dangling.len(), 1);
    assert_eq!(report.dangling[0].prerequisite.as_str(), "MATH999");
}

#[test]
fn given_missing_file_when_loading_then_reports_unavailable_and_keeps_catalog() {
    init_test_setup();
    let mut service = disk_service();
    service.load(Path::new(SAMPLE)).unwrap();

    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.csv");
    let result = service.load(&missing);

    assert!(matches!(
        result,
        Err(ApplicationError::SourceUnavailable { ref path, .. }) if path == &missing
    ));
    assert_eq!(service.catalog().len(), 8);
    assert!(service.is_loaded());
}

#[test]
fn given_missing_file_in_fresh_session_when_loading_then_not_marked_loaded() {
    let mut service = memory_service(MemoryFileSystem::default(), Settings::default());

    assert!(service.load(Path::new("courses.csv")).is_err());
    assert!(!service.is_loaded());
    assert!(service.catalog().is_empty());
}

#[test]
fn given_single_column_line_when_loading_then_size_is_unchanged() {
    let fs = MemoryFileSystem::default().with_file("one.csv", "CSCI100\n");
    let mut service = memory_service(fs, Settings::default());

    let report = service.load(Path::new("one.csv")).unwrap();

    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.added, 0);
    assert_eq!(service.catalog().len(), 0);
}

#[test]
fn given_validation_disabled_when_loading_then_dangling_is_empty() {
    let fs = MemoryFileSystem::default().with_file("c.csv", "CSCI200,Data Structures,CSCI100\n");
    let settings = Settings {
        validate_on_load: false,
        ..Settings::default()
    };
    let mut service = memory_service(fs, settings);

    let report = service.load(Path::new("c.csv")).unwrap();

    assert!(report.dangling.is_empty());
    assert_eq!(service.validate().len(), 1);
}

#[test]
fn given_semicolon_delimiter_when_loading_then_splits_on_it() {
    let fs = MemoryFileSystem::default().with_file("c.csv", "CSCI100;Intro\nCSCI200;DS;CSCI100\n");
    let settings = Settings {
        delimiter: ';',
        ..Settings::default()
    };
    let mut service = memory_service(fs, settings);

    let report = service.load(Path::new("c.csv")).unwrap();

    assert_eq!(report.added, 2);
    assert!(report.dangling.is_empty());
}

// ============================================================
// Course Details
// ============================================================

#[rstest]
#[case("csci300", "CSCI300, Introduction to Algorithms\nPrerequisites: CSCI200, MATH201")]
#[case("  CSCI100 ", "CSCI100, Introduction to Computer Science\nPrerequisites: None")]
fn given_sample_when_showing_course_then_renders_detail(#[case] input: &str, #[case] expected: &str) {
    let mut service = disk_service();
    service.load(Path::new(SAMPLE)).unwrap();

    let detail = service.course_detail(input).expect("course exists");

    assert_eq!(detail.to_string(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("CSCI999")]
fn given_unknown_or_empty_input_when_showing_course_then_none(#[case] input: &str) {
    let mut service = disk_service();
    service.load(Path::new(SAMPLE)).unwrap();

    assert!(service.course_detail(input).is_none());
}

#[test]
fn given_dangling_prerequisite_when_showing_course_then_marks_not_found() {
    let mut service = disk_service();
    service.load(Path::new(BROKEN)).unwrap();

    let detail = service.course_detail("CSCI200").unwrap();

    assert_eq!(
        detail.to_string(),
        "CSCI200, Data Structures\nPrerequisites: CSCI100, MATH999 (not found)"
    );
    assert!(detail.prerequisites[0].resolved);
    assert!(!detail.prerequisites[1].resolved);
}

// ============================================================
// Removal
// ============================================================

#[test]
fn given_removed_prerequisite_when_validating_then_dependents_dangle() {
    let mut service = disk_service();
    service.load(Path::new(SAMPLE)).unwrap();

    let removed = service.remove("csci101").unwrap();
    let dangling = service.validate();

    assert_eq!(removed.title, "Introduction to Programming in C++");
    let dependents: Vec<String> = dangling.iter().map(|d| d.course.to_string()).collect();
    assert_eq!(dependents, ["CSCI200", "CSCI301"]);
    assert!(service.remove("CSCI101").is_none());
    assert_eq!(service.catalog().len(), 7);
}
