//! Dimension report writer tests

use chrono::{NaiveDate, NaiveDateTime};
use dimsniff::Dimensions;
use dimsniff::report::{ReportError, ReportTarget, report_file_name, write_report};
use rstest::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[fixture]
fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_opt(9, 5, 42)
        .unwrap()
}

#[fixture]
fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ============================================================================
// Target resolution
// ============================================================================

#[rstest]
fn test_resolve_existing_file(workdir: TempDir) {
    let path = workdir.path().join("sizes.txt");
    fs::write(&path, "").unwrap();
    assert_eq!(ReportTarget::resolve(&path).unwrap(), ReportTarget::File(path));
}

#[rstest]
fn test_resolve_existing_directory(workdir: TempDir) {
    assert_eq!(
        ReportTarget::resolve(workdir.path()).unwrap(),
        ReportTarget::Directory(workdir.path().to_path_buf())
    );
}

#[rstest]
fn test_resolve_missing_path_is_invalid(workdir: TempDir) {
    let missing = workdir.path().join("nope").join("sizes.txt");
    assert!(matches!(
        ReportTarget::resolve(&missing),
        Err(ReportError::InvalidTarget(_))
    ));
}

#[rstest]
#[case("/images/cat.png", "/images")]
#[case("cat.png", ".")]
fn test_beside_image(#[case] image: &str, #[case] expected: &str) {
    assert_eq!(
        ReportTarget::beside(Path::new(image)).unwrap(),
        ReportTarget::Directory(PathBuf::from(expected))
    );
}

#[rstest]
fn test_beside_root_has_no_parent() {
    assert!(matches!(
        ReportTarget::beside(Path::new("/")),
        Err(ReportError::MissingParent(_))
    ));
}

// ============================================================================
// File naming
// ============================================================================

#[rstest]
#[case("/images/cat.png", "cat_03072024_090542.txt")]
#[case("holiday.photo.bmp", "holiday.photo_03072024_090542.txt")]
#[case("noext", "noext_03072024_090542.txt")]
fn test_report_file_name(timestamp: NaiveDateTime, #[case] image: &str, #[case] expected: &str) {
    assert_eq!(report_file_name(Path::new(image), timestamp), expected);
}

// ============================================================================
// Writing
// ============================================================================

#[rstest]
fn test_write_appends_to_existing_file(workdir: TempDir, timestamp: NaiveDateTime) {
    let path = workdir.path().join("sizes.txt");
    fs::write(&path, "1x1\n").unwrap();
    let target = ReportTarget::resolve(&path).unwrap();

    let written = write_report(
        Dimensions::new(800, 600),
        &target,
        Path::new("a.bmp"),
        timestamp,
    )
    .unwrap();
    write_report(
        Dimensions::new(1920, 1080),
        &target,
        Path::new("b.png"),
        timestamp,
    )
    .unwrap();

    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "1x1\n800x600\n1920x1080\n");
}

#[rstest]
fn test_write_into_directory_generates_name(workdir: TempDir, timestamp: NaiveDateTime) {
    let target = ReportTarget::resolve(workdir.path()).unwrap();
    let image = Path::new("/photos/sunset.png");

    let written = write_report(Dimensions::new(-3, 0), &target, image, timestamp).unwrap();

    assert_eq!(written, workdir.path().join("sunset_03072024_090542.txt"));
    assert_eq!(fs::read_to_string(&written).unwrap(), "-3x0\n");
}

#[rstest]
fn test_write_beside_image(workdir: TempDir, timestamp: NaiveDateTime) {
    let image = workdir.path().join("scan.bmp");
    fs::write(&image, b"BM").unwrap();
    let target = ReportTarget::beside(&image).unwrap();

    let written = write_report(Dimensions::new(2, 3), &target, &image, timestamp).unwrap();

    assert_eq!(written.parent(), Some(workdir.path()));
    assert_eq!(fs::read_to_string(&written).unwrap(), "2x3\n");
}
