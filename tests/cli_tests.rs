//! End-to-end tests for the `sciutil` command-line interface.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sciutil() -> Command {
    Command::cargo_bin("sciutil").expect("binary should be built")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_locate_single_value() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.txt", "5\n3\n3\n8\n");

    sciutil()
        .arg("locate")
        .arg(&reference)
        .arg("3")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_locate_many_values_with_negative() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.txt", "value\n-10\n0\n10\n");

    sciutil()
        .args(["locate", reference.to_str().unwrap(), "-7", "4", "100"])
        .assert()
        .success()
        .stdout("0\n1\n2\n");
}

#[test]
fn test_locate_timestamps_from_csv_column() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(
        &dir,
        "swea.csv",
        "density,time\n1.0,2019-04-07T00:00:00Z\n2.0,2019-04-07T00:01:00Z\n3.0,2019-04-07T00:02:00Z\n",
    );

    sciutil()
        .arg("locate")
        .arg(&reference)
        .args(["--column", "2", "2019-04-07T00:00:50Z"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_locate_query_file_json() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.tsv", "1\n10\n20\n30\n");
    let queries = write_file(&dir, "queries.tsv", "29\n2\n15\n");

    let output = sciutil()
        .args(["--format", "json", "locate"])
        .arg(&reference)
        .arg("--queries")
        .arg(&queries)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["indices"], serde_json::json!([3, 0, 1]));
    assert_eq!(json["reference"]["kind"], "numeric");
    assert_eq!(json["reference"]["length"], 4);
    assert_eq!(json["matches"][0]["value"], 30.0);
}

#[test]
fn test_locate_sorted_strategy_tsv_output() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.txt", "5\n3\n3\n8\n");

    sciutil()
        .args(["--format", "tsv", "locate"])
        .arg(&reference)
        .args(["--strategy", "sorted", "3", "4"])
        .assert()
        .success()
        .stdout("query\tindex\tvalue\n3\t1\t3\n4\t0\t5\n");
}

#[test]
fn test_locate_strategies_agree_on_rounded_ties() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.txt", "0\n1\n");

    for strategy in ["auto", "linear", "sorted"] {
        sciutil()
            .arg("locate")
            .arg(&reference)
            .args(["--strategy", strategy, "1e16"])
            .assert()
            .success()
            .stdout("0\n");
    }
}

#[test]
fn test_locate_gzip_reference() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ref.txt.gz");
    let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(b"0.5\n1.5\n2.5\n").unwrap();
    encoder.finish().unwrap();

    sciutil()
        .arg("locate")
        .arg(&path)
        .arg("1.4")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_locate_type_mismatch() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.txt", "2019-04-07\n2019-04-08\n");

    sciutil()
        .arg("locate")
        .arg(&reference)
        .arg("12.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type mismatch"));
}

#[test]
fn test_locate_requires_queries() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.txt", "1\n");

    sciutil()
        .arg("locate")
        .arg(&reference)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No query values given"));
}

#[test]
fn test_locate_invalid_reference() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.txt", "1\n2\nthree\n");

    sciutil()
        .arg("locate")
        .arg(&reference)
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_locate_rejects_non_finite_query() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.txt", "1\n2\n");

    sciutil()
        .arg("locate")
        .arg(&reference)
        .arg("NaN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid query value 'NaN'"));
}

#[test]
fn test_convert_datenum_to_iso() {
    sciutil()
        .args(["convert", "--from", "datenum", "--to", "iso", "737522.5", "719529"])
        .assert()
        .success()
        .stdout("2019-04-07T12:00:00Z\n1970-01-01T00:00:00Z\n");
}

#[test]
fn test_convert_iso_to_unix_tsv() {
    sciutil()
        .args(["--format", "tsv", "convert", "--from", "iso", "--to", "unix"])
        .arg("2019-04-07 01:06:34")
        .assert()
        .success()
        .stdout("input\toutput\n2019-04-07 01:06:34\t1554599194\n");
}

#[test]
fn test_convert_rejects_bad_value() {
    sciutil()
        .args(["convert", "--from", "unix", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number 'yesterday'"));
}

#[test]
fn test_verbose_reports_runtime() {
    sciutil()
        .args(["--verbose", "convert", "--from", "unix", "0"])
        .assert()
        .success()
        .stdout("1970-01-01T00:00:00Z\n")
        .stderr(predicate::str::contains("Runtime:"));
}
