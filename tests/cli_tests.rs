//! Command-line tests against a store definition written to a temp directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RUN_SAM: &str = "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:1000\n@SQ\tSN:chr2\tLN:2000\n";

const CALLS_VCF: &str = "##fileformat=VCFv4.3
##contig=<ID=1,length=1000>
##contig=<ID=2,length=2000>
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
";

fn write(dir: &Path, relative: &str, content: &str) -> String {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

/// Writes the data files and a store definition; returns the definition path
fn setup(dir: &Path) -> String {
    let run1 = write(dir, "pf/run1/aln.sam", RUN_SAM);
    let run2 = write(dir, "pf/run2/aln.sam", RUN_SAM);
    let calls = write(dir, "pv/calls.vcf", CALLS_VCF);

    let config = serde_json::json!({
        "files": [
            {"path": run1, "organism": "Pf", "kind": "alignment"},
            {"path": run2, "organism": "Pf", "kind": "alignment"},
            {"path": calls, "organism": "Pv", "kind": "variant"},
        ],
        "aliases": {"chr1": "1", "chr2": "2"},
    });
    write(dir, "store.json", &config.to_string())
}

fn cmd(config: &str) -> Command {
    let mut cmd = Command::cargo_bin("biodata-store").unwrap();
    cmd.env_remove("BIODATA_STORE_CONFIG")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_files_for_organism() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());

    cmd(&config)
        .args(["--format", "tsv", "files", "--organism", "Pf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0\tPf\talignment\trun1\t"))
        .stdout(predicate::str::contains("1\tPf\talignment\trun2\t"))
        .stdout(predicate::str::contains("\tPv\t").not());
}

#[test]
fn test_find_aliased_sequence() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());

    cmd(&config)
        .args(["--format", "tsv", "find", "chr1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("run1"))
        .stdout(predicate::str::contains("run2"))
        .stdout(predicate::str::contains("calls.vcf"));
}

#[test]
fn test_resolve_json() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());

    let output = cmd(&config)
        .args(["--format", "json", "resolve", "2", "chr1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["resolved"], "1");
    assert_eq!(value["file_id"], 2);
}

#[test]
fn test_sequences_text() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());

    cmd(&config)
        .args(["sequences", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chr1  1000  0"))
        .stdout(predicate::str::contains("chr2  2000  1"));
}

#[test]
fn test_alias_reverse() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());

    cmd(&config)
        .args(["alias", "--reverse", "2"])
        .assert()
        .success()
        .stdout("chr2\n");

    cmd(&config)
        .args(["alias", "chrX"])
        .assert()
        .success()
        .stdout("chrX\n");
}

#[test]
fn test_unknown_file_id() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());

    cmd(&config)
        .args(["file", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File 9 not found"));

    cmd(&config)
        .args(["sequences", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File 9 not found (3 files in store)"));

    cmd(&config)
        .args(["--format", "json", "sequences", "9"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_missing_config() {
    Command::cargo_bin("biodata-store")
        .unwrap()
        .env_remove("BIODATA_STORE_CONFIG")
        .args(["files"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No store definition given"));
}

#[test]
fn test_unreadable_data_file() {
    let dir = TempDir::new().unwrap();
    let config = serde_json::json!({
        "files": [{"path": "/nonexistent/dir/gone.sam", "organism": "Pf", "kind": "alignment"}],
    });
    let config = write(dir.path(), "store.json", &config.to_string());

    cmd(&config)
        .args(["find", "chr1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
