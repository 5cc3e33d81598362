use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn temp_workspace() -> TempDir {
    tempfile::tempdir().expect("create tempdir")
}

fn write_input(workspace: &TempDir, name: &str, text: &str) -> String {
    let path = workspace.path().join(name);
    fs::write(&path, text).expect("write input");
    name.to_string()
}

fn wfreq() -> Command {
    Command::cargo_bin("wfreq").expect("binary exists")
}

#[test]
fn lists_words_most_frequent_first_with_marker() {
    let workspace = temp_workspace();
    let input = write_input(&workspace, "input.txt", "The cat sat. The CAT sat!");

    let output = wfreq()
        .current_dir(workspace.path())
        .args(["-q", input.as_str(), "--workers", "2", "--no-progress"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).expect("stdout is UTF-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["the: 2", "cat: 2", "sat: 2", "--- 6 words, 3 distinct ---"]
    );
}

#[test]
fn worker_count_does_not_change_the_listing() {
    let workspace = temp_workspace();
    let input = write_input(
        &workspace,
        "input.txt",
        "to be or not to be that is the question",
    );

    let mut listings = Vec::new();
    for workers in ["1", "3", "16"] {
        let output = wfreq()
            .current_dir(workspace.path())
            .args(["-q", input.as_str(), "--workers", workers, "--no-progress"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        listings.push(String::from_utf8(output).expect("stdout is UTF-8"));
    }
    assert_eq!(listings[0], listings[1]);
    assert_eq!(listings[0], listings[2]);
}

#[test]
fn zero_workers_fails_before_counting() {
    let workspace = temp_workspace();
    let input = write_input(&workspace, "input.txt", "some words here");

    wfreq()
        .current_dir(workspace.path())
        .args(["-q", input.as_str(), "--workers", "0"])
        .assert()
        .failure();
}

#[test]
fn missing_file_fails() {
    let workspace = temp_workspace();

    wfreq()
        .current_dir(workspace.path())
        .args(["-q", "no-such-file.txt"])
        .assert()
        .failure();
}

#[test]
fn empty_file_fails() {
    let workspace = temp_workspace();
    let input = write_input(&workspace, "empty.txt", "");

    wfreq()
        .current_dir(workspace.path())
        .args(["-q", input.as_str()])
        .assert()
        .failure();
}

#[test]
fn json_summary_parses() {
    let workspace = temp_workspace();
    let input = write_input(&workspace, "input.txt", "alpha beta alpha");

    let output = wfreq()
        .current_dir(workspace.path())
        .args(["-q", input.as_str(), "--workers", "2", "--no-progress", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: Value = serde_json::from_slice(&output).expect("stdout is valid JSON");
    assert_eq!(summary["total_tokens"], 3);
    assert_eq!(summary["distinct_words"], 2);
    assert_eq!(summary["words"][0]["word"], "alpha");
    assert_eq!(summary["words"][0]["count"], 2);
}

#[test]
fn top_truncates_the_listing() {
    let workspace = temp_workspace();
    let input = write_input(&workspace, "input.txt", "a a a b b c");

    let output = wfreq()
        .current_dir(workspace.path())
        .args(["-q", input.as_str(), "--no-progress", "--top", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).expect("stdout is UTF-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["a: 3", "--- 6 words, 3 distinct ---"]);
}

#[test]
fn output_flag_writes_listing_to_file() {
    let workspace = temp_workspace();
    let input = write_input(&workspace, "input.txt", "x y x");

    wfreq()
        .current_dir(workspace.path())
        .args([
            "-q",
            input.as_str(),
            "--no-progress",
            "--output",
            "listing.txt",
        ])
        .assert()
        .success();

    let listing =
        fs::read_to_string(workspace.path().join("listing.txt")).expect("read listing");
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines, vec!["x: 2", "y: 1", "--- 3 words, 2 distinct ---"]);
}
