use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn lsa_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("lsa");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let files_dir = root.join("files");
    fs::create_dir_all(&files_dir).unwrap();
    fs::write(
        files_dir.join("feedback.txt"),
        "We are extremely pleased with the exceptional outstanding results.",
    )
    .unwrap();
    fs::write(
        files_dir.join("dispute.txt"),
        "The plaintiff alleges breach and demands urgent dismissal due to disputes.",
    )
    .unwrap();
    fs::write(
        files_dir.join("plain.txt"),
        "This is a plain sentence with no special words at all.",
    )
    .unwrap();
    fs::write(
        files_dir.join("notes.csv"),
        "note\nfavorable settlement reached\nurgent concern about delays\n",
    )
    .unwrap();

    let config_content = format!(
        r#"[connectors.filesystem]
root = "{}/files"
include_globs = ["**/*.txt", "**/*.csv"]
exclude_globs = []
follow_symlinks = false
"#,
        root.display()
    );

    let config_path = config_dir.join("lsa.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_lsa(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = lsa_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run lsa binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_classify_positive_text() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, stderr, success) = run_lsa(
        &config_path,
        &[
            "classify",
            "We are extremely pleased with the exceptional outstanding results.",
        ],
    );
    assert!(success, "classify failed: {}", stderr);
    assert!(stdout.contains("sentiment:    Positive"));
    assert!(stdout.contains("confidence:   95%"));
}

#[test]
fn test_classify_json_no_hits() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, stderr, success) = run_lsa(
        &config_path,
        &[
            "classify",
            "--json",
            "This is a plain sentence with no special words at all.",
        ],
    );
    assert!(success, "classify failed: {}", stderr);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["sentiment"], "Neutral");
    assert_eq!(value["confidence"], 80);
    assert_eq!(value["scores"]["positive"], 0);
    assert_eq!(value["scores"]["negative"], 0);
    assert_eq!(value["scores"]["neutral"], 0);
    assert_eq!(
        value["keyPhrases"][0],
        "This is a plain sentence with no special words at all..."
    );
}

#[test]
fn test_classify_from_stdin() {
    let (_tmp, config_path) = setup_test_env();
    let mut child = Command::new(lsa_binary())
        .arg("--config")
        .arg(&config_path)
        .args(["classify", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"The plaintiff alleges breach and demands urgent dismissal due to disputes.")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sentiment"], "Negative");
    assert_eq!(value["confidence"], 95);
}

#[test]
fn test_analyze_samples_report() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, stderr, success) = run_lsa(&config_path, &["analyze", "--samples"]);
    assert!(success, "analyze failed: {}", stderr);
    assert!(stdout.contains("Documents:   3"));
    assert!(stdout.contains("  Positive        2      67%"));
    assert!(stdout.contains("  Negative        1      33%"));
    assert!(stdout.contains("--- Contract_Amendment_2024.txt (Contract) ---"));
    assert!(stdout.contains("--- Dispute_Resolution_Case.txt (Dispute) ---"));
}

#[test]
fn test_analyze_filesystem_exports_csv() {
    let (tmp, config_path) = setup_test_env();
    let out = tmp.path().join("out/results.csv");
    let (_stdout, stderr, success) = run_lsa(
        &config_path,
        &[
            "analyze",
            "--filesystem",
            "--quiet",
            "--export",
            out.to_str().unwrap(),
        ],
    );
    assert!(success, "analyze failed: {}", stderr);

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Document Name,Type,Sentiment,Confidence,Summary");
    // Sorted by path: dispute, feedback, notes, plain.
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("dispute.txt,Text,Negative,95%,"));
    assert!(lines[2].starts_with("feedback.txt,Text,Positive,95%,"));
    assert!(lines[3].starts_with("notes.csv,CSV,"));
    assert!(lines[4].starts_with("plain.txt,Text,Neutral,80%,"));
}

#[test]
fn test_analyze_csv_rows_json_stdout() {
    let (tmp, config_path) = setup_test_env();
    let csv_path = tmp.path().join("files/notes.csv");
    let (stdout, stderr, success) = run_lsa(
        &config_path,
        &[
            "analyze",
            csv_path.to_str().unwrap(),
            "--csv-rows",
            "--export",
            "-",
            "--format",
            "json",
        ],
    );
    assert!(success, "analyze failed: {}", stderr);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["documentName"], "notes.csv#1");
    assert_eq!(records[0]["sentiment"], "Positive");
    assert_eq!(records[1]["documentName"], "notes.csv#2");
    assert_eq!(records[1]["sentiment"], "Negative");
}

#[test]
fn test_analyze_without_documents_fails() {
    let (_tmp, config_path) = setup_test_env();
    let (_stdout, stderr, success) = run_lsa(&config_path, &["analyze"]);
    assert!(!success);
    assert!(stderr.contains("No documents to analyze"));
}

#[test]
fn test_lexicon_override_from_config() {
    let (tmp, _config_path) = setup_test_env();
    let config_path = tmp.path().join("config/custom.toml");
    fs::write(&config_path, "[lexicon]\npositive = [\"plaintiff\"]\n").unwrap();

    let (stdout, _, success) = run_lsa(&config_path, &["lexicon"]);
    assert!(success);
    assert!(stdout.contains("1. positive     1  plaintiff"));

    let (stdout, _, success) =
        run_lsa(&config_path, &["classify", "--json", "The plaintiff alleges breach."]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // 1 positive, 2 negative
    assert_eq!(value["sentiment"], "Negative");
    assert_eq!(value["scores"]["positive"], 33);
}

#[test]
fn test_invalid_config_is_error() {
    let (tmp, _config_path) = setup_test_env();
    let config_path = tmp.path().join("config/bad.toml");
    fs::write(&config_path, "[export]\nformat = \"xml\"\n").unwrap();
    let (_, _, success) = run_lsa(&config_path, &["lexicon"]);
    assert!(!success);
}

#[test]
fn test_missing_config_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("absent.toml");
    let (stdout, _, success) = run_lsa(&config_path, &["lexicon"]);
    assert!(success);
    assert!(stdout.contains("breach"));
}

#[test]
fn test_analyze_byte_order_mark_file() {
    let (tmp, config_path) = setup_test_env();
    let path = tmp.path().join("excel.csv");
    fs::write(&path, "\u{feff}Settlement reached. Terms agreed.\n").unwrap();
    let (stdout, stderr, success) = run_lsa(
        &config_path,
        &[
            "analyze",
            path.to_str().unwrap(),
            "--export",
            "-",
            "--format",
            "json",
        ],
    );
    assert!(success, "analyze failed: {}", stderr);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value[0]["keyPhrases"][0], "Settlement reached...");
}
