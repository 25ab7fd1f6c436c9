use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const REFLOG: &str = "\
abc123 def456 Alice <alice@example.com> 1700000000 +0000 feat: add login
fff000 eee111 Carol <carol@example.com> yesterday +0000 feat: lost
def456 ghi789 Bob <bob@example.com> 1700003600 +0000 fix: null check
";

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn write_reflog(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("HEAD");
    fs::write(&path, content).unwrap();
    path
}

fn gwr(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gwr").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn init_git_repo(dir: &Path) {
    // init and basic identity
    assert!(Command::new("git")
        .args(["init"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.email", "you@example.com"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.name", "tester"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn commit_file(dir: &Path, name: &str, message: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(name.as_bytes()).unwrap();
    f.sync_all().unwrap();
    assert!(Command::new("git")
        .args(["add", "."])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

#[test]
fn report_text_from_reflog_file() {
    let dir = tempdir().unwrap();
    let reflog = write_reflog(dir.path(), REFLOG);

    let out = gwr(dir.path())
        .arg("--reflog")
        .arg(&reflog)
        .args(["--all", "report"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap(), "1:add login2:null check\n");
}

#[test]
fn multi_word_author_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let reflog = write_reflog(
        dir.path(),
        &format!("{REFLOG}a9 b9 Jane Doe <jane@example.com> 1700001000 +0000 feat: spaced\n"),
    );

    let out = gwr(dir.path())
        .arg("--reflog")
        .arg(&reflog)
        .args(["--all", "report"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap(), "1:add login2:null check\n");
}

#[test]
fn report_filters_by_author() {
    let dir = tempdir().unwrap();
    let reflog = write_reflog(dir.path(), REFLOG);

    let out = gwr(dir.path())
        .arg("--reflog")
        .arg(&reflog)
        .args(["--all", "--author", "Bob", "report"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap(), "1:null check\n");
}

#[test]
fn report_json_outputs_entries() {
    let dir = tempdir().unwrap();
    let reflog = write_reflog(dir.path(), REFLOG);

    let out = gwr(dir.path())
        .arg("--reflog")
        .arg(&reflog)
        .args(["--since", "1700000000", "--until", "1700000000", "report", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let entries = v["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["line"], "1:add login");
    assert_eq!(entries[0]["record"]["author_email"], "alice@example.com");
    assert_eq!(v["range"]["since"], 1_700_000_000);
}

#[test]
fn commits_ndjson_outputs_one_record_per_line() {
    let dir = tempdir().unwrap();
    let reflog = write_reflog(dir.path(), REFLOG);

    let out = gwr(dir.path())
        .arg("--reflog")
        .arg(&reflog)
        .args(["--all", "commits", "--ndjson"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["author_name"], "Alice");
    assert_eq!(records[1]["timestamp"], 1_700_003_600);
}

#[test]
fn empty_window_succeeds_without_output() {
    let dir = tempdir().unwrap();
    let reflog = write_reflog(dir.path(), REFLOG);

    let out = gwr(dir.path())
        .arg("--reflog")
        .arg(&reflog)
        .args(["--since", "1", "--until", "2", "report"])
        .assert()
        .success()
        .get_output()
        .clone();
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("No commits found"));
}

#[test]
fn reversed_range_fails() {
    let dir = tempdir().unwrap();
    let reflog = write_reflog(dir.path(), REFLOG);

    gwr(dir.path())
        .arg("--reflog")
        .arg(&reflog)
        .args(["--since", "2023-11-15", "--until", "2023-11-01", "report"])
        .assert()
        .failure();
}

#[test]
fn missing_reflog_file_fails() {
    let dir = tempdir().unwrap();

    let out = gwr(dir.path())
        .arg("--reflog")
        .arg(dir.path().join("nope"))
        .arg("report")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("No reflog found"));
}

#[test]
fn report_from_git_repo_covers_current_week() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_file(dir.path(), "src/a.rs", "feat: first file");
    commit_file(dir.path(), "src/b.rs", "docs: second file");

    let out = gwr(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .args(["report", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let lines: Vec<&str> = v["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["line"].as_str().unwrap())
        .collect();
    assert_eq!(lines, vec!["1:commit (initial): feat: first file", "2:second file"]);
}

#[test]
fn since_accepts_a_revision() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_file(dir.path(), "one.txt", "chore: one");
    commit_file(dir.path(), "two.txt", "chore: two");

    gwr(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .args(["--since", "HEAD~1", "--all", "commits", "--json"])
        .assert()
        .success();
}

#[test]
fn repo_without_commits_has_no_reflog() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());

    gwr(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .arg("report")
        .assert()
        .failure();
}
