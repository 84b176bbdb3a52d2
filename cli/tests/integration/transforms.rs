//! Integration tests for the path transforms: --up, --flat, --follow.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cpf() -> Command {
    #[allow(clippy::unwrap_used)]
    Command::cargo_bin("cpf").unwrap()
}

#[test]
fn test_up_one_drops_leading_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("input")).unwrap();
    fs::write(dir.path().join("input/a.txt"), "a").unwrap();
    fs::write(dir.path().join("input/b.txt"), "b").unwrap();

    cpf()
        .current_dir(dir.path())
        .args(["-u", "1", "input/*.txt", "output"])
        .assert()
        .success();

    assert!(dir.path().join("output/a.txt").exists());
    assert!(dir.path().join("output/b.txt").exists());
    assert!(!dir.path().join("output/input").exists());
}

#[test]
fn test_up_two_on_nested_path() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("input/other")).unwrap();
    fs::write(dir.path().join("input/other/c.txt"), "c").unwrap();

    cpf()
        .current_dir(dir.path())
        .args(["-u", "2", "input/**/*.txt", "output"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("output/c.txt")).unwrap(),
        "c"
    );
    assert!(!dir.path().join("output/other").exists());
}

#[test]
fn test_up_beyond_depth_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("input")).unwrap();
    fs::write(dir.path().join("input/a.txt"), "a").unwrap();

    cpf()
        .current_dir(dir.path())
        .args(["-u", "2", "input/*.txt", "output"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot strip 2 segments"));
}

#[test]
fn test_flat_keeps_basenames_only() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("input/other")).unwrap();
    fs::write(dir.path().join("input/b.txt"), "b").unwrap();
    fs::write(dir.path().join("input/other/a.txt"), "a").unwrap();
    fs::write(dir.path().join("input/other/c.js"), "c").unwrap();

    cpf()
        .current_dir(dir.path())
        .args(["-f", "input/**/*.txt", "output"])
        .assert()
        .success();

    assert!(dir.path().join("output/a.txt").exists());
    assert!(dir.path().join("output/b.txt").exists());
    assert!(!dir.path().join("output/other").exists());
    assert!(!dir.path().join("output/c.js").exists());
}

#[test]
fn test_flat_overrides_numeric_up() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("input")).unwrap();
    fs::write(dir.path().join("input/a.txt"), "a").unwrap();

    // -u 9 alone would fail on this shallow path; -f wins.
    cpf()
        .current_dir(dir.path())
        .args(["-f", "-u", "9", "input/*.txt", "output"])
        .assert()
        .success();

    assert!(dir.path().join("output/a.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_follow_copies_through_symlinked_directories() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("input/origin/inner")).unwrap();
    fs::write(dir.path().join("input/origin/inner/a.txt"), "a").unwrap();
    symlink("origin", dir.path().join("input/dest")).unwrap();

    cpf()
        .current_dir(dir.path())
        .args(["-F", "-u", "1", "input/**/*.txt", "output"])
        .assert()
        .success();

    assert!(dir.path().join("output/origin/inner/a.txt").exists());
    assert!(dir.path().join("output/dest/inner/a.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_not_followed_by_default() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("input/origin/inner")).unwrap();
    fs::write(dir.path().join("input/origin/inner/a.txt"), "a").unwrap();
    symlink("origin", dir.path().join("input/dest")).unwrap();

    cpf()
        .current_dir(dir.path())
        .args(["-u", "1", "input/**/*.txt", "output"])
        .assert()
        .success();

    assert!(dir.path().join("output/origin/inner/a.txt").exists());
    assert!(!dir.path().join("output/dest").exists());
}
