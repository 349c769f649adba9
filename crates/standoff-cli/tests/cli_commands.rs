//! End-to-end tests for the `standoff` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn standoff() -> Command {
    Command::cargo_bin("standoff").unwrap()
}

fn auto_output(seed: &str) -> String {
    let output = standoff()
        .args(["auto", "--seed", seed, "--max-turns", "30"])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    standoff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("auto"));
}

#[test]
fn unknown_subcommand_fails() {
    standoff().arg("brawl").assert().failure();
}

// ---------------------------------------------------------------------------
// auto
// ---------------------------------------------------------------------------

#[test]
fn auto_plays_from_the_opening() {
    standoff()
        .args(["auto", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hooksnap glares down at you"))
        .stdout(predicate::str::contains("Bring violence (Bash Heads +hard)"))
        .stdout(predicate::str::contains("Outcome:"));
}

#[test]
fn auto_is_reproducible_per_seed() {
    assert_eq!(auto_output("19"), auto_output("19"));
}

#[test]
fn auto_respects_max_turns() {
    standoff()
        .args(["auto", "--seed", "3", "--max-turns", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("undecided after 0 turns"));
}

#[test]
fn auto_writes_markdown_transcript() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("standoff.md");
    standoff()
        .args(["auto", "--seed", "5", "--transcript"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcript saved to"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Encounter Transcript"));
    assert!(content.contains("## Turn 1"));
    assert!(content.contains("Hooksnap glares down at you"));
}

#[test]
fn auto_writes_json_transcript() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("standoff.json");
    standoff()
        .args(["auto", "--seed", "5", "--transcript"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(json["entries"].is_array());
}

#[test]
fn auto_writes_text_transcript() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("standoff.txt");
    standoff()
        .args(["auto", "--seed", "5", "--transcript"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Encounter Transcript"));
}

#[test]
fn transcript_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("standoff.md");
    standoff()
        .args(["auto", "--seed", "5", "--transcript"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot write to"));
}

#[test]
fn verbose_logs_to_stderr() {
    standoff()
        .args(["--verbose", "auto", "--seed", "2", "--max-turns", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("encounter started"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_shows_opening_menu() {
    standoff()
        .args(["play", "--seed", "11"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hooksnap glares down at you"))
        .stdout(predicate::str::contains("[1] Bring violence (Bash Heads +hard)"));
}

#[test]
fn play_takes_a_turn() {
    standoff()
        .args(["play", "--seed", "11"])
        .write_stdin("1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Making the move Bash Heads with +hard..."));
}

#[test]
fn play_rejects_out_of_range_choice() {
    standoff()
        .args(["play"])
        .write_stdin("9\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pick a number from 1 to 4"));
}

#[test]
fn play_rejects_words() {
    standoff()
        .args(["play"])
        .write_stdin("dance\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not a menu number: dance"));
}

#[test]
fn play_reset_starts_over() {
    standoff()
        .args(["play"])
        .write_stdin("reset\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting over."));
}

#[test]
fn play_saves_transcript_on_exit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("play.md");
    standoff()
        .args(["play", "--seed", "4", "--transcript"])
        .arg(&path)
        .write_stdin("2\nquit\n")
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Hooksnap glares down at you"));
}
