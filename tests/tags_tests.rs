//! Integration tests for tags command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{mailtags_cmd, write_config};

#[test]
fn test_tags_without_settings_lists_builtin_tags() {
    let temp = TempDir::new().unwrap();

    let output = mailtags_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "{affiliate_name} - The name of the affiliate",
            "{site_name} - Your site name",
            "{site_url} - Your site URL",
            "{login_url} - The affiliate login URL",
            "{referral_amount} - The commission amount rewarded to the affiliate",
        ]
    );
}

#[test]
fn test_tags_includes_custom_tags_from_settings() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    mailtags_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("{support_email} - Support address"));
}

#[test]
fn test_tags_html_output() {
    let temp = TempDir::new().unwrap();

    mailtags_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .arg("--html")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{site_name} - Your site name<br/>{site_url}",
        ));
}

#[test]
fn test_tags_missing_explicit_config() {
    let temp = TempDir::new().unwrap();

    mailtags_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("tags")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Settings file not found"));
}

#[test]
fn test_tags_config_from_environment() {
    let temp = TempDir::new().unwrap();
    let settings_dir = TempDir::new().unwrap();
    let path = write_config(settings_dir.path());

    mailtags_cmd()
        .current_dir(temp.path())
        .env("MAILTAGS_CONFIG", &path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("{support_email}"));
}
