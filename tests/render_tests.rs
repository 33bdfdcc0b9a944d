//! Integration tests for render command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{mailtags_cmd, write_config};

#[test]
fn test_render_text_with_site_name() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    mailtags_cmd()
        .current_dir(temp.path())
        .args(["render", "--text", "Welcome to {site_name}!"])
        .assert()
        .success()
        .stdout("Welcome to Acme!\n");
}

#[test]
fn test_render_referral_amount_from_set() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    mailtags_cmd()
        .current_dir(temp.path())
        .args(["render", "--text", "You earned {referral_amount}.", "--set", "amount=1234"])
        .assert()
        .success()
        .stdout("You earned $12.34.\n");
}

#[test]
fn test_render_unknown_and_empty_tags_pass_through() {
    let temp = TempDir::new().unwrap();

    mailtags_cmd()
        .current_dir(temp.path())
        .args(["render", "--text", "Hello {unknown} {}"])
        .assert()
        .success()
        .stdout("Hello {unknown} {}\n");
}

#[test]
fn test_render_file_with_context_file() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());
    fs::write(
        temp.path().join("body.txt"),
        "Hi {affiliate_name}, you earned {referral_amount}. Questions: {support_email}",
    )
    .unwrap();
    fs::write(temp.path().join("ctx.toml"), "affiliate_id = 1\namount = 250\n").unwrap();

    mailtags_cmd()
        .current_dir(temp.path())
        .args(["render", "body.txt", "--context", "ctx.toml"])
        .assert()
        .success()
        .stdout("Hi Ada, you earned $2.50. Questions: help@acme.test\n");
}

#[test]
fn test_render_handler_failure_is_reported() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    mailtags_cmd()
        .current_dir(temp.path())
        .args(["render", "--text", "{referral_amount}"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Missing context argument: 'amount'"))
        .stderr(predicate::str::contains("--set amount=<value>"));
}

#[test]
fn test_render_unknown_affiliate() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    mailtags_cmd()
        .current_dir(temp.path())
        .args(["render", "--text", "{affiliate_name}", "--set", "affiliate_id=77"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Affiliate not found: 77"));
}

#[test]
fn test_render_requires_template() {
    let temp = TempDir::new().unwrap();

    mailtags_cmd()
        .current_dir(temp.path())
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to render"));
}
