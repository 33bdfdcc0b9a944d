use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn mailtags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mailtags").unwrap();
    cmd.env_remove("MAILTAGS_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"
[site]
name = "Acme"
url = "https://acme.test"
login_url = "https://acme.test/affiliate-area"
admin_email = "owner@acme.test"

[emails]
registration_notifications = true
admin_notification_emails = """
ops@acme.test
sales@acme.test
"""

[[affiliates]]
id = 1
name = "Ada"
email = "ada@example.com"
status = "active"
referral_notifications = true

[[affiliates]]
id = 2
name = "Bob"
email = "bob@example.com"
status = "pending"

[[tags]]
name = "support_email"
description = "Support address"
value = "help@acme.test"
"#;

/// Write the sample settings as mailtags.toml in `dir`
#[allow(dead_code)]
pub fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("mailtags.toml");
    fs::write(&path, SAMPLE_CONFIG).unwrap();
    path
}
