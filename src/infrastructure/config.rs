//! Configuration management

use crate::domain::{Affiliate, AffiliateDirectory, Currency};
use crate::error::{MailtagsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "mailtags.toml";

/// Environment variable naming the settings file
pub const CONFIG_ENV_VAR: &str = "MAILTAGS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub currency: Currency,
    pub emails: EmailConfig,
    pub affiliates: Vec<Affiliate>,
    /// Static tags registered after the built-in ones
    pub tags: Vec<CustomTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
    pub login_url: Option<String>,
    pub admin_url: Option<String>,
    pub admin_email: String,
    /// Right-to-left site language
    pub rtl: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            name: "My Site".to_string(),
            url: "http://localhost".to_string(),
            login_url: None,
            admin_url: None,
            admin_email: "admin@localhost".to_string(),
            rtl: false,
        }
    }
}

/// Notification switches and subject/body overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub from_email: Option<String>,
    pub registration_notifications: bool,
    pub require_approval: bool,
    /// Newline separated admin recipients
    pub admin_notification_emails: Option<String>,
    pub admin_registration_subject: Option<String>,
    pub admin_registration: Option<String>,
    pub affiliate_application_accepted_subject: Option<String>,
    pub affiliate_application_accepted: Option<String>,
    pub affiliate_new_referral_subject: Option<String>,
    pub affiliate_new_referral: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTag {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub value: String,
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| MailtagsError::Config(format!("Failed to parse mailtags.toml: {}", e)))?;
        config.currency.validate()?;
        Ok(config)
    }

    /// Load config from a file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MailtagsError::SettingsNotFound(path.to_path_buf())
            } else {
                MailtagsError::Io(e)
            }
        })?;

        tracing::debug!("Loaded settings from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Load config from the flag path, the environment, or the working directory.
    ///
    /// Only the working-directory file is optional; without it the defaults apply.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV_VAR).ok();
        match resolve_path(explicit, env_path.as_deref()) {
            Some(path) => Self::load(&path),
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if local.exists() {
                    Self::load(&local)
                } else {
                    tracing::debug!("No {} found, using default settings", CONFIG_FILE_NAME);
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn directory(&self) -> AffiliateDirectory {
        AffiliateDirectory::new(self.affiliates.clone())
    }

    /// Login page, falling back to the site URL
    pub fn login_url(&self) -> &str {
        self.site.login_url.as_deref().unwrap_or(&self.site.url)
    }

    /// Admin area base URL
    pub fn admin_url(&self) -> String {
        self.site
            .admin_url
            .clone()
            .unwrap_or_else(|| format!("{}/wp-admin/", self.site.url.trim_end_matches('/')))
    }

    /// Recipients of admin notifications
    pub fn admin_recipients(&self) -> Vec<String> {
        let configured = self
            .emails
            .admin_notification_emails
            .as_deref()
            .filter(|s| !s.trim().is_empty());

        match configured {
            Some(list) => list
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![self.site.admin_email.clone()],
        }
    }

    pub fn reply_to(&self) -> &str {
        self.emails
            .from_email
            .as_deref()
            .unwrap_or(&self.site.admin_email)
    }
}

fn resolve_path(explicit: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    })
}
