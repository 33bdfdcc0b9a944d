//! Affiliate records used by tag handlers and notifications

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Affiliate account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AffiliateStatus {
    #[default]
    Pending,
    Active,
    Inactive,
    Rejected,
}

impl FromStr for AffiliateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(AffiliateStatus::Pending),
            "active" => Ok(AffiliateStatus::Active),
            "inactive" => Ok(AffiliateStatus::Inactive),
            "rejected" => Ok(AffiliateStatus::Rejected),
            _ => Err(format!(
                "Invalid status: '{}'. Valid statuses: pending, active, inactive, rejected",
                s
            )),
        }
    }
}

impl fmt::Display for AffiliateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AffiliateStatus::Pending => "pending",
            AffiliateStatus::Active => "active",
            AffiliateStatus::Inactive => "inactive",
            AffiliateStatus::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliate {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub status: AffiliateStatus,
    /// Opted in to "new referral" emails
    #[serde(default)]
    pub referral_notifications: bool,
}

/// Lookup of affiliates by id
#[derive(Debug, Clone, Default)]
pub struct AffiliateDirectory {
    affiliates: Vec<Affiliate>,
}

impl AffiliateDirectory {
    pub fn new(affiliates: Vec<Affiliate>) -> Self {
        Self { affiliates }
    }

    pub fn get(&self, id: u64) -> Option<&Affiliate> {
        self.affiliates.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.affiliates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.affiliates.is_empty()
    }
}
