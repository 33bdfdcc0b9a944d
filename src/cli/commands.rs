//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mailtags")]
#[command(about = "Email template tags for affiliate notifications", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (default: $MAILTAGS_CONFIG or ./mailtags.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available email tags
    Tags {
        /// Print the list as HTML for admin help text
        #[arg(long)]
        html: bool,
    },

    /// Expand tags in a template
    Render {
        /// Template file to render
        #[arg(conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Template text to render
        #[arg(short, long)]
        text: Option<String>,

        /// TOML file with context arguments
        #[arg(long, value_name = "PATH")]
        context: Option<PathBuf>,

        /// Context argument (repeatable)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Compose a notification email and print it
    Notify {
        /// Notification (registration, application-accepted, new-referral)
        kind: String,

        /// Affiliate id
        #[arg(short, long)]
        affiliate: u64,

        /// Referral amount in minor currency units (new-referral)
        #[arg(long, default_value_t = 0)]
        amount: i64,

        /// Registrant display name (registration)
        #[arg(long, default_value = "")]
        name: String,

        /// New affiliate status (application-accepted)
        #[arg(long, default_value = "active")]
        status: String,

        /// Previous affiliate status (application-accepted)
        #[arg(long, default_value = "pending")]
        old_status: String,

        /// Compose even when the notification would be suppressed
        #[arg(short, long)]
        force: bool,
    },
}
