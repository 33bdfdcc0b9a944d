//! mailtags - Email template tags for affiliate notifications
//!
//! A registry of `{tag}` placeholders bound to handlers, an expander that
//! substitutes them in email subjects and bodies, and the notification
//! composer built on top of it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MailtagsError;
