//! Notification kinds and email body formatting

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Emails sent on affiliate lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Sent to the site admins when an affiliate registers
    Registration,
    /// Sent to the affiliate when a pending application is approved
    ApplicationAccepted,
    /// Sent to the affiliate when a referral is accepted
    NewReferral,
}

impl NotificationKind {
    pub fn default_subject(&self) -> &'static str {
        match self {
            NotificationKind::Registration => "New Affiliate Registration",
            NotificationKind::ApplicationAccepted => "Affiliate Application Accepted",
            NotificationKind::NewReferral => "Referral Awarded!",
        }
    }

    /// Built-in body template, before tag expansion.
    ///
    /// The registration body embeds the registrant's display name directly.
    pub fn default_body(&self, registrant_name: &str) -> String {
        match self {
            NotificationKind::Registration => format!(
                "A new affiliate has registered on your site, {{site_url}}\n\n\
                Name: {}\n\n\
                {{site_name}}",
                registrant_name
            ),
            NotificationKind::ApplicationAccepted => "Congratulations {affiliate_name}!\n\n\
                Your affiliate application on {site_url} has been accepted!\n\n\
                Log into your affiliate area at {login_url}\n\n"
                .to_string(),
            NotificationKind::NewReferral => "Congratulations {affiliate_name}!\n\n\
                You have been awarded a new referral of {referral_amount} on {site_url}!\n\n\
                Log in to your affiliate area to view your earnings or disable these notifications: {login_url}\n\n"
                .to_string(),
        }
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "registration" => Ok(NotificationKind::Registration),
            "application-accepted" => Ok(NotificationKind::ApplicationAccepted),
            "new-referral" => Ok(NotificationKind::NewReferral),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationKind::Registration => "registration",
            NotificationKind::ApplicationAccepted => "application-accepted",
            NotificationKind::NewReferral => "new-referral",
        };
        f.write_str(name)
    }
}

/// A composed message ready for a mail transport
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

fn html_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

fn blank_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Remove HTML tags and collapse whitespace, for subject lines
pub fn strip_html(text: &str) -> String {
    let stripped = html_tag_regex().replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turn plain text into HTML paragraphs.
///
/// Blank lines separate paragraphs; remaining single newlines become `<br />`.
pub fn autop(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    blank_line_regex()
        .split(&normalized)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>\n", p.replace('\n', "<br />\n")))
        .collect()
}

pub fn body_header(rtl: bool) -> String {
    let dir = if rtl { "rtl" } else { "ltr" };
    format!(
        "<html>\n<head>\n<style type=\"text/css\">#outlook a {{ padding: 0; }}</style>\n</head>\n<body dir=\"{}\">\n",
        dir
    )
}

pub fn body_footer() -> &'static str {
    "</body>\n</html>\n"
}
