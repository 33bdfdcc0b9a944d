//! Output formatting utilities

use crate::application::TagSummary;
use crate::domain::Email;

/// Format the tag help list, one `{tag} - description` per line
pub fn format_tag_list(tags: &[TagSummary]) -> String {
    if tags.is_empty() {
        return "No tags registered".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{{{}}} - {}\n", tag.name, tag.description));
    }

    output
}

/// Format the tag help list for an HTML settings page
pub fn format_tag_list_html(tags: &[TagSummary]) -> String {
    tags.iter()
        .map(|tag| format!("{{{}}} - {}<br/>", tag.name, tag.description))
        .collect()
}

/// Format a composed email as a header block followed by the body
pub fn format_email(email: &Email) -> String {
    let mut output = format!("To: {}\nSubject: {}\n", email.to.join(", "), email.subject);
    for (name, value) in &email.headers {
        output.push_str(&format!("{}: {}\n", name, value));
    }
    output.push('\n');
    output.push_str(&email.body);
    output
}
