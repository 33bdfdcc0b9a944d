//! Tag registry and expander
//!
//! Tags are `{name}` placeholders in email subjects and bodies. Each registered
//! name is bound to a handler that produces the replacement text from the
//! expansion context. Names not in the registry pass through verbatim.

use super::context::TagContext;
use crate::error::{MailtagsError, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Regex for matching tags: {name}, {name-with-dashes}, {name_with_underscores}
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_-]+)\}").unwrap())
}

/// Check that a name could be matched by the expander
pub fn is_valid_tag_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Produces the replacement text for a tag.
///
/// Implemented for any `Fn(&TagContext, &str) -> Result<String>` closure, so
/// most callers never name this trait.
pub trait TagHandler: Send + Sync {
    fn invoke(&self, context: &TagContext, tag: &str) -> Result<String>;
}

impl<F> TagHandler for F
where
    F: Fn(&TagContext, &str) -> Result<String> + Send + Sync,
{
    fn invoke(&self, context: &TagContext, tag: &str) -> Result<String> {
        self(context, tag)
    }
}

/// One registered placeholder
#[derive(Clone)]
pub struct TagEntry {
    name: String,
    description: String,
    handler: Arc<dyn TagHandler>,
}

impl TagEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn invoke(&self, context: &TagContext) -> Result<String> {
        self.handler.invoke(context, &self.name)
    }
}

impl fmt::Debug for TagEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered mapping from tag name to handler
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: IndexMap<String, TagEntry>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a tag.
    ///
    /// Never fails: a registration that cannot be honoured is logged and
    /// dropped, leaving the registry unchanged. Use [`try_register`] to see
    /// the rejection.
    ///
    /// [`try_register`]: TagRegistry::try_register
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl TagHandler + 'static,
    ) {
        if let Err(e) = self.try_register(name, description, handler) {
            tracing::warn!("Ignoring tag registration: {}", e);
        }
    }

    /// Add or replace a tag, reporting invalid names.
    ///
    /// A replaced tag keeps its position in [`list`](TagRegistry::list).
    pub fn try_register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl TagHandler + 'static,
    ) -> Result<()> {
        let name = name.into();
        if !is_valid_tag_name(&name) {
            return Err(MailtagsError::InvalidTagName(name));
        }

        let entry = TagEntry {
            name: name.clone(),
            description: description.into(),
            handler: Arc::new(handler),
        };

        if self.tags.insert(name.clone(), entry).is_some() {
            tracing::debug!("Replaced handler for tag {{{}}}", name);
        } else {
            tracing::debug!("Registered tag {{{}}}", name);
        }

        Ok(())
    }

    /// Remove a tag; no-op when absent
    pub fn unregister(&mut self, name: &str) {
        if self.tags.shift_remove(name).is_some() {
            tracing::debug!("Unregistered tag {{{}}}", name);
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&TagEntry> {
        self.tags.get(name)
    }

    /// All entries in registration order
    pub fn list(&self) -> Vec<&TagEntry> {
        self.tags.values().collect()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Replace every registered `{name}` in `content` with its handler output.
    ///
    /// Unknown names are left as-is. Handler output is not re-scanned, and
    /// the first handler error aborts the expansion and is returned unchanged.
    /// Content without any registered tag is returned borrowed.
    pub fn expand<'a>(&self, content: &'a str, context: &TagContext) -> Result<Cow<'a, str>> {
        if self.tags.is_empty() {
            return Ok(Cow::Borrowed(content));
        }

        let mut output = String::new();
        let mut last = 0;

        for captures in tag_regex().captures_iter(content) {
            let name = &captures[1];
            let Some(entry) = self.tags.get(name) else {
                continue;
            };

            let whole = captures.get(0).map_or(0..0, |m| m.range());
            let replacement = entry.invoke(context)?;

            output.push_str(&content[last..whole.start]);
            output.push_str(&replacement);
            last = whole.end;
        }

        if last == 0 {
            return Ok(Cow::Borrowed(content));
        }

        output.push_str(&content[last..]);
        tracing::debug!("Expanded tags in {} bytes of content", content.len());
        Ok(Cow::Owned(output))
    }
}
