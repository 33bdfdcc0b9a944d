//! Render template text use case

use crate::domain::tags::initialize;
use crate::domain::{TagContext, TagRegistry};
use crate::error::{MailtagsError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::Path;

/// Where the template text comes from
#[derive(Debug, Clone)]
pub enum TemplateSource<'a> {
    Text(&'a str),
    File(&'a Path),
}

/// Service for expanding tags in arbitrary template text
pub struct RenderService {
    registry: TagRegistry,
}

impl RenderService {
    pub fn new(config: &Config) -> Self {
        let mut registry = TagRegistry::new();
        initialize(&mut registry, config);
        RenderService { registry }
    }

    /// Build the expansion context from an optional TOML file and
    /// `key=value` assignments; assignments win.
    pub fn build_context(context_file: Option<&Path>, assignments: &[String]) -> Result<TagContext> {
        let mut ctx = match context_file {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|e| {
                    MailtagsError::Config(format!(
                        "Failed to read context file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                TagContext::from_toml_str(&contents)?
            }
            None => TagContext::new(),
        };

        for assignment in assignments {
            let (key, value) = TagContext::parse_assignment(assignment)?;
            ctx.insert(key, value);
        }

        Ok(ctx)
    }

    pub fn execute(&self, source: TemplateSource<'_>, ctx: &TagContext) -> Result<String> {
        let content = match source {
            TemplateSource::Text(text) => text.to_string(),
            TemplateSource::File(path) => fs::read_to_string(path).map_err(|e| {
                MailtagsError::Template(format!(
                    "Failed to read template file {}: {}",
                    path.display(),
                    e
                ))
            })?,
        };

        Ok(self.registry.expand(&content, ctx)?.into_owned())
    }
}
