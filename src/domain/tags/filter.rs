//! Post-processing applied after tag expansion

use super::context::TagContext;
use super::registry::TagRegistry;
use crate::error::Result;
use std::fmt;

/// Transforms already-expanded content
pub trait ContentFilter: Send + Sync {
    fn apply(&self, content: String, context: &TagContext) -> Result<String>;
}

impl<F> ContentFilter for F
where
    F: Fn(String, &TagContext) -> Result<String> + Send + Sync,
{
    fn apply(&self, content: String, context: &TagContext) -> Result<String> {
        self(content, context)
    }
}

/// Filters run in the order they were added
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn ContentFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: impl ContentFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn apply(&self, content: String, context: &TagContext) -> Result<String> {
        self.filters
            .iter()
            .try_fold(content, |acc, filter| filter.apply(acc, context))
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Expand tags, then run the filter chain over the result
pub fn render(
    registry: &TagRegistry,
    filters: &FilterChain,
    content: &str,
    context: &TagContext,
) -> Result<String> {
    let expanded = registry.expand(content, context)?.into_owned();
    filters.apply(expanded, context)
}
