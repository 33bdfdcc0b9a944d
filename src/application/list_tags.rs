//! List tags use case

use crate::domain::tags::initialize;
use crate::domain::TagRegistry;
use crate::infrastructure::Config;

/// A tag as shown in help listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub name: String,
    pub description: String,
}

/// Service for listing the available email tags.
pub struct ListTagsService {
    registry: TagRegistry,
}

impl ListTagsService {
    /// Create a list tags service with the tags `config` provides.
    pub fn new(config: &Config) -> Self {
        let mut registry = TagRegistry::new();
        initialize(&mut registry, config);
        Self { registry }
    }

    /// Registered tags in registration order.
    pub fn execute(&self) -> Vec<TagSummary> {
        self.registry
            .list()
            .into_iter()
            .map(|entry| TagSummary {
                name: entry.name().to_string(),
                description: entry.description().to_string(),
            })
            .collect()
    }
}
