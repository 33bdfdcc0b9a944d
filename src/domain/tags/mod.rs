//! Email tag system

pub mod context;
pub mod defaults;
pub mod filter;
pub mod registry;
pub mod shared;

// Re-export main types
pub use context::{ContextValue, TagContext};
pub use defaults::initialize;
pub use filter::{render, ContentFilter, FilterChain};
pub use registry::{is_valid_tag_name, TagEntry, TagHandler, TagRegistry};
pub use shared::SharedTagRegistry;
