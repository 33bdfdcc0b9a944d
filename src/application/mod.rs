//! Application layer - Use cases and orchestration

pub mod list_tags;
pub mod notify;
pub mod render;

pub use list_tags::{ListTagsService, TagSummary};
pub use notify::NotificationService;
pub use render::{RenderService, TemplateSource};
