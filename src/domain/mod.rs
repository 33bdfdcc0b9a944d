//! Domain layer - Tag expansion and email composition

pub mod affiliate;
pub mod currency;
pub mod notification;
pub mod tags;

pub use affiliate::{Affiliate, AffiliateDirectory, AffiliateStatus};
pub use currency::{Currency, SymbolPosition};
pub use notification::{Email, NotificationKind};
pub use tags::{TagContext, TagRegistry};
