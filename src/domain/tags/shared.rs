//! Thread-safe handle to a tag registry

use super::context::TagContext;
use super::registry::{TagHandler, TagRegistry};
use crate::error::Result;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable registry handle for hosts that expand tags from several threads.
///
/// Registration takes the write lock; expansion and introspection share the
/// read lock. Contexts are never stored, so concurrent expansions stay
/// independent.
#[derive(Debug, Clone, Default)]
pub struct SharedTagRegistry {
    inner: Arc<RwLock<TagRegistry>>,
}

impl SharedTagRegistry {
    pub fn new(registry: TagRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    // Only register/unregister hold the write lock and neither panics mid-update.
    fn read(&self) -> RwLockReadGuard<'_, TagRegistry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TagRegistry> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl TagHandler + 'static,
    ) {
        self.write().register(name, description, handler);
    }

    pub fn unregister(&self, name: &str) {
        self.write().unregister(name);
    }

    pub fn exists(&self, name: &str) -> bool {
        self.read().exists(name)
    }

    /// Names and descriptions in registration order
    pub fn list(&self) -> Vec<(String, String)> {
        self.read()
            .list()
            .into_iter()
            .map(|entry| (entry.name().to_string(), entry.description().to_string()))
            .collect()
    }

    pub fn expand(&self, content: &str, context: &TagContext) -> Result<String> {
        Ok(self.read().expand(content, context)?.into_owned())
    }

    /// Run `f` against the registry under the read lock
    pub fn with_registry<T>(&self, f: impl FnOnce(&TagRegistry) -> T) -> T {
        f(&self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_register_and_expand() {
        let shared = SharedTagRegistry::default();
        shared.register("site_name", "Site", |_: &TagContext, _: &str| -> Result<String> {
            Ok("Acme".to_string())
        });

        assert!(shared.exists("site_name"));
        assert_eq!(
            shared
                .expand("Welcome to {site_name}", &TagContext::new())
                .unwrap(),
            "Welcome to Acme"
        );
        assert_eq!(
            shared.list(),
            vec![("site_name".to_string(), "Site".to_string())]
        );
    }

    #[test]
    fn test_concurrent_expansions_see_their_own_context() {
        let shared = SharedTagRegistry::default();
        shared.register("who", "", |ctx: &TagContext, tag: &str| -> Result<String> {
            Ok(ctx.require(tag)?.to_string())
        });

        let handles: Vec<_> = (0..8i64)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let ctx = TagContext::new().with("who", i);
                    shared.expand("{who}", &ctx).unwrap()
                })
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let expected: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_unregister_through_clone() {
        let shared = SharedTagRegistry::default();
        let other = shared.clone();
        shared.register("a", "", |_: &TagContext, _: &str| -> Result<String> {
            Ok("A".to_string())
        });

        other.unregister("a");
        assert!(!shared.exists("a"));
        assert_eq!(shared.with_registry(|r| r.len()), 0);
    }
}
