//! Key-value persistence boundary for Scopedoc session state.
//!
//! The merge engine persists a handful of named string values between
//! sessions: the assembled document and the tracking values that drive its
//! rebuild decisions. This crate decouples that from the actual storage
//! mechanism behind the [`ValueStore`] trait:
//!
//! - [`MemoryStore`]: mutex-guarded map, the default for tests and
//!   single-session use
//! - [`FileStore`]: one file per key under a root directory, best-effort
//! - [`NullStore`]: no-op implementation (never stores, never returns)
//!
//! Persistence is advisory for the engine: a store that loses or refuses
//! writes degrades to rebuilding from the template, never to an error.
//!
//! # Example
//!
//! ```
//! use scopedoc_store::{MemoryStore, ValueStore, keys};
//!
//! let store = MemoryStore::new();
//! store.set(keys::DOMAIN, "example.com");
//! assert_eq!(store.get(keys::DOMAIN), Some("example.com".to_owned()));
//! assert_eq!(store.get(keys::DOCUMENT), None);
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Well-known keys used by the document assembler.
pub mod keys {
    /// The last persisted assembled document (HTML).
    pub const DOCUMENT: &str = "scope_document";
    /// The subject domain the assets region was last built for.
    pub const DOMAIN: &str = "scope_domain";
    /// The tier key the rewards region was last rendered with.
    pub const TIER: &str = "reward_tier";
}

/// Named string storage.
///
/// Implementations are free to lose data (cache semantics); callers must
/// treat an absent value as "build fresh". `set` failures are swallowed by
/// the implementation and logged, never surfaced.
pub trait ValueStore: Send + Sync {
    /// Retrieve a value, `None` when absent.
    fn get(&self, name: &str) -> Option<String>;

    /// Store a value, overwriting any previous one.
    fn set(&self, name: &str, value: &str);
}

/// No-op [`ValueStore`] that never stores or returns data.
///
/// Use when persistence is disabled; every merge then starts from the
/// template.
pub struct NullStore;

impl ValueStore for NullStore {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }

    fn set(&self, _name: &str, _value: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_store_always_absent() {
        let store = NullStore;
        assert_eq!(store.get(keys::DOCUMENT), None);

        store.set(keys::DOCUMENT, "<p>hello</p>");
        assert_eq!(store.get(keys::DOCUMENT), None);
    }

    #[test]
    fn test_value_store_is_object_safe() {
        let store: Box<dyn ValueStore> = Box::new(NullStore);
        assert_eq!(store.get("anything"), None);
    }
}
