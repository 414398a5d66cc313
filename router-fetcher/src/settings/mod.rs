//! The settings source consumed by the client.
//!
//! Router connection settings are read through the [`Settings`] trait rather
//! than from a hardcoded location, so the caller decides where its
//! configuration lives. The trait is deliberately narrow: a synchronous
//! key-value lookup over JSON values, queried once per client instance.

pub(crate) mod json_file;

pub use json_file::JsonFileSettings;

use serde_json::{Map, Value};

/// A key-value settings source.
///
/// Implementations must be cheap to query; the client reads the router
/// configuration entry at most once per instance, lazily, at the first
/// operation.
pub trait Settings: Send + Sync {
    /// Looks up a top-level settings entry. Returns `None` when the entry is
    /// absent.
    fn get(&self, key: &str) -> Option<Value>;
}

impl<T: Settings + ?Sized> Settings for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
}

/// An in-memory [`Settings`] source backed by a JSON object.
///
/// Useful for callers that already hold their configuration, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    entries: Map<String, Value>,
}

impl StaticSettings {
    /// Constructs a source serving the given entries.
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Value)> for StaticSettings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Settings for StaticSettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }
}
