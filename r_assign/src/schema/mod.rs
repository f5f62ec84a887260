//! Ordered mapping from output key to transform.
//!
//! A [`Schema`] fixes the keys a transform-assign call may produce and the
//! order in which their transforms run. Schemas are cheap to clone and may be
//! shared across threads.

mod builder;
mod decode;
mod entry;

pub use builder::SchemaBuilder;
pub use entry::SchemaEntry;

use std::fmt;

use indexmap::IndexMap;

/// Ordered set of schema entries keyed by output key.
#[derive(Clone, Default)]
pub struct Schema {
    entries: IndexMap<String, SchemaEntry>,
}

impl Schema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a schema fluently.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Insert or replace the entry for `key`.
    ///
    /// Replacing keeps the key's original position so iteration order stays
    /// stable. Returns the previous entry, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        entry: impl Into<SchemaEntry>,
    ) -> Option<SchemaEntry> {
        self.entries.insert(key.into(), entry.into())
    }

    /// Returns the entry stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SchemaEntry> {
        self.entries.get(key)
    }

    /// Returns `true` when `key` is part of the schema.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Schema keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, SchemaEntry> {
        self.entries.iter()
    }

    /// Number of keys in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the schema has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a String, &'a SchemaEntry);
    type IntoIter = indexmap::map::Iter<'a, String, SchemaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, E> FromIterator<(K, E)> for Schema
where
    K: Into<String>,
    E: Into<SchemaEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut schema = Self::new();
        for (key, entry) in iter {
            schema.insert(key, entry);
        }
        schema
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
