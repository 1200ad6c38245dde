//! Ordered catalog of known version identifiers.
//!
//! Entries are opaque strings kept in the order the caller supplies them,
//! newest first. Position is the only notion of "newer" or "older" used by
//! range resolution; nothing here parses version numbers.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CatalogError;

/// Immutable, duplicate-free list of version strings ordered newest first.
///
/// # Examples
/// ```
/// use verexpr::VersionCatalog;
/// let catalog = VersionCatalog::new(["1.20.1", "1.20", "1.19.4"]).unwrap();
/// assert_eq!(catalog.latest(), Some("1.20.1"));
/// assert_eq!(catalog.index_of("1.19.4"), Some(2));
/// assert_eq!(catalog.index_of("1.19"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCatalog {
    entries: Vec<String>,
    index: HashMap<String, usize>,
}

impl VersionCatalog {
    /// Build a catalog from versions listed newest first.
    ///
    /// # Errors
    /// Returns [`CatalogError::Duplicate`] when a version appears twice.
    pub fn new<I, S>(versions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (position, version) in versions.into_iter().enumerate() {
            let version = version.into();
            if let Some(&first) = index.get(&version) {
                return Err(CatalogError::Duplicate {
                    version,
                    first,
                    second: position,
                });
            }
            index.insert(version.clone(), position);
            entries.push(version);
        }
        Ok(Self { entries, index })
    }

    /// The newest version, if the catalog is not empty.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Position of `version` by exact match; `0` is the newest entry.
    #[must_use]
    pub fn index_of(&self, version: &str) -> Option<usize> {
        self.index.get(version).copied()
    }

    /// Whether `version` is an exact catalog entry.
    #[must_use]
    pub fn contains(&self, version: &str) -> bool {
        self.index.contains_key(version)
    }

    /// Entry at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Entries newest first, as stored.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Split `unit` at the longest entry `V` for which `unit` starts with
    /// `V-`, returning `V` and the text after the hyphen.
    ///
    /// Scans every entry, so the cost is linear in the catalog size.
    ///
    /// # Examples
    /// ```
    /// use verexpr::VersionCatalog;
    /// let catalog = VersionCatalog::new(["1.19.2-rc2", "1.19.2"]).unwrap();
    /// assert_eq!(
    ///     catalog.longest_prefix_range_start("1.19.2-rc2-1.19.2"),
    ///     Some(("1.19.2-rc2", "1.19.2"))
    /// );
    /// ```
    #[must_use]
    pub fn longest_prefix_range_start<'u>(&self, unit: &'u str) -> Option<(&str, &'u str)> {
        self.entries
            .iter()
            .filter_map(|entry| {
                unit.strip_prefix(entry.as_str())
                    .and_then(|rest| rest.strip_prefix('-'))
                    .map(|rest| (entry.as_str(), rest))
            })
            .max_by_key(|(entry, _)| entry.len())
    }
}

impl TryFrom<Vec<String>> for VersionCatalog {
    type Error = CatalogError;

    fn try_from(versions: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(versions)
    }
}

impl<'a> IntoIterator for &'a VersionCatalog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for VersionCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VersionCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<String>::deserialize(deserializer)?;
        Self::new(entries).map_err(serde::de::Error::custom)
    }
}
