//! The component catalog and its queries.
//!
//! A [`Catalog`] is an ordered, immutable collection of [`ComponentRecord`]s.
//! It is built once and then only read, so it can be shared behind an `Arc`
//! without locking.
//!
//! # Queries
//!
//! - [`Catalog::get_by_id`] — exact, case-sensitive id lookup
//! - [`Catalog::get_by_category`] — all records in one [`Category`]
//! - [`Catalog::search`] — case-insensitive substring search
//!
//! Every query returns records in catalog insertion order.
//!
//! # Example
//!
//! ```
//! use ui_catalog_mcp::catalog::{Catalog, Category, ComponentRecord};
//!
//! let catalog = Catalog::new(vec![
//!     ComponentRecord::new("btn-1", "Button", Category::FormInputs, "A pressable control"),
//!     ComponentRecord::new("table-1", "Table", Category::DataDisplay, "Tabular data display"),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.search("data").len(), 1);
//! assert!(catalog.get_by_id("missing").is_none());
//! ```

pub mod builtin;
mod category;
mod record;

pub use category::Category;
pub use record::{ComponentRecord, ComponentSummary, ExampleDescriptor, PropDescriptor};

use indexmap::IndexMap;

use crate::error::CatalogError;

/// Which fields [`Catalog::search_with`] matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Also match the query against record ids.
    pub match_id: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { match_id: true }
    }
}

/// Immutable, insertion-ordered set of component records keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: IndexMap<String, ComponentRecord>,
}

impl Catalog {
    /// Builds a catalog from records in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records share an id.
    pub fn new(records: Vec<ComponentRecord>) -> Result<Self, CatalogError> {
        let mut index = IndexMap::with_capacity(records.len());
        for record in records {
            if index.contains_key(&record.id) {
                return Err(CatalogError::DuplicateId { id: record.id });
            }
            index.insert(record.id.clone(), record);
        }
        Ok(Self { records: index })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.records.values()
    }

    /// Looks up a record by exact id.
    ///
    /// Returns `None` when no record has this id.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&ComponentRecord> {
        self.records.get(id)
    }

    /// Returns every record in `category`, in insertion order.
    #[must_use]
    pub fn get_by_category(&self, category: Category) -> Vec<&ComponentRecord> {
        self.iter().filter(|r| r.category == category).collect()
    }

    /// Searches names, descriptions and ids with the default options.
    ///
    /// See [`Catalog::search_with`].
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ComponentRecord> {
        self.search_with(query, SearchOptions::default())
    }

    /// Case-insensitive substring search.
    ///
    /// The query is trimmed first. An empty or whitespace-only query matches
    /// nothing. A record matches if the query occurs in its name, its
    /// description, or (when `options.match_id` is set) its id.
    #[must_use]
    pub fn search_with(&self, query: &str, options: SearchOptions) -> Vec<&ComponentRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
                    || (options.match_id && r.id.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Returns each category with its record count, in [`Category::ALL`] order.
    ///
    /// Categories without records are included with a count of zero.
    #[must_use]
    pub fn categories(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.iter().filter(|r| r.category == c).count()))
            .collect()
    }

    /// Returns `(owner id, referenced id)` for each sub-component reference
    /// that names no record in this catalog.
    #[must_use]
    pub fn dangling_sub_components(&self) -> Vec<(&str, &str)> {
        let records = &self.records;
        self.iter()
            .flat_map(move |r| {
                r.sub_components
                    .iter()
                    .flatten()
                    .filter(move |sub| !records.contains_key(sub.as_str()))
                    .map(move |sub| (r.id.as_str(), sub.as_str()))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ComponentRecord;
    type IntoIter = indexmap::map::Values<'a, String, ComponentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
