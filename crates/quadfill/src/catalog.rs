//! Artboard enumeration and ordering.
//!
//! The catalog is built fresh for every coordinator run and discarded
//! afterwards. Its entry order is the order shown to the user, and the
//! picker's returned index is resolved against the same entries, so the
//! ordering established here must survive end-to-end.

use std::rc::Rc;

use log::debug;

use crate::host::{Artboard, Document};

/// One catalog entry: an artboard and its name at scan time.
#[derive(Clone)]
pub struct CatalogEntry {
    name: String,
    artboard: Rc<dyn Artboard>,
}

impl CatalogEntry {
    /// The artboard name captured at scan time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying artboard reference.
    pub fn artboard(&self) -> Rc<dyn Artboard> {
        Rc::clone(&self.artboard)
    }
}

/// Deterministically ordered listing of a document's artboards.
pub struct ArtboardCatalog {
    entries: Vec<CatalogEntry>,
}

impl ArtboardCatalog {
    /// Scans the document and builds a name-sorted catalog.
    ///
    /// All artboards are included, regardless of page. Entries are ordered
    /// by name ascending in lexicographic byte order; the sort is stable, so
    /// artboards sharing a name keep their enumeration order.
    pub fn scan(document: &dyn Document) -> Self {
        let mut entries: Vec<CatalogEntry> = document
            .artboards()
            .into_iter()
            .map(|artboard| CatalogEntry {
                name: artboard.name(),
                artboard,
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(artboard_count = entries.len(); "Artboard catalog built");

        Self { entries }
    }

    /// The entry names, in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// The entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document had no artboards.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
