// ============================================================================
// sizer-core/src/catalog.rs
// ============================================================================
//
// RESOURCE CATALOG: Record Store Abstraction and JSON Implementation
//
// This module defines the contract with the external record store that maps
// integer resource IDs to filesystem paths. The `ResourceStore` trait is the
// dependency injection seam: the reporter only needs a keyed lookup, so
// consumers can supply a catalog file, an in-memory map, or their own backend.
//
// AI-ASSISTANT-INFO: Resource record store trait and JSON catalog

use crate::error::{CoreError, CoreResult};

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A single resource record as stored in the external catalog.
///
/// Only the fields relevant to size reporting are modelled: the numeric ID
/// and `content`, a string holding the absolute or relative path of the
/// backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: u64,
    pub content: String,
}

/// Read-only lookup of resource records by integer ID.
///
/// `Ok(None)` means the store answered and no record exists; `Err` is
/// reserved for store-level failures (e.g. an unreadable backend).
pub trait ResourceStore {
    fn get(&self, id: u64) -> CoreResult<Option<ResourceRecord>>;
}

/// Resource catalog backed by a JSON file.
///
/// The file holds a flat JSON array of records. Records are indexed by ID at
/// load time; when the same ID appears more than once the last record wins,
/// matching the last-write semantics of a flat export. The catalog is
/// immutable after loading, so lookups are safe from concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    records: HashMap<u64, ResourceRecord>,
}

impl JsonCatalog {
    /// Loads a catalog from a JSON file containing an array of records.
    ///
    /// An unreadable or malformed catalog file is a `CoreError::Catalog`,
    /// distinct from the reporter's "Resource not found" rejection.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            CoreError::Catalog(format!(
                "failed to read catalog '{}': {}",
                path.display(),
                e
            ))
        })?;
        let records: Vec<ResourceRecord> = serde_json::from_str(&data).map_err(|e| {
            CoreError::Catalog(format!(
                "failed to parse catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "loaded {} record(s) from catalog '{}'",
            records.len(),
            path.display()
        );

        Ok(Self {
            records: records.into_iter().map(|r| (r.id, r)).collect(),
        })
    }

    /// Number of distinct records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ResourceStore for JsonCatalog {
    fn get(&self, id: u64) -> CoreResult<Option<ResourceRecord>> {
        Ok(self.records.get(&id).cloned())
    }
}

/// In-memory store for embedders and tests.
impl ResourceStore for HashMap<u64, ResourceRecord> {
    fn get(&self, id: u64) -> CoreResult<Option<ResourceRecord>> {
        Ok(HashMap::get(self, &id).cloned())
    }
}
