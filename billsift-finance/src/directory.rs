//! Vendor directory interface, passed explicitly to whoever needs it.

use billsift_core::{AddOutcome, DeleteOutcome, VendorEntry};
use std::collections::HashMap;
use thiserror::Error;

/// Raw vendor text -> entry
pub type VendorMap = HashMap<String, VendorEntry>;

/// Vendor directory access fault
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("vendor store: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("vendor store unavailable: {0}")]
    Unavailable(String),
}

pub trait VendorDirectory {
    fn list(&self) -> Result<VendorMap, StoreError>;

    /// Insert unless `key` is already present.
    fn add(
        &mut self,
        key: &str,
        short_name: &str,
        category: &str,
        name_source: &str,
    ) -> Result<AddOutcome, StoreError>;

    fn delete(&mut self, key: &str) -> Result<DeleteOutcome, StoreError>;
}

/// Directory kept in memory; used for dry runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    entries: VendorMap,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = VendorEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.key.clone(), e)).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&VendorEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VendorDirectory for MemoryDirectory {
    fn list(&self) -> Result<VendorMap, StoreError> {
        Ok(self.entries.clone())
    }

    fn add(
        &mut self,
        key: &str,
        short_name: &str,
        category: &str,
        name_source: &str,
    ) -> Result<AddOutcome, StoreError> {
        if self.entries.contains_key(key) {
            return Ok(AddOutcome::AlreadyExists);
        }
        self.entries.insert(
            key.to_string(),
            VendorEntry::new(key, short_name, category, name_source),
        );
        Ok(AddOutcome::Created)
    }

    fn delete(&mut self, key: &str) -> Result<DeleteOutcome, StoreError> {
        Ok(match self.entries.remove(key) {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::NotFound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_insert_if_absent() {
        let mut dir = MemoryDirectory::new();
        assert_eq!(dir.add("ZOMATO LIMITED GURGAON", "Zomato", "Dining", "hdfc").unwrap(), AddOutcome::Created);
        assert_eq!(
            dir.add("ZOMATO LIMITED GURGAON", "Other", "Misc", "axis").unwrap(),
            AddOutcome::AlreadyExists
        );
        let entry = dir.get("ZOMATO LIMITED GURGAON").unwrap();
        assert_eq!(entry.short_name, "Zomato");
        assert_eq!(entry.name_source, "hdfc");
    }

    #[test]
    fn test_delete() {
        let mut dir = MemoryDirectory::with_entries([VendorEntry::misc("X", "hdfc")]);
        assert_eq!(dir.delete("X").unwrap(), DeleteOutcome::Deleted);
        assert_eq!(dir.delete("X").unwrap(), DeleteOutcome::NotFound);
        assert!(dir.is_empty());
    }
}
