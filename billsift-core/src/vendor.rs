//! Vendor directory records

use serde::{Deserialize, Serialize};

/// Category given to vendors the directory has not seen yet
pub const MISC_CATEGORY: &str = "Misc";

/// A row of the vendor directory, keyed by the raw statement text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorEntry {
    /// Raw vendor string as printed by the bank
    pub key: String,
    pub short_name: String,
    pub category: String,
    /// Bank id that first produced the key
    pub name_source: String,
}

impl VendorEntry {
    pub fn new(
        key: impl Into<String>,
        short_name: impl Into<String>,
        category: impl Into<String>,
        name_source: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            short_name: short_name.into(),
            category: category.into(),
            name_source: name_source.into(),
        }
    }

    /// Entry registered for a vendor seen for the first time
    pub fn misc(key: impl Into<String>, name_source: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(key.clone(), key, MISC_CATEGORY, name_source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    AlreadyExists,
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    NotFound,
    Deleted,
}
