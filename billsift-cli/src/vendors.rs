//! Vendor directory commands. Store faults come back as error outcomes.

use billsift_core::{Outcome, VendorEntry};
use billsift_finance::{MemoryDirectory, SqliteVendorStore, VendorDirectory};
use log::debug;
use std::path::Path;

pub fn open_store(path: &Path) -> Result<SqliteVendorStore, Outcome> {
    debug!("vendor store {}", path.display());
    SqliteVendorStore::open(path).map_err(|e| {
        Outcome::error(format!(
            "An error occurred while opening the vendor directory {}: {e}",
            path.display()
        ))
    })
}

pub fn init(store: &SqliteVendorStore, path: &Path) -> Outcome {
    let summary = store.init().and_then(|()| Ok((store.tables()?, store.count()?)));
    match summary {
        Ok((tables, count)) => Outcome::success(format!(
            "Tables initialized in {}: {} ({count} vendors)",
            path.display(),
            tables.join(", ")
        )),
        Err(e) => Outcome::error(format!(
            "An error occurred while initializing the vendor directory: {e}"
        )),
    }
}

/// Every vendor, ordered by key
pub fn fetch_sorted<D: VendorDirectory + ?Sized>(dir: &D) -> Result<Vec<VendorEntry>, Outcome> {
    let mut vendors: Vec<_> = dir
        .list()
        .map_err(|e| Outcome::error(format!("An error occurred while fetching vendors: {e}")))?
        .into_values()
        .collect();
    vendors.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(vendors)
}

/// In-memory copy of the directory for dry runs
pub fn snapshot<D: VendorDirectory + ?Sized>(dir: &D) -> Result<MemoryDirectory, Outcome> {
    Ok(MemoryDirectory::with_entries(fetch_sorted(dir)?))
}

pub fn add<D: VendorDirectory + ?Sized>(
    dir: &mut D,
    key: &str,
    short_name: &str,
    category: &str,
    source: &str,
) -> Outcome {
    match dir.add(key, short_name, category, source) {
        Ok(o) => Outcome::from_add(key, o),
        Err(e) => Outcome::error(format!("An error occurred while adding the vendor: {e}")),
    }
}

pub fn delete<D: VendorDirectory + ?Sized>(dir: &mut D, key: &str) -> Outcome {
    match dir.delete(key) {
        Ok(o) => Outcome::from_delete(key, o),
        Err(e) => Outcome::error(format!("An error occurred while deleting the vendor: {e}")),
    }
}
