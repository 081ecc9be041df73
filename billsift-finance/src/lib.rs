//! billsift-finance: vendor directory, categorizer, CSV export and the statement pipeline

pub mod categorizer;
pub mod directory;
pub mod export;
pub mod pipeline;
pub mod sqlite_store;

pub use categorizer::{categorize, CategorizeSummary};
pub use directory::{MemoryDirectory, StoreError, VendorDirectory, VendorMap};
pub use export::{export_csv, write_csv};
pub use pipeline::{process_statement, PipelineOptions};
pub use sqlite_store::SqliteVendorStore;
