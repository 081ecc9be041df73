//! billsift-core: domain types shared by the statement parsers, the vendor directory and the CLI

pub mod bank;
pub mod outcome;
pub mod transaction;
pub mod vendor;

pub use bank::{Bank, UnsupportedBankError};
pub use outcome::{Outcome, OutcomeKind};
pub use transaction::Transaction;
pub use vendor::{AddOutcome, DeleteOutcome, VendorEntry, MISC_CATEGORY};
