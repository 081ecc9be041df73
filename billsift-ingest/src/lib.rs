//! billsift-ingest: fixed-layout statement line tokenizer and bank-specific layouts.

pub mod error;
pub mod layout;
pub mod parsers;
pub mod registry;

pub use error::{LineFault, ParseError, StatementError};
pub use layout::{BankLayout, MarkerCase, VendorSplit};
pub use registry::{
    parse_lenient, parse_statement, parse_statement_lenient, parse_text, supported_banks,
    ParseReport,
};
