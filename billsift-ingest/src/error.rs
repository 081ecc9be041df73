use billsift_core::{Bank, UnsupportedBankError};
use std::path::PathBuf;
use thiserror::Error;

/// Why a single line could not be tokenized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineFault {
    #[error("line too short for the {0} field")]
    TooShort(&'static str),
    #[error("invalid date {0:?}")]
    Date(String),
    #[error("no whitespace between vendor and amount")]
    MissingBoundary,
    #[error("empty vendor")]
    EmptyVendor,
    #[error("invalid amount {0:?}")]
    Amount(String),
}

/// A statement line that violates its bank's layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{bank} line {line_no}: {fault}: {line:?}")]
pub struct ParseError {
    pub bank: Bank,
    /// 1-based, counting blank lines
    pub line_no: usize,
    pub line: String,
    #[source]
    pub fault: LineFault,
}

#[derive(Debug, Error)]
pub enum StatementError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    UnsupportedBank(#[from] UnsupportedBankError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
