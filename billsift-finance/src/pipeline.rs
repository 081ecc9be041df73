//! Statement pipeline: parse -> categorize -> export.
//!
//! Every failure is reported once as an error `Outcome`; nothing is raised to the caller.

use billsift_core::{Bank, Outcome, Transaction};
use billsift_ingest::{parse_statement, parse_statement_lenient, ParseError, StatementError};
use log::{error, warn};
use std::path::{Path, PathBuf};

use crate::categorizer::categorize;
use crate::directory::VendorDirectory;
use crate::export::export_csv;

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Write the categorized list here; `None` skips the export
    pub export_path: Option<PathBuf>,
    /// Skip malformed lines instead of failing the whole statement
    pub keep_going: bool,
}

#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub outcome: Outcome,
    /// Empty unless the run succeeded
    pub transactions: Vec<Transaction>,
    /// Lines skipped in keep-going mode
    pub skipped: Vec<ParseError>,
}

impl PipelineRun {
    /// A run that stopped before producing anything
    pub fn failed(outcome: Outcome) -> Self {
        error!("{}", outcome.message);
        Self { outcome, transactions: Vec::new(), skipped: Vec::new() }
    }
}

fn statement_failure(err: StatementError) -> Outcome {
    match err {
        StatementError::FileNotFound(_) => {
            Outcome::error("File not found. Please check the file path and try again.")
        }
        StatementError::UnsupportedBank(e) => Outcome::error(format!(
            "Bank not supported. Supported banks: {}",
            e.supported.join(", ")
        )),
        other => Outcome::error(format!("An error occurred while parsing the file: {other}")),
    }
}

/// Parse `file` as a `bank_id` statement, categorize it against `directory`, and export it.
pub fn process_statement<D: VendorDirectory + ?Sized>(
    file: &Path,
    bank_id: &str,
    directory: &mut D,
    options: &PipelineOptions,
) -> PipelineRun {
    let parsed = if options.keep_going {
        parse_statement_lenient(bank_id, file).map(|r| (r.transactions, r.faults))
    } else {
        parse_statement(bank_id, file).map(|t| (t, Vec::new()))
    };
    let (mut transactions, skipped) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return PipelineRun::failed(statement_failure(e)),
    };

    // parse_statement has already validated the id
    let bank: Bank = match bank_id.parse() {
        Ok(bank) => bank,
        Err(e) => return PipelineRun::failed(statement_failure(e.into())),
    };

    if let Err(e) = categorize(&mut transactions, directory, bank) {
        return PipelineRun::failed(Outcome::error(format!(
            "An error occurred while accessing the vendor directory: {e}"
        )));
    }

    if let Some(out) = &options.export_path {
        if let Err(e) = export_csv(&transactions, out) {
            return PipelineRun::failed(Outcome::error(format!(
                "An error occurred while exporting transactions: {e:#}"
            )));
        }
    }

    let mut message = format!("{} transactions parsed successfully.", transactions.len());
    if !skipped.is_empty() {
        warn!("{} malformed lines skipped", skipped.len());
        message.push_str(&format!(" {} malformed lines skipped.", skipped.len()));
    }

    PipelineRun {
        outcome: Outcome::success(message),
        transactions,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{MemoryDirectory, StoreError, VendorMap};
    use billsift_core::{AddOutcome, DeleteOutcome, OutcomeKind};
    use std::fs;

    #[test]
    fn test_missing_file_is_an_error_outcome() {
        let mut dir = MemoryDirectory::new();
        let run = process_statement(
            Path::new("/nonexistent/statement.txt"),
            "hdfc",
            &mut dir,
            &PipelineOptions::default(),
        );
        assert_eq!(run.outcome.kind, OutcomeKind::Error);
        assert!(run.outcome.message.starts_with("File not found"));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_unsupported_bank_lists_supported() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("bill.txt");
        fs::write(&file, "01/04/2024 AMAZON 10.00\n").unwrap();

        let mut dir = MemoryDirectory::new();
        let run = process_statement(&file, "sbi", &mut dir, &PipelineOptions::default());
        assert!(run.outcome.is_error());
        assert_eq!(
            run.outcome.message,
            "Bank not supported. Supported banks: hdfc, axis, icici, yes"
        );
    }

    #[test]
    fn test_malformed_line_fails_without_partial_results() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("bill.txt");
        fs::write(&file, "01/04/2024 AMAZON 10.00\nbroken\n").unwrap();

        let mut dir = MemoryDirectory::new();
        let run = process_statement(&file, "hdfc", &mut dir, &PipelineOptions::default());
        assert!(run.outcome.is_error());
        assert!(run.outcome.message.contains("line 2"));
        assert!(run.transactions.is_empty());
        // nothing was categorized, so nothing was registered
        assert!(dir.is_empty());
    }

    #[test]
    fn test_keep_going_reports_skips() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("bill.txt");
        fs::write(&file, "01/04/2024 AMAZON 10.00\nbroken\n").unwrap();

        let mut dir = MemoryDirectory::new();
        let opts = PipelineOptions { keep_going: true, ..Default::default() };
        let run = process_statement(&file, "hdfc", &mut dir, &opts);
        assert_eq!(run.outcome.kind, OutcomeKind::Success);
        assert_eq!(run.transactions.len(), 1);
        assert_eq!(run.skipped.len(), 1);
        assert!(run.outcome.message.contains("1 malformed lines skipped"));
    }

    struct LockedDirectory;

    impl VendorDirectory for LockedDirectory {
        fn list(&self) -> Result<VendorMap, StoreError> {
            Err(StoreError::Unavailable("locked".into()))
        }

        fn add(&mut self, _: &str, _: &str, _: &str, _: &str) -> Result<AddOutcome, StoreError> {
            Err(StoreError::Unavailable("locked".into()))
        }

        fn delete(&mut self, _: &str) -> Result<DeleteOutcome, StoreError> {
            Err(StoreError::Unavailable("locked".into()))
        }
    }

    #[test]
    fn test_store_fault_stops_before_export() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("bill.txt");
        fs::write(&file, "01/04/2024 AMAZON 10.00\n").unwrap();
        let out = tmp.path().join("transactions.csv");

        let opts = PipelineOptions { export_path: Some(out.clone()), keep_going: false };
        let run = process_statement(&file, "hdfc", &mut LockedDirectory, &opts);
        assert!(run.outcome.is_error());
        assert_eq!(
            run.outcome.message,
            "An error occurred while accessing the vendor directory: vendor store unavailable: locked"
        );
        assert!(run.transactions.is_empty());
        assert!(!out.exists());
    }
}
