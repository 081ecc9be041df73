//! Bank registry: resolve a bank id, read the statement, tokenize every non-blank line.

use billsift_core::{Bank, Transaction};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::error::{ParseError, StatementError};
use crate::layout::BankLayout;
use crate::parsers::{axis, hdfc, icici, layout_for, yes_bank};

/// Result of a lenient parse: everything that tokenized, plus every line that did not
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub transactions: Vec<Transaction>,
    pub faults: Vec<ParseError>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Identifiers accepted by `parse_statement`, in registry order
pub fn supported_banks() -> Vec<&'static str> {
    Bank::supported_ids()
}

/// Non-blank lines, trimmed, with their 1-based line numbers
fn statement_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Tokenize every line with `layout`, stopping at the first malformed one.
pub fn parse_with(layout: &BankLayout, text: &str) -> Result<Vec<Transaction>, ParseError> {
    let txns = statement_lines(text)
        .map(|(line_no, line)| layout.tokenize_at(line_no, line))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("{}: tokenized {} lines", layout.bank, txns.len());
    Ok(txns)
}

/// Parse statement text for `bank`. All-or-nothing.
pub fn parse_text(bank: Bank, text: &str) -> Result<Vec<Transaction>, ParseError> {
    match bank {
        Bank::Hdfc => hdfc::parse_hdfc_text(text),
        Bank::Axis => axis::parse_axis_text(text),
        Bank::Icici => icici::parse_icici_text(text),
        Bank::YesBank => yes_bank::parse_yes_bank_text(text),
    }
}

/// Parse statement text for `bank`, keeping every line that tokenizes.
pub fn parse_lenient(bank: Bank, text: &str) -> ParseReport {
    let layout = layout_for(bank);
    let mut report = ParseReport::default();

    for (line_no, line) in statement_lines(text) {
        match layout.tokenize_at(line_no, line) {
            Ok(txn) => report.transactions.push(txn),
            Err(e) => {
                warn!("skipping {e}");
                report.faults.push(e);
            }
        }
    }

    report
}

fn read_statement(bank_id: &str, path: &Path) -> Result<(Bank, String), StatementError> {
    if !path.exists() {
        return Err(StatementError::FileNotFound(path.to_path_buf()));
    }
    let bank: Bank = bank_id.parse()?;
    let text = fs::read_to_string(path).map_err(|source| StatementError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((bank, text))
}

/// Parse a statement file. `bank_id` is case-insensitive.
pub fn parse_statement(
    bank_id: &str,
    path: impl AsRef<Path>,
) -> Result<Vec<Transaction>, StatementError> {
    let path = path.as_ref();
    let (bank, text) = read_statement(bank_id, path)?;
    let txns = parse_text(bank, &text)?;
    info!("{}: parsed {} transactions from {}", bank, txns.len(), path.display());
    Ok(txns)
}

/// Like `parse_statement`, but malformed lines are collected instead of aborting.
pub fn parse_statement_lenient(
    bank_id: &str,
    path: impl AsRef<Path>,
) -> Result<ParseReport, StatementError> {
    let path = path.as_ref();
    let (bank, text) = read_statement(bank_id, path)?;
    let report = parse_lenient(bank, &text);
    info!(
        "{}: parsed {} transactions from {} ({} skipped)",
        bank,
        report.transactions.len(),
        path.display(),
        report.faults.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LineFault;
    use crate::parsers::fixtures;

    #[test]
    fn test_blank_lines_do_not_change_count() {
        let with_blanks = fixtures::read("hdfc.txt");
        let stripped: String = with_blanks
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| format!("{l}\n"))
            .collect();

        let a = parse_text(Bank::Hdfc, &with_blanks).unwrap();
        let b = parse_text(Bank::Hdfc, &stripped).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_line_aborts_whole_file() {
        let text = "01/04/2024 AMAZON 10.00\n\nnot a statement line\n02/04/2024 FLIPKART 20.00\n";
        let err = parse_text(Bank::Hdfc, text).unwrap_err();
        assert_eq!(err.line_no, 3);
        assert_eq!(err.line, "not a statement line");
        assert!(matches!(err.fault, LineFault::Date(_)));
    }

    #[test]
    fn test_lenient_keeps_good_lines() {
        let text = "01/04/2024 AMAZON 10.00\n\nnot a statement line\n02/04/2024 FLIPKART 20.00\n";
        let report = parse_lenient(Bank::Hdfc, text);
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.faults.len(), 1);
        assert_eq!(report.faults[0].line_no, 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_parse_statement_by_id() {
        let txns = parse_statement("AXIS", fixtures::path("axis.txt")).unwrap();
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].source, "Axis Bank");
    }

    #[test]
    fn test_unknown_bank() {
        let err = parse_statement("sbi", fixtures::path("axis.txt")).unwrap_err();
        match err {
            StatementError::UnsupportedBank(e) => assert_eq!(e.supported, supported_banks()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_statement("hdfc", fixtures::path("missing.txt")).unwrap_err();
        assert!(matches!(err, StatementError::FileNotFound(_)));
    }

    #[test]
    fn test_every_fixture_parses_with_its_bank() {
        for (bank, file) in [
            (Bank::Hdfc, "hdfc.txt"),
            (Bank::Axis, "axis.txt"),
            (Bank::Icici, "icici.txt"),
            (Bank::YesBank, "yes.txt"),
        ] {
            let report = parse_statement_lenient(bank.id(), fixtures::path(file)).unwrap();
            assert!(report.is_clean(), "{file}: {:?}", report.faults);
            assert!(!report.transactions.is_empty());
        }
    }
}
