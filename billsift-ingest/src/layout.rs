//! Layout-driven tokenizer for single-line statement rows.
//!
//! Every supported bank prints one transaction per line:
//!   DD/MM/YYYY [HH:MM:SS] <vendor text> [<extra column>] <amount>[ Cr]
//!
//! The banks differ only in offsets and a handful of flags, which live in a
//! `BankLayout` record per bank (see `crate::parsers`). Offsets and widths
//! count characters, not bytes.

use billsift_core::{Bank, Transaction};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{LineFault, ParseError};

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_WIDTH: usize = 10;
pub const TIME_WIDTH: usize = 8;

const CREDIT_MARKER: &str = "Cr";
/// Marker plus the separator in front of it
const CREDIT_SUFFIX_WIDTH: usize = 3;
const REF_NO_MARKER: &str = " - Ref No:";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// How the trailing credit marker is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCase {
    Exact,
    Insensitive,
}

/// Which whitespace run ends the vendor text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorSplit {
    /// `<vendor> <amount>`
    LastWhitespace,
    /// `<vendor> <column> <amount>`; the middle column is dropped
    SecondToLastWhitespace,
}

/// Positional rules for one bank's statement lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankLayout {
    pub bank: Bank,
    /// Probe for `HH:MM:SS` right after the date
    pub time_probe: bool,
    /// Character column where the vendor text starts on date-only lines
    pub body_offset: usize,
    pub marker_case: MarkerCase,
    /// Negate the amount when the credit marker is present
    pub negate_credits: bool,
    pub vendor_split: VendorSplit,
    /// Truncate the vendor at `" - Ref No:"`
    pub strip_ref_no: bool,
}

impl BankLayout {
    /// Tokenize one trimmed, non-blank line.
    pub fn tokenize(&self, line: &str) -> Result<Transaction, LineFault> {
        let (date, time, body) = self.split_date(line)?;
        let (body, credit) = self.strip_credit_marker(body);
        let (vendor, amount_text) = self.split_vendor_amount(body)?;

        let vendor = self.clean_vendor(vendor);
        if vendor.is_empty() {
            return Err(LineFault::EmptyVendor);
        }

        let mut amount = parse_amount(amount_text)?;
        if credit && self.negate_credits {
            amount = -amount;
        }

        Ok(Transaction::new(self.bank, date, time, vendor, amount, credit))
    }

    /// Tokenize a line, attaching its position to any failure.
    pub fn tokenize_at(&self, line_no: usize, line: &str) -> Result<Transaction, ParseError> {
        self.tokenize(line).map_err(|fault| ParseError {
            bank: self.bank,
            line_no,
            line: line.to_string(),
            fault,
        })
    }

    fn split_date<'a>(&self, line: &'a str) -> Result<(NaiveDate, bool, &'a str), LineFault> {
        if self.time_probe {
            if let Some(timed) = probe_timestamp(line) {
                return Ok(timed);
            }
        }

        let field = take_chars(line, DATE_WIDTH).ok_or(LineFault::TooShort("date"))?;
        let date = NaiveDate::parse_from_str(field, DATE_FORMAT)
            .map_err(|_| LineFault::Date(field.to_string()))?;
        let body = skip_chars(line, self.body_offset).ok_or(LineFault::TooShort("vendor"))?;
        Ok((date, false, body))
    }

    fn strip_credit_marker<'a>(&self, body: &'a str) -> (&'a str, bool) {
        let tail = body.len().checked_sub(CREDIT_MARKER.len()).and_then(|i| body.get(i..));
        let marked = match (tail, self.marker_case) {
            (Some(t), MarkerCase::Exact) => t == CREDIT_MARKER,
            (Some(t), MarkerCase::Insensitive) => t.eq_ignore_ascii_case(CREDIT_MARKER),
            (None, _) => false,
        };
        if !marked {
            return (body, false);
        }
        let keep = body.chars().count().saturating_sub(CREDIT_SUFFIX_WIDTH);
        (take_chars(body, keep).unwrap_or(""), true)
    }

    fn split_vendor_amount<'a>(&self, body: &'a str) -> Result<(&'a str, &'a str), LineFault> {
        let body = body.trim();
        let runs: Vec<_> = WHITESPACE.find_iter(body).collect();
        let last = runs.last().ok_or(LineFault::MissingBoundary)?;

        let vendor_end = match self.vendor_split {
            VendorSplit::LastWhitespace => last.start(),
            VendorSplit::SecondToLastWhitespace => runs
                .len()
                .checked_sub(2)
                .map(|i| runs[i].start())
                .ok_or(LineFault::MissingBoundary)?,
        };

        Ok((&body[..vendor_end], &body[last.end()..]))
    }

    fn clean_vendor<'a>(&self, vendor: &'a str) -> &'a str {
        let vendor = if self.strip_ref_no {
            vendor.find(REF_NO_MARKER).map_or(vendor, |i| &vendor[..i])
        } else {
            vendor
        };
        vendor.trim()
    }
}

/// `DD/MM/YYYY HH:MM:SS <body>`; `None` means the line is date-only.
fn probe_timestamp(line: &str) -> Option<(NaiveDate, bool, &str)> {
    let time_start = DATE_WIDTH + 1;
    let time_end = time_start + TIME_WIDTH;

    let probe = take_chars(skip_chars(line, time_start)?, TIME_WIDTH)?;
    NaiveTime::parse_from_str(probe, TIME_FORMAT).ok()?;

    let stamp = take_chars(line, time_end)?;
    let format = format!("{DATE_FORMAT} {TIME_FORMAT}");
    let when = NaiveDateTime::parse_from_str(stamp, &format).ok()?;
    let body = skip_chars(line, time_end + 1)?;
    Some((when.date(), true, body))
}

/// Byte index of character column `n`; `None` past the end of `s`.
fn char_boundary(s: &str, n: usize) -> Option<usize> {
    s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len())).nth(n)
}

/// The first `n` characters of `s`
fn take_chars(s: &str, n: usize) -> Option<&str> {
    char_boundary(s, n).map(|i| &s[..i])
}

/// `s` without its first `n` characters
fn skip_chars(s: &str, n: usize) -> Option<&str> {
    char_boundary(s, n).map(|i| &s[i..])
}

/// Strip thousands separators and parse.
pub fn parse_amount(text: &str) -> Result<Decimal, LineFault> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(cleaned.trim()).map_err(|_| LineFault::Amount(text.to_string()))
}
