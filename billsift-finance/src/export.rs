//! CSV export of categorized transactions.
//!
//! Columns: date,category,amount,source,vendor. The time and credit flags are dropped.

use anyhow::{Context, Result};
use billsift_core::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const EXPORT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    date: String,
    category: &'a str,
    amount: Decimal,
    source: &'a str,
    vendor: &'a str,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            date: txn.date.format(EXPORT_DATE_FORMAT).to_string(),
            category: txn.category.as_deref().unwrap_or_default(),
            amount: txn.amount,
            source: &txn.source,
            vendor: &txn.vendor,
        }
    }
}

/// Write transactions as CSV (with header) to any writer.
pub fn write_csv<W: Write>(transactions: &[Transaction], out: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);
    for txn in transactions {
        wtr.serialize(ExportRow::from(txn))?;
    }
    if transactions.is_empty() {
        wtr.write_record(["date", "category", "amount", "source", "vendor"])?;
    }
    wtr.flush()?;
    Ok(transactions.len())
}

/// Write transactions to a CSV file, replacing it.
pub fn export_csv(transactions: &[Transaction], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let wtr = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    let n = write_csv(transactions, wtr).with_context(|| format!("write {}", path.display()))?;
    log::info!("exported {} transactions to {}", n, path.display());
    Ok(n)
}
