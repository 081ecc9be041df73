//! Transaction records recovered from statement lines

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bank::Bank;

/// One statement line, parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Wall date as printed on the statement
    pub date: NaiveDate,
    /// True when the line carried a timestamp (the time value itself is not kept)
    pub time: bool,
    /// Merchant text exactly as extracted; never rewritten
    pub raw_vendor: String,
    /// Display name; starts as `raw_vendor`, replaced by the directory short name
    pub vendor: String,
    /// Positive = purchase, negative = credit (for banks that flip credits)
    pub amount: Decimal,
    /// Line ended with a credit marker
    pub credit: bool,
    /// Bank label
    pub source: String,
    /// Set by the categorizer
    pub category: Option<String>,
}

impl Transaction {
    pub fn new(
        bank: Bank,
        date: NaiveDate,
        time: bool,
        vendor: impl Into<String>,
        amount: Decimal,
        credit: bool,
    ) -> Self {
        let raw_vendor = vendor.into();
        Self {
            date,
            time,
            vendor: raw_vendor.clone(),
            raw_vendor,
            amount,
            credit,
            source: bank.label().to_string(),
            category: None,
        }
    }

    /// Returns true for refunds and reversals
    pub fn is_refund(&self) -> bool {
        self.credit || self.amount.is_sign_negative()
    }
}
