//! Yes Bank credit card statement layout
//!
//!   20/07/2024 MAKEMYTRIP NEW DELHI - Ref No:44556 8 6,200.00
//!   22/07/2024 MAKEMYTRIP NEW DELHI - Ref No:44590 0 1,100.00 Cr

use billsift_core::{Bank, Transaction};

use crate::error::ParseError;
use crate::layout::{BankLayout, MarkerCase, VendorSplit, DATE_WIDTH};

pub const LAYOUT: BankLayout = BankLayout {
    bank: Bank::YesBank,
    time_probe: false,
    body_offset: DATE_WIDTH + 1,
    marker_case: MarkerCase::Exact,
    negate_credits: false,
    vendor_split: VendorSplit::SecondToLastWhitespace,
    strip_ref_no: true,
};

/// Parse Yes Bank statement text into transactions.
pub fn parse_yes_bank_text(text: &str) -> Result<Vec<Transaction>, ParseError> {
    crate::registry::parse_with(&LAYOUT, text)
}
