//! HDFC credit card statement layout
//!
//! Rows carry an optional timestamp after the date:
//!   01/04/2024 10:15:30 AMAZON PAY INDIA 1,250.00
//!   05/04/2024 PETRO SURCHARGE WAIVER 12.40 Cr

use billsift_core::{Bank, Transaction};

use crate::error::ParseError;
use crate::layout::{BankLayout, MarkerCase, VendorSplit, DATE_WIDTH};

pub const LAYOUT: BankLayout = BankLayout {
    bank: Bank::Hdfc,
    time_probe: true,
    body_offset: DATE_WIDTH + 1,
    marker_case: MarkerCase::Exact,
    negate_credits: true,
    vendor_split: VendorSplit::LastWhitespace,
    strip_ref_no: false,
};

/// Parse HDFC statement text into transactions.
pub fn parse_hdfc_text(text: &str) -> Result<Vec<Transaction>, ParseError> {
    crate::registry::parse_with(&LAYOUT, text)
}
