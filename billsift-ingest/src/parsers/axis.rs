//! Axis Bank credit card statement layout
//!
//!   05/05/2024 SWIGGY BANGALORE - Ref No:998877 300.00 Cr
//!   08/05/2024 BIGBASKET BANGALORE 1,845.60
//!
//! Credits are flagged but the amount is printed and kept as a positive number.

use billsift_core::{Bank, Transaction};

use crate::error::ParseError;
use crate::layout::{BankLayout, MarkerCase, VendorSplit, DATE_WIDTH};

pub const LAYOUT: BankLayout = BankLayout {
    bank: Bank::Axis,
    time_probe: false,
    body_offset: DATE_WIDTH + 1,
    marker_case: MarkerCase::Exact,
    negate_credits: false,
    vendor_split: VendorSplit::LastWhitespace,
    strip_ref_no: true,
};

/// Parse Axis statement text into transactions.
pub fn parse_axis_text(text: &str) -> Result<Vec<Transaction>, ParseError> {
    crate::registry::parse_with(&LAYOUT, text)
}
