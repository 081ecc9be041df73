//! ICICI credit card statement layout
//!
//! A ten-digit serial follows the date, and a reward-points column sits
//! between the vendor and the amount:
//!   12/06/2024 1029384756 AMAZON SELLER SERVICES 12 1,499.00
//!   15/06/2024 1029384799 REFUND FLIPKART 0 520.00 CR

use billsift_core::{Bank, Transaction};

use crate::error::ParseError;
use crate::layout::{BankLayout, MarkerCase, VendorSplit};

pub const LAYOUT: BankLayout = BankLayout {
    bank: Bank::Icici,
    time_probe: false,
    body_offset: 22,
    marker_case: MarkerCase::Insensitive,
    negate_credits: true,
    vendor_split: VendorSplit::SecondToLastWhitespace,
    strip_ref_no: false,
};

/// Parse ICICI statement text into transactions.
pub fn parse_icici_text(text: &str) -> Result<Vec<Transaction>, ParseError> {
    crate::registry::parse_with(&LAYOUT, text)
}
