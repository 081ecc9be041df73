//! Per-bank statement layouts.

pub mod axis;
pub mod hdfc;
pub mod icici;
pub mod yes_bank;

use billsift_core::Bank;

use crate::layout::BankLayout;

/// Layout table, one entry per supported bank
pub fn layout_for(bank: Bank) -> &'static BankLayout {
    match bank {
        Bank::Hdfc => &hdfc::LAYOUT,
        Bank::Axis => &axis::LAYOUT,
        Bank::Icici => &icici::LAYOUT,
        Bank::YesBank => &yes_bank::LAYOUT,
    }
}
