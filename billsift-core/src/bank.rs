//! Issuing banks with a known statement layout

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Banks whose statement text dumps can be parsed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Bank {
    #[serde(rename = "hdfc")]
    Hdfc,
    #[serde(rename = "axis")]
    Axis,
    #[serde(rename = "icici")]
    Icici,
    #[serde(rename = "yes")]
    YesBank,
}

impl Bank {
    /// Registry order
    pub const ALL: [Bank; 4] = [Bank::Hdfc, Bank::Axis, Bank::Icici, Bank::YesBank];

    /// Lowercase identifier accepted on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Bank::Hdfc => "hdfc",
            Bank::Axis => "axis",
            Bank::Icici => "icici",
            Bank::YesBank => "yes",
        }
    }

    /// Label written to `Transaction::source`
    pub fn label(&self) -> &'static str {
        match self {
            Bank::Hdfc => "HDFC",
            Bank::Axis => "Axis Bank",
            Bank::Icici => "ICICI",
            Bank::YesBank => "Yes Bank",
        }
    }

    /// Identifiers of every supported bank
    pub fn supported_ids() -> Vec<&'static str> {
        Self::ALL.iter().map(Bank::id).collect()
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raised when a bank identifier has no registered layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bank not supported: {requested:?} (supported banks: {})", .supported.join(", "))]
pub struct UnsupportedBankError {
    pub requested: String,
    pub supported: Vec<&'static str>,
}

impl FromStr for Bank {
    type Err = UnsupportedBankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Bank::ALL
            .into_iter()
            .find(|b| b.id() == wanted)
            .ok_or_else(|| UnsupportedBankError {
                requested: s.to_string(),
                supported: Bank::supported_ids(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("HDFC".parse::<Bank>().unwrap(), Bank::Hdfc);
        assert_eq!(" Yes ".parse::<Bank>().unwrap(), Bank::YesBank);
        assert_eq!("icici".parse::<Bank>().unwrap(), Bank::Icici);
    }

    #[test]
    fn test_unknown_bank_lists_supported() {
        let err = "sbi".parse::<Bank>().unwrap_err();
        assert_eq!(err.requested, "sbi");
        assert_eq!(err.supported, vec!["hdfc", "axis", "icici", "yes"]);
        assert!(err.to_string().contains("hdfc, axis, icici, yes"));
    }

    #[test]
    fn test_serde_uses_ids() {
        assert_eq!(serde_json::to_string(&Bank::YesBank).unwrap(), "\"yes\"");
        let b: Bank = serde_json::from_str("\"axis\"").unwrap();
        assert_eq!(b, Bank::Axis);
    }
}
