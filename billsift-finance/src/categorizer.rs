//! Vendor categorizer: maps raw statement vendors to directory short names and categories.
//!
//! Lookups use `Transaction::raw_vendor`, so running the pass twice gives the same result.

use billsift_core::{AddOutcome, Bank, Transaction, MISC_CATEGORY};
use log::info;

use crate::directory::{StoreError, VendorDirectory};

/// Counts from one categorization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorizeSummary {
    /// Found in the directory
    pub matched: usize,
    /// Unknown vendors added as Misc
    pub registered: usize,
    /// Unknown at list time but already added earlier in this pass
    pub already_known: usize,
}

/// Categorize `transactions` in place, registering unseen vendors under `bank`.
///
/// The directory is listed once up front. A store fault aborts the pass.
pub fn categorize<D: VendorDirectory + ?Sized>(
    transactions: &mut [Transaction],
    directory: &mut D,
    bank: Bank,
) -> Result<CategorizeSummary, StoreError> {
    let vendors = directory.list()?;
    let mut summary = CategorizeSummary::default();

    for txn in transactions.iter_mut() {
        if let Some(entry) = vendors.get(&txn.raw_vendor) {
            txn.category = Some(entry.category.clone());
            txn.vendor = entry.short_name.clone();
            summary.matched += 1;
            continue;
        }

        txn.category = Some(MISC_CATEGORY.to_string());
        match directory.add(&txn.raw_vendor, &txn.raw_vendor, MISC_CATEGORY, bank.id())? {
            AddOutcome::Created => summary.registered += 1,
            AddOutcome::AlreadyExists => summary.already_known += 1,
        }
    }

    info!(
        "{}: {} matched, {} new vendors, {} repeats",
        bank, summary.matched, summary.registered, summary.already_known
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{MemoryDirectory, VendorMap};
    use billsift_core::{AddOutcome, DeleteOutcome, VendorEntry};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn txn(vendor: &str) -> Transaction {
        Transaction::new(
            Bank::Hdfc,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            false,
            vendor,
            Decimal::new(45650, 2),
            false,
        )
    }

    /// Records every `add` call
    #[derive(Default)]
    struct RecordingDirectory {
        inner: MemoryDirectory,
        adds: Vec<(String, String, String, String, AddOutcome)>,
    }

    impl VendorDirectory for RecordingDirectory {
        fn list(&self) -> Result<VendorMap, StoreError> {
            self.inner.list()
        }

        fn add(&mut self, key: &str, short_name: &str, category: &str, name_source: &str) -> Result<AddOutcome, StoreError> {
            let outcome = self.inner.add(key, short_name, category, name_source)?;
            self.adds.push((key.into(), short_name.into(), category.into(), name_source.into(), outcome));
            Ok(outcome)
        }

        fn delete(&mut self, key: &str) -> Result<DeleteOutcome, StoreError> {
            self.inner.delete(key)
        }
    }

    struct BrokenDirectory;

    impl VendorDirectory for BrokenDirectory {
        fn list(&self) -> Result<VendorMap, StoreError> {
            Ok(VendorMap::new())
        }

        fn add(&mut self, _: &str, _: &str, _: &str, _: &str) -> Result<AddOutcome, StoreError> {
            Err(StoreError::Unavailable("disk full".into()))
        }

        fn delete(&mut self, _: &str) -> Result<DeleteOutcome, StoreError> {
            Err(StoreError::Unavailable("disk full".into()))
        }
    }

    #[test]
    fn test_known_vendor_is_rewritten() {
        let mut dir = MemoryDirectory::with_entries([VendorEntry::new(
            "ZOMATO LIMITED GURGAON 20",
            "Zomato",
            "Dining",
            "hdfc",
        )]);
        let mut txns = vec![txn("ZOMATO LIMITED GURGAON 20")];

        let summary = categorize(&mut txns, &mut dir, Bank::Hdfc).unwrap();
        assert_eq!(summary.matched, 1);
        assert_eq!(txns[0].vendor, "Zomato");
        assert_eq!(txns[0].category.as_deref(), Some("Dining"));
        assert_eq!(txns[0].raw_vendor, "ZOMATO LIMITED GURGAON 20");
    }

    #[test]
    fn test_unknown_vendor_registered_once_as_misc() {
        let mut dir = RecordingDirectory::default();
        let mut txns = vec![txn("NEW SHOP KOCHI")];

        categorize(&mut txns, &mut dir, Bank::Hdfc).unwrap();
        assert_eq!(txns[0].category.as_deref(), Some(MISC_CATEGORY));
        assert_eq!(txns[0].vendor, "NEW SHOP KOCHI");
        assert_eq!(
            dir.adds,
            vec![(
                "NEW SHOP KOCHI".to_string(),
                "NEW SHOP KOCHI".to_string(),
                "Misc".to_string(),
                "hdfc".to_string(),
                AddOutcome::Created
            )]
        );
    }

    #[test]
    fn test_repeat_unknown_vendor_hits_already_exists() {
        let mut dir = RecordingDirectory::default();
        let mut txns = vec![txn("NEW SHOP KOCHI"), txn("NEW SHOP KOCHI")];

        let summary = categorize(&mut txns, &mut dir, Bank::Hdfc).unwrap();
        assert_eq!(summary.registered, 1);
        assert_eq!(summary.already_known, 1);
        assert_eq!(dir.adds.len(), 2);
        assert_eq!(dir.adds[1].4, AddOutcome::AlreadyExists);
        assert_eq!(dir.inner.len(), 1);
        assert!(txns.iter().all(|t| t.category.as_deref() == Some("Misc")));
    }

    #[test]
    fn test_second_pass_is_idempotent() {
        let mut dir = MemoryDirectory::with_entries([VendorEntry::new(
            "PETRO SURCHARGE WAIVER",
            "Petrol",
            "Travel",
            "hdfc",
        )]);
        let mut txns = vec![txn("PETRO SURCHARGE WAIVER")];

        categorize(&mut txns, &mut dir, Bank::Hdfc).unwrap();
        let first = txns.clone();
        let summary = categorize(&mut txns, &mut dir, Bank::Hdfc).unwrap();

        assert_eq!(txns, first);
        assert_eq!(summary.matched, 1);
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_display_name_lookup_would_remark_misc() {
        // Keying on the rewritten display name loses the match on the next pass.
        let dir = MemoryDirectory::with_entries([VendorEntry::new(
            "PETRO SURCHARGE WAIVER",
            "Petrol",
            "Travel",
            "hdfc",
        )]);
        let mut t = txn("PETRO SURCHARGE WAIVER");
        let mut d = dir.clone();
        categorize(std::slice::from_mut(&mut t), &mut d, Bank::Hdfc).unwrap();
        assert_eq!(t.vendor, "Petrol");

        let vendors = dir.list().unwrap();
        assert!(!vendors.contains_key(&t.vendor));
        assert!(vendors.contains_key(&t.raw_vendor));
    }

    #[test]
    fn test_store_fault_aborts_pass() {
        let mut txns = vec![txn("A"), txn("B")];
        let err = categorize(&mut txns, &mut BrokenDirectory, Bank::Axis).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(txns[1].category.is_none());
    }
}
