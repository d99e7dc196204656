use std::collections::BTreeMap;

use crate::core::error::ContractError;
use crate::ledger::{Ledger, LedgerEntry, LedgerReader, LedgerScan};
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// An in-memory ledger that scans in ascending key order and can be told to fail any of its
/// operations, for exercising the failure paths that contract storage never produces.
#[derive(Default)]
pub struct MockLedger {
    entries: BTreeMap<String, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
    fail_scan_open: bool,
    fail_scan_at: Option<usize>,
    write_count: usize,
}
impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry directly, without counting it as a write.
    pub fn with_entry<S: Into<String>>(mut self, key: S, value: Vec<u8>) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn failing_scan_open(mut self) -> Self {
        self.fail_scan_open = true;
        self
    }

    /// Fails the scan step at the given zero-based position.
    pub fn failing_scan_at(mut self, index: usize) -> Self {
        self.fail_scan_at = Some(index);
        self
    }

    pub fn stored(&self, key: &str) -> Option<&Vec<u8>> {
        self.entries.get(key)
    }

    pub fn write_count(&self) -> usize {
        self.write_count
    }
}
impl LedgerReader for MockLedger {
    fn get(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        if self.fail_reads {
            return ContractError::ledger_read(key, "mock read failure").to_err();
        }
        self.entries.get(key).cloned().to_ok()
    }

    fn scan_all(&self) -> AssetResult<LedgerScan<'_>> {
        if self.fail_scan_open {
            return ContractError::LedgerScan {
                explanation: "mock scan failure".to_string(),
            }
            .to_err();
        }
        let fail_scan_at = self.fail_scan_at;
        let scan: LedgerScan<'_> = Box::new(self.entries.iter().enumerate().map(
            move |(index, (key, value))| {
                if fail_scan_at == Some(index) {
                    ContractError::ledger_read(key, "mock scan step failure").to_err()
                } else {
                    LedgerEntry::new(key, value.to_owned()).to_ok()
                }
            },
        ));
        scan.to_ok()
    }
}
impl Ledger for MockLedger {
    fn put(&mut self, key: &str, value: &[u8]) -> AssetResult<()> {
        if self.fail_writes {
            return ContractError::ledger_write(key, "mock write failure").to_err();
        }
        self.entries.insert(key.to_string(), value.to_vec());
        self.write_count += 1;
        Ok(())
    }
}
