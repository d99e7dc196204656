use cosmwasm_std::{Order, Storage};
use cosmwasm_storage::{prefixed, prefixed_read, PrefixedStorage, ReadonlyPrefixedStorage};

use crate::core::error::ContractError;
use crate::core::state::LEDGER_NAMESPACE;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

use super::{Ledger, LedgerEntry, LedgerReader, LedgerScan};

/// A writable ledger over the [LEDGER_NAMESPACE] of contract storage, used by execute routes.
pub struct ContractLedger<'a> {
    storage: PrefixedStorage<'a>,
}
impl<'a> ContractLedger<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        ContractLedger {
            storage: prefixed(storage, LEDGER_NAMESPACE),
        }
    }
}
impl LedgerReader for ContractLedger<'_> {
    fn get(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.storage.get(key.as_bytes()).to_ok()
    }

    fn scan_all(&self) -> AssetResult<LedgerScan<'_>> {
        scan_storage(&self.storage)
    }
}
impl Ledger for ContractLedger<'_> {
    fn put(&mut self, key: &str, value: &[u8]) -> AssetResult<()> {
        // Contract storage treats an empty value as a deletion, which a ledger write must never be
        if value.is_empty() {
            return ContractError::ledger_write(key, "value must not be empty").to_err();
        }
        self.storage.set(key.as_bytes(), value);
        Ok(())
    }
}

/// A read-only ledger over the [LEDGER_NAMESPACE] of contract storage, used by query routes.
pub struct ReadonlyContractLedger<'a> {
    storage: ReadonlyPrefixedStorage<'a>,
}
impl<'a> ReadonlyContractLedger<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        ReadonlyContractLedger {
            storage: prefixed_read(storage, LEDGER_NAMESPACE),
        }
    }
}
impl LedgerReader for ReadonlyContractLedger<'_> {
    fn get(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.storage.get(key.as_bytes()).to_ok()
    }

    fn scan_all(&self) -> AssetResult<LedgerScan<'_>> {
        scan_storage(&self.storage)
    }
}

fn scan_storage(storage: &dyn Storage) -> AssetResult<LedgerScan<'_>> {
    let scan: LedgerScan<'_> = Box::new(
        storage
            .range(None, None, Order::Ascending)
            .map(|(key, value)| to_ledger_entry(key, value)),
    );
    scan.to_ok()
}

fn to_ledger_entry(key: Vec<u8>, value: Vec<u8>) -> AssetResult<LedgerEntry> {
    match String::from_utf8(key) {
        Ok(key) => LedgerEntry::new(key, value).to_ok(),
        Err(e) => {
            let lossy_key = String::from_utf8_lossy(e.as_bytes()).into_owned();
            ContractError::ledger_read(lossy_key, e).to_err()
        }
    }
}
