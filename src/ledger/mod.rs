//! The key-value ledger that salmon records are persisted in.  Operations only see the ledger
//! through these traits, which keeps them independent of how the bytes are actually stored.

/// Ledger implementations backed by the contract's own storage.
pub mod contract_ledger;

use crate::util::aliases::AssetResult;

/// A single key and its raw stored value, as produced by a ledger scan.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerEntry {
    pub key: String,
    pub value: Vec<u8>,
}
impl LedgerEntry {
    pub fn new<S: Into<String>>(key: S, value: Vec<u8>) -> Self {
        LedgerEntry {
            key: key.into(),
            value,
        }
    }
}

/// A lazy, single-pass walk over ledger entries.  Each step can fail independently of the others.
pub type LedgerScan<'a> = Box<dyn Iterator<Item = AssetResult<LedgerEntry>> + 'a>;

/// Read access to the ledger.
pub trait LedgerReader {
    /// Fetches the raw value stored under a key, or None when nothing has been stored there.
    fn get(&self, key: &str) -> AssetResult<Option<Vec<u8>>>;

    /// Opens a scan over every key in the ledger, with no lower or upper bound.
    fn scan_all(&self) -> AssetResult<LedgerScan<'_>>;
}

/// Read and write access to the ledger.
pub trait Ledger: LedgerReader {
    /// Stores a value under a key, replacing any previous value in full.
    fn put(&mut self, key: &str, value: &[u8]) -> AssetResult<()>;
}
