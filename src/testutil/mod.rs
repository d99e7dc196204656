//! Shared helpers for the contract's tests.

pub mod mock_ledger;
pub mod test_constants;
pub mod test_utilities;
