//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

/// Lists every salmon stored in the ledger.
pub mod query_all_salmon;
/// Fetches a single stored salmon.
pub mod query_salmon;
pub mod query_state;
pub mod query_version;
