//! Contains the domain types persisted in the ledger and used to route contract invocations.

/// The tracked fish lot record and its persisted byte encoding.
pub mod salmon;
/// The named functions that external callers are able to invoke.
pub mod salmon_function;
