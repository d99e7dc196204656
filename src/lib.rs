#![warn(clippy::all)]
pub mod contract;
pub mod core;
pub mod dispatch;
pub mod execute;
pub mod instantiate;
pub mod ledger;
pub mod migrate;
pub mod query;
pub mod util;
pub mod validation;

// Conditional modules
#[cfg(any(test, feature = "enable-test-utils"))]
pub mod testutil;
