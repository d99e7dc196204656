use crate::core::error::ContractError;
use crate::core::types::salmon_function::SalmonFunction;
use crate::ledger::LedgerReader;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_args::validate_arg_count;
use cosmwasm_std::Binary;

/// Fetches the exact bytes stored for a single salmon.  The stored document is returned as-is,
/// without being decoded.
///
/// # Parameters
///
/// * `ledger` The ledger to read from.
/// * `args` A single positional argument: the salmon id.
pub fn query_salmon<L: LedgerReader + ?Sized>(ledger: &L, args: &[String]) -> AssetResult<Binary> {
    validate_arg_count(SalmonFunction::QuerySalmon, args, 1)?;
    let id = &args[0];
    match ledger.get(id)? {
        Some(bytes) => Binary::from(bytes).to_ok(),
        None => ContractError::SalmonNotFound { id: id.to_owned() }.to_err(),
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::testutil::mock_ledger::MockLedger;
    use crate::testutil::test_utilities::to_args;

    use super::query_salmon;

    #[test]
    fn test_stored_bytes_are_returned_unchanged() {
        // Deliberately not the canonical encoding, to prove no decode/encode round trip happens
        let stored = br#"{ "docType": "salmon", "id": "1", "holder": "Nha Hoang", "extra": true }"#;
        let ledger = MockLedger::new().with_entry("1", stored.to_vec());
        let binary = query_salmon(&ledger, &to_args(&["1"])).expect("the salmon should be found");
        assert_eq!(stored.to_vec(), binary.to_vec());
    }

    #[test]
    fn test_missing_salmon() {
        let error = query_salmon(&MockLedger::new(), &to_args(&["1"])).unwrap_err();
        match error {
            ContractError::SalmonNotFound { id } => assert_eq!("1", id),
            _ => panic!("unexpected error encountered: {:?}", error),
        };
    }

    #[test]
    fn test_wrong_arg_count() {
        let error = query_salmon(&MockLedger::new(), &to_args(&["1", "2"])).unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidArgumentCount { .. }),
            "expected an argument count error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_read_failure_is_surfaced() {
        let error =
            query_salmon(&MockLedger::new().failing_reads(), &to_args(&["1"])).unwrap_err();
        match error {
            ContractError::LedgerRead { key, .. } => assert_eq!("1", key),
            _ => panic!("unexpected error encountered: {:?}", error),
        };
    }
}
