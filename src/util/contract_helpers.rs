use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

use cosmwasm_std::MessageInfo;

/// Ensures that the info provided to the route does not include any funds.  No contract route
/// charges for its work, so attached funds would otherwise be silently kept by the contract.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use salmon_supply_chain_smart_contract::util::contract_helpers::check_funds_are_empty;
/// use cosmwasm_std::testing::mock_info;
///
/// let info = mock_info("sender", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> AssetResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;
    use cosmwasm_std::testing::mock_info;

    use crate::core::error::ContractError;

    use super::check_funds_are_empty;

    #[test]
    fn test_funds_are_rejected() {
        let error = check_funds_are_empty(&mock_info("sender", &[coin(10, "nhash")])).unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "expected an invalid funds error, but got: {:?}",
            error,
        );
    }
}
