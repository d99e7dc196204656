use cosmwasm_std::Response;
use semver::Version;

use crate::core::error::ContractError;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

use super::version_info::{
    get_version_info, migrate_version_info, VersionInfoV1, CONTRACT_NAME, CONTRACT_VERSION,
};

/// Moves the stored version info to the running code's version.  Only the version info is
/// rewritten; the salmon ledger and the contract state are left exactly as they were.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.
pub fn migrate_contract(deps: DepsMutC) -> EntryPointResponse {
    let deployed = get_version_info(deps.storage)?;
    ensure_upgrade_path(&deployed, CONTRACT_NAME, CONTRACT_VERSION)?;
    let upgraded = migrate_version_info(deps.storage)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::MigrateContract).set_new_value(upgraded.version),
        )
        .to_ok()
}

/// Accepts a migration from the deployed contract to the incoming code when both carry the same
/// contract name and the incoming version is not older than the deployed one.  Re-running the
/// same version is allowed.
fn ensure_upgrade_path(
    deployed: &VersionInfoV1,
    incoming_name: &str,
    incoming_version: &str,
) -> AssetResult<()> {
    if deployed.contract != incoming_name {
        return ContractError::InvalidContractName {
            current_contract: deployed.contract.to_owned(),
            migration_contract: incoming_name.to_string(),
        }
        .to_err();
    }
    let incoming = incoming_version.parse::<Version>()?;
    if deployed.parse_sem_ver()? > incoming {
        return ContractError::InvalidContractVersion {
            current_version: deployed.version.to_owned(),
            migration_version: incoming_version.to_string(),
        }
        .to_err();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::state::STATE_V1;
    use crate::migrate::version_info::{
        get_version_info, set_version_info, VersionInfoV1, CONTRACT_NAME, CONTRACT_VERSION,
    };
    use crate::testutil::test_constants::DEFAULT_CONTRACT_NAME;
    use crate::testutil::test_utilities::{
        single_attribute_for_key, test_instantiate_success, test_query_invoke, InstArgs,
    };
    use crate::util::constants::{NEW_VALUE_KEY, SALMON_EVENT_TYPE_KEY};

    use super::{ensure_upgrade_path, migrate_contract};

    fn deployed(contract: &str, version: &str) -> VersionInfoV1 {
        VersionInfoV1 {
            contract: contract.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_upgrade_path_accepts_newer_and_equal_versions() {
        ensure_upgrade_path(&deployed("salmon", "0.1.0"), "salmon", "0.2.0")
            .expect("moving to a newer version should be accepted");
        ensure_upgrade_path(&deployed("salmon", "0.2.0"), "salmon", "0.2.0")
            .expect("re-running the deployed version should be accepted");
    }

    #[test]
    fn test_upgrade_path_rejects_a_downgrade() {
        let error =
            ensure_upgrade_path(&deployed("salmon", "1.0.0"), "salmon", "0.9.9").unwrap_err();
        match error {
            ContractError::InvalidContractVersion {
                current_version,
                migration_version,
            } => {
                assert_eq!("1.0.0", current_version);
                assert_eq!("0.9.9", migration_version);
            }
            _ => panic!("unexpected error encountered: {:?}", error),
        };
    }

    #[test]
    fn test_upgrade_path_rejects_another_contract() {
        let error =
            ensure_upgrade_path(&deployed("tuna", "0.1.0"), "salmon", "0.2.0").unwrap_err();
        match error {
            ContractError::InvalidContractName {
                current_contract,
                migration_contract,
            } => {
                assert_eq!("tuna", current_contract);
                assert_eq!("salmon", migration_contract);
            }
            _ => panic!("unexpected error encountered: {:?}", error),
        };
    }

    #[test]
    fn test_upgrade_path_rejects_an_unreadable_deployed_version() {
        let error =
            ensure_upgrade_path(&deployed("salmon", "one"), "salmon", "0.2.0").unwrap_err();
        assert!(
            matches!(error, ContractError::SemVer(_)),
            "expected a semver error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_migration_keeps_every_salmon_and_the_state() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(
            deps.as_mut(),
            InstArgs {
                seed_sample_assets: true,
                ..Default::default()
            },
        );
        set_version_info(deps.as_mut().storage, &deployed(CONTRACT_NAME, "0.0.1"))
            .expect("overwriting the version info should succeed");
        let listing_before = test_query_invoke(deps.as_ref(), "queryAllSalmon", &[]).unwrap();
        let response =
            migrate_contract(deps.as_mut()).expect("migrating to a newer version should succeed");
        assert_eq!(
            "migrate_contract",
            single_attribute_for_key(&response, SALMON_EVENT_TYPE_KEY),
        );
        assert_eq!(
            CONTRACT_VERSION,
            single_attribute_for_key(&response, NEW_VALUE_KEY),
        );
        assert!(response.events.is_empty(), "no salmon events should be emitted");
        assert_eq!(
            listing_before,
            test_query_invoke(deps.as_ref(), "queryAllSalmon", &[]).unwrap(),
            "the ledger should be byte-for-byte unchanged by a migration",
        );
        assert_eq!(
            DEFAULT_CONTRACT_NAME,
            STATE_V1.load(deps.as_ref().storage).unwrap().contract_name,
        );
        assert_eq!(
            CONTRACT_VERSION,
            get_version_info(deps.as_ref().storage).unwrap().version,
        );
    }

    #[test]
    fn test_failed_migration_leaves_the_version_alone() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        set_version_info(deps.as_mut().storage, &deployed(CONTRACT_NAME, "99.0.0"))
            .expect("overwriting the version info should succeed");
        assert!(migrate_contract(deps.as_mut()).is_err());
        assert_eq!(
            "99.0.0",
            get_version_info(deps.as_ref().storage).unwrap().version,
        );
    }
}
