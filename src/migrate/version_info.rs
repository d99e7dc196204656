use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use schemars::JsonSchema;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

pub const CONTRACT_NAME: &str = env!("CARGO_CRATE_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The contract name and version currently deployed, as recorded in contract storage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct VersionInfoV1 {
    pub contract: String,
    pub version: String,
}
impl VersionInfoV1 {
    pub fn parse_sem_ver(&self) -> AssetResult<Version> {
        self.version.parse::<Version>()?.to_ok()
    }
}
impl From<ContractVersion> for VersionInfoV1 {
    fn from(version: ContractVersion) -> Self {
        VersionInfoV1 {
            contract: version.contract,
            version: version.version,
        }
    }
}

pub fn set_version_info(
    storage: &mut dyn Storage,
    version_info: &VersionInfoV1,
) -> AssetResult<()> {
    set_contract_version(storage, &version_info.contract, &version_info.version)?;
    Ok(())
}

pub fn get_version_info(storage: &dyn Storage) -> AssetResult<VersionInfoV1> {
    VersionInfoV1::from(get_contract_version(storage)?).to_ok()
}

/// Overwrites the stored version info with the name and version of the running code.
pub fn migrate_version_info(storage: &mut dyn Storage) -> AssetResult<VersionInfoV1> {
    let version_info = VersionInfoV1 {
        contract: CONTRACT_NAME.to_string(),
        version: CONTRACT_VERSION.to_string(),
    };
    set_version_info(storage, &version_info)?;
    version_info.to_ok()
}
