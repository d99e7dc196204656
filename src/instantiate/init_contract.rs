use crate::core::msg::InitMsg;
use crate::core::state::{StateV1, STATE_V1};
use crate::execute::init_ledger::init_ledger;
use crate::ledger::contract_ledger::ContractLedger;
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::event_log::EventLog;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{Env, MessageInfo, Response};

/// The main functionality executed when the smart contract is first instantiated.  This stores
/// the internal contract [StateV1](crate::core::state::StateV1) value and the contract version,
/// then seeds the sample salmon into the ledger when requested.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMutC,
    _env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    STATE_V1.save(deps.storage, &StateV1::new(&msg))?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    let mut log = EventLog::new();
    if msg.seed_sample_assets {
        init_ledger(&mut ContractLedger::new(deps.storage), &mut log)?;
    }
    log.append_to(
        Response::new().add_attributes(EventAttributes::new(EventType::InstantiateContract)),
    )
    .to_ok()
}
