use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::core::types::salmon_function::SalmonFunction;
use crate::dispatch::{execute_function, query_function};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_state::query_state;
use crate::query::query_version::query_version;
use crate::util::aliases::{AssetResult, DepsC, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::validation::validate_init_msg::validate_init_msg;
use cosmwasm_std::{entry_point, Binary, Env, MessageInfo};

#[entry_point]
pub fn instantiate(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, env, info, msg)
}

#[entry_point]
pub fn query(deps: DepsC, _env: Env, msg: QueryMsg) -> AssetResult<Binary> {
    match msg {
        QueryMsg::Invoke { function, args } => {
            query_function(&deps, SalmonFunction::from_name(function)?, &args)
        }
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[entry_point]
pub fn execute(
    deps: DepsMutC,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    match msg {
        ExecuteMsg::Invoke { function, args } => {
            execute_function(deps, SalmonFunction::from_name(function)?, &args)
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMutC, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
