use cosmwasm_std::{
    testing::{mock_env, mock_info},
    Binary, Env, Event, MessageInfo, Response,
};
use provwasm_std::ProvenanceMsg;

use crate::contract::{execute, instantiate, query};
use crate::core::msg::{ExecuteMsg, InitMsg, QueryMsg};
use crate::core::types::salmon::Salmon;
use crate::ledger::contract_ledger::ReadonlyContractLedger;
use crate::ledger::LedgerReader;
use crate::util::aliases::{AssetResult, DepsC, DepsMutC, EntryPointResponse};
use crate::util::constants::SALMON_EVENT_TYPE_KEY;

use super::test_constants::{
    DEFAULT_CONTRACT_NAME, DEFAULT_SALMON_DATETIME, DEFAULT_SALMON_HOLDER, DEFAULT_SALMON_ID,
    DEFAULT_SALMON_LOCATION, DEFAULT_SALMON_VESSEL, DEFAULT_SENDER_ADDRESS,
};

pub fn get_default_salmon() -> Salmon {
    Salmon::new(
        DEFAULT_SALMON_ID,
        DEFAULT_SALMON_VESSEL,
        DEFAULT_SALMON_DATETIME,
        DEFAULT_SALMON_LOCATION,
        DEFAULT_SALMON_HOLDER,
    )
}

/// The recordSalmon arguments that produce [get_default_salmon].
pub fn default_record_args() -> Vec<String> {
    to_args(&[
        DEFAULT_SALMON_ID,
        DEFAULT_SALMON_VESSEL,
        DEFAULT_SALMON_DATETIME,
        DEFAULT_SALMON_LOCATION,
        DEFAULT_SALMON_HOLDER,
    ])
}

pub fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub contract_name: String,
    pub seed_sample_assets: bool,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_SENDER_ADDRESS, &[]),
            contract_name: DEFAULT_CONTRACT_NAME.to_string(),
            seed_sample_assets: false,
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            contract_name: args.contract_name,
            seed_sample_assets: args.seed_sample_assets,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response<ProvenanceMsg> {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn test_invoke<S: Into<String>>(
    deps: DepsMutC,
    function: S,
    args: &[&str],
) -> EntryPointResponse {
    execute(
        deps,
        mock_env(),
        mock_info(DEFAULT_SENDER_ADDRESS, &[]),
        ExecuteMsg::Invoke {
            function: function.into(),
            args: to_args(args),
        },
    )
}

pub fn test_invoke_success<S: Into<String>>(
    deps: DepsMutC,
    function: S,
    args: &[&str],
) -> Response<ProvenanceMsg> {
    test_invoke(deps, function, args).expect("expected the invocation to succeed")
}

pub fn test_query_invoke<S: Into<String>>(
    deps: DepsC,
    function: S,
    args: &[&str],
) -> AssetResult<Binary> {
    query(
        deps,
        mock_env(),
        QueryMsg::Invoke {
            function: function.into(),
            args: to_args(args),
        },
    )
}

/// Loads and decodes a salmon straight out of the contract's ledger.
pub fn load_salmon(deps: &DepsC, id: &str) -> Salmon {
    let bytes = ReadonlyContractLedger::new(deps.storage)
        .get(id)
        .expect("reading the ledger should not fail")
        .expect("expected the salmon to be stored");
    Salmon::decode(id, &bytes).expect("expected the stored salmon to decode")
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}

pub fn single_event_attribute<'a>(event: &'a Event, key: &'a str) -> &'a str {
    event
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}

/// Every emitted event whose event type attribute matches the given value.
pub fn events_of_type<'a, T>(response: &'a Response<T>, event_type: &str) -> Vec<&'a Event> {
    response
        .events
        .iter()
        .filter(|event| {
            event
                .attributes
                .iter()
                .any(|attr| attr.key == SALMON_EVENT_TYPE_KEY && attr.value == event_type)
        })
        .collect()
}
