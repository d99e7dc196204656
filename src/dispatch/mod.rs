//! Routes a named function invocation to the operation that implements it.

use cosmwasm_std::{Binary, Response};

use crate::core::error::ContractError;
use crate::core::types::salmon_function::SalmonFunction;
use crate::execute::change_salmon_holder::{change_salmon_holder, ChangeSalmonHolderV1};
use crate::execute::init_ledger::init_ledger;
use crate::execute::record_salmon::{record_salmon, RecordSalmonV1};
use crate::ledger::contract_ledger::{ContractLedger, ReadonlyContractLedger};
use crate::ledger::{Ledger, LedgerReader};
use crate::query::query_all_salmon::query_all_salmon;
use crate::query::query_salmon::query_salmon;
use crate::util::aliases::{AssetResult, DepsC, DepsMutC, EntryPointResponse};
use crate::util::event_log::EventLog;
use crate::util::traits::ResultExtensions;

/// Runs any function against a writable ledger.  Functions that only write produce no payload;
/// read functions produce the bytes they would produce as a query.
///
/// # Parameters
///
/// * `ledger` The ledger the function operates on.
/// * `log` The event log of the current invocation.
/// * `function` The resolved function to run.
/// * `args` The positional arguments supplied by the caller.
pub fn invoke_function<L: Ledger>(
    ledger: &mut L,
    log: &mut EventLog,
    function: SalmonFunction,
    args: &[String],
) -> AssetResult<Option<Binary>> {
    match function {
        SalmonFunction::RecordSalmon => {
            record_salmon(ledger, log, RecordSalmonV1::from_args(args)?)?;
            Ok(None)
        }
        SalmonFunction::ChangeSalmonHolder => {
            change_salmon_holder(ledger, log, ChangeSalmonHolderV1::from_args(args)?)?;
            Ok(None)
        }
        SalmonFunction::QuerySalmon => query_salmon(&*ledger, args).map(Some),
        SalmonFunction::QueryAllSalmon => query_all_salmon(&*ledger).map(Some),
        SalmonFunction::InitLedger => {
            init_ledger(ledger, log)?;
            Ok(None)
        }
    }
}

/// Runs a read-only function.  Functions that write to the ledger are refused.
pub fn invoke_query<L: LedgerReader + ?Sized>(
    ledger: &L,
    function: SalmonFunction,
    args: &[String],
) -> AssetResult<Binary> {
    match function {
        SalmonFunction::QuerySalmon => query_salmon(ledger, args),
        SalmonFunction::QueryAllSalmon => query_all_salmon(ledger),
        SalmonFunction::RecordSalmon
        | SalmonFunction::ChangeSalmonHolder
        | SalmonFunction::InitLedger => ContractError::MutatingFunctionInQuery {
            function: function.name().to_string(),
        }
        .to_err(),
    }
}

/// Executes a function against the contract's ledger, folding the emitted events and any payload
/// into the response.  The payload is set as the response data.
pub fn execute_function(
    deps: DepsMutC,
    function: SalmonFunction,
    args: &[String],
) -> EntryPointResponse {
    let mut log = EventLog::new();
    let payload = invoke_function(
        &mut ContractLedger::new(deps.storage),
        &mut log,
        function,
        args,
    )?;
    let response = log.append_to(Response::new());
    match payload {
        Some(data) => response.set_data(data),
        None => response,
    }
    .to_ok()
}

/// Serves a read-only function from the contract's ledger.
pub fn query_function(
    deps: &DepsC,
    function: SalmonFunction,
    args: &[String],
) -> AssetResult<Binary> {
    invoke_query(&ReadonlyContractLedger::new(deps.storage), function, args)
}
