use crate::core::error::ContractError;
use crate::core::types::salmon::Salmon;
use crate::core::types::salmon_function::SalmonFunction;
use crate::ledger::Ledger;
use crate::util::aliases::AssetResult;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::event_log::EventLog;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_args::{validate_arg_count, validate_required_field};

/// The validated arguments of a [changeSalmonHolder](SalmonFunction::ChangeSalmonHolder)
/// invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeSalmonHolderV1 {
    pub id: String,
    pub new_holder: String,
}
impl ChangeSalmonHolderV1 {
    pub fn from_args(args: &[String]) -> AssetResult<Self> {
        validate_arg_count(SalmonFunction::ChangeSalmonHolder, args, 2)?;
        validate_required_field("holder", &args[1])?;
        ChangeSalmonHolderV1 {
            id: args[0].to_owned(),
            new_holder: args[1].to_owned(),
        }
        .to_ok()
    }
}

/// Transfers custody of an existing salmon by rewriting its holder.  The full record is read,
/// decoded, updated and written back; every other field is carried forward as stored.
///
/// # Parameters
///
/// * `ledger` The ledger holding the record.
/// * `log` The event log of the current invocation.
/// * `msg` The validated transfer arguments.
pub fn change_salmon_holder<L: Ledger>(
    ledger: &mut L,
    log: &mut EventLog,
    msg: ChangeSalmonHolderV1,
) -> AssetResult<()> {
    let stored = match ledger.get(&msg.id)? {
        Some(bytes) => bytes,
        None => return ContractError::SalmonNotFound { id: msg.id }.to_err(),
    };
    let mut salmon = Salmon::decode(&msg.id, &stored)?;
    let previous_holder = std::mem::replace(&mut salmon.holder, msg.new_holder);
    ledger.put(&msg.id, &salmon.encode()?)?;
    log.record(
        EventAttributes::for_salmon_event(EventType::ChangeSalmonHolder, &msg.id, &salmon.holder)
            .set_previous_holder(previous_holder),
    );
    Ok(())
}
