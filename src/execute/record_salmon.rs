use crate::core::error::ContractError;
use crate::core::types::salmon::Salmon;
use crate::core::types::salmon_function::SalmonFunction;
use crate::ledger::Ledger;
use crate::util::aliases::AssetResult;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::event_log::EventLog;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_args::{validate_arg_count, validate_required_field};

/// The validated arguments of a [recordSalmon](SalmonFunction::RecordSalmon) invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSalmonV1 {
    pub id: String,
    pub vessel: String,
    pub datetime: String,
    pub location: String,
    pub holder: String,
}
impl RecordSalmonV1 {
    /// Reads the five positional arguments (id, vessel, datetime, location, holder), rejecting
    /// the first one that is empty.
    pub fn from_args(args: &[String]) -> AssetResult<Self> {
        validate_arg_count(SalmonFunction::RecordSalmon, args, 5)?;
        let msg = RecordSalmonV1 {
            id: args[0].to_owned(),
            vessel: args[1].to_owned(),
            datetime: args[2].to_owned(),
            location: args[3].to_owned(),
            holder: args[4].to_owned(),
        };
        validate_required_field("id", &msg.id)?;
        validate_required_field("vessel", &msg.vessel)?;
        validate_required_field("datetime", &msg.datetime)?;
        validate_required_field("location", &msg.location)?;
        validate_required_field("holder", &msg.holder)?;
        msg.to_ok()
    }

    fn into_salmon(self) -> Salmon {
        Salmon::new(
            self.id,
            self.vessel,
            self.datetime,
            self.location,
            self.holder,
        )
    }
}

/// Writes a brand new salmon record to the ledger under its id.  Fails without writing anything
/// if a value is already stored under that id.
///
/// # Parameters
///
/// * `ledger` The ledger that the new record is written to.
/// * `log` The event log of the current invocation.
/// * `msg` The validated record arguments.
pub fn record_salmon<L: Ledger>(
    ledger: &mut L,
    log: &mut EventLog,
    msg: RecordSalmonV1,
) -> AssetResult<()> {
    if ledger.get(&msg.id)?.is_some() {
        return ContractError::SalmonAlreadyExists { id: msg.id }.to_err();
    }
    let salmon = msg.into_salmon();
    ledger.put(&salmon.id, &salmon.encode()?)?;
    log.record(EventAttributes::for_salmon_event(
        EventType::RecordSalmon,
        &salmon.id,
        &salmon.holder,
    ));
    Ok(())
}
