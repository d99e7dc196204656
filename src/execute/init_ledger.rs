use crate::execute::record_salmon::{record_salmon, RecordSalmonV1};
use crate::ledger::Ledger;
use crate::util::aliases::AssetResult;
use crate::util::constants::SAMPLE_SALMON;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::event_log::EventLog;

/// Records each of the [SAMPLE_SALMON] through the regular record route.  Stops at the first
/// failure; records written before the failure are kept.
///
/// # Parameters
///
/// * `ledger` The ledger the sample records are written to.
/// * `log` The event log of the current invocation.
pub fn init_ledger<L: Ledger>(ledger: &mut L, log: &mut EventLog) -> AssetResult<()> {
    for sample in SAMPLE_SALMON.iter() {
        let args = sample
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();
        record_salmon(ledger, log, RecordSalmonV1::from_args(&args)?)?;
    }
    log.record(
        EventAttributes::new(EventType::InitLedger).set_new_value(SAMPLE_SALMON.len()),
    );
    Ok(())
}
