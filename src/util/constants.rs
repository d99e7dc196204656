// Execution output attributes.  All should be prefixed with "salmon_" to make them easy to
// discern when observed in the event stream

/// The event name every contract event is emitted under.  CosmWasm prefixes it with "wasm-".
pub const SALMON_EVENT_NAME: &str = "salmon_supply_chain";

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const SALMON_EVENT_TYPE_KEY: &str = "salmon_event_type";
/// Value = Salmon id, which is also its ledger key (String)
pub const SALMON_ID_KEY: &str = "salmon_id";
/// Value = The holder of the salmon after the event (String)
pub const SALMON_HOLDER_KEY: &str = "salmon_holder";
/// Value = The holder of the salmon before a custody transfer (String)
pub const SALMON_PREVIOUS_HOLDER_KEY: &str = "salmon_previous_holder";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "salmon_new_value";

//////////////////////
// Global Constants //
//////////////////////

/// The sample records written by the initLedger function, in the order they are recorded.
/// Each entry is (id, vessel, datetime, location, holder).
pub const SAMPLE_SALMON: [[&str; 5]; 3] = [
    ["1", "Vessel #1", "2014-01-01", "Viet Nam", "Nha Hoang"],
    ["2", "Vessel #2", "2016-04-22", "US", "Thanh Dong"],
    ["3", "Vessel #3", "2017-11-13", "Korea", "Duy Nguyen"],
];
