use crate::core::msg::InitMsg;
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const STATE_V1_KEY: &str = "state_v1";

/// The storage namespace that holds every salmon record, keyed by salmon id.  Nothing else is
/// ever written below this namespace, so a full scan of it only yields salmon.
pub const LEDGER_NAMESPACE: &[u8] = b"ledger";

pub const STATE_V1: Item<StateV1> = Item::new(STATE_V1_KEY);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct StateV1 {
    pub contract_name: String,
}
impl StateV1 {
    pub fn new(msg: &InitMsg) -> StateV1 {
        StateV1 {
            contract_name: msg.contract_name.to_owned(),
        }
    }
}
