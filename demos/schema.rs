use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use salmon_supply_chain_smart_contract::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use salmon_supply_chain_smart_contract::core::state::StateV1;
use salmon_supply_chain_smart_contract::core::types::salmon::Salmon;
use salmon_supply_chain_smart_contract::migrate::version_info::VersionInfoV1;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(InitMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Salmon), &out_dir);
    export_schema(&schema_for!(StateV1), &out_dir);
    export_schema(&schema_for!(VersionInfoV1), &out_dir);
}
