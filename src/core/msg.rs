use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InitMsg {
    pub contract_name: String,
    /// When true, the three sample salmon records are recorded during instantiation.
    #[serde(default)]
    pub seed_sample_assets: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Invokes a named contract function with positional arguments, eg: recordSalmon.
    Invoke {
        function: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Invokes a read-only contract function with positional arguments, eg: querySalmon.
    Invoke {
        function: String,
        #[serde(default)]
        args: Vec<String>,
    },
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}
