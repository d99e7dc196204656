use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The kind tag written into every salmon record.
pub const SALMON_DOC_TYPE: &str = "salmon";

/// A single tracked fish lot.  Everything except the holder is fixed when the record is first
/// written to the ledger.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Salmon {
    #[serde(rename = "docType")]
    pub doc_type: String,
    pub id: String,
    pub vessel: String,
    pub datetime: String,
    pub location: String,
    pub holder: String,
}
impl Salmon {
    pub fn new<S1, S2, S3, S4, S5>(
        id: S1,
        vessel: S2,
        datetime: S3,
        location: S4,
        holder: S5,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
        S5: Into<String>,
    {
        Salmon {
            doc_type: SALMON_DOC_TYPE.to_string(),
            id: id.into(),
            vessel: vessel.into(),
            datetime: datetime.into(),
            location: location.into(),
            holder: holder.into(),
        }
    }

    /// Produces the bytes stored in the ledger for this record.
    pub fn encode(&self) -> AssetResult<Vec<u8>> {
        serde_json_wasm::to_vec(self).map_err(|e| ContractError::RecordEncoding {
            id: self.id.to_owned(),
            explanation: e.to_string(),
        })
    }

    /// Reads a record back from the bytes stored under the given ledger key.  Fields that are not
    /// part of the record are ignored.
    ///
    /// # Parameters
    ///
    /// * `key` The ledger key the bytes were read from.  Only used to describe failures.
    /// * `bytes` The raw stored value.
    pub fn decode<S: Into<String>>(key: S, bytes: &[u8]) -> AssetResult<Self> {
        let key = key.into();
        let salmon = serde_json_wasm::from_slice::<Salmon>(bytes)
            .map_err(|e| ContractError::malformed_record(&key, e))?;
        if salmon.doc_type != SALMON_DOC_TYPE {
            return ContractError::malformed_record(
                key,
                format!(
                    "expected record kind [{}] but found [{}]",
                    SALMON_DOC_TYPE, salmon.doc_type
                ),
            )
            .to_err();
        }
        salmon.to_ok()
    }
}
