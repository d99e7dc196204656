use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::util::traits::ResultExtensions;

pub fn validate_init_msg(msg: &InitMsg) -> Result<(), ContractError> {
    let mut invalid_fields: Vec<String> = vec![];
    if msg.contract_name.is_empty() {
        invalid_fields.push("contract_name: must not be blank".to_string());
    }
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
