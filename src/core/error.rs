use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("Incorrect number of arguments for function [{function}]. Expecting {expected}, but got {actual}")]
    InvalidArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid field [{field}]: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Salmon {id} already exists")]
    SalmonAlreadyExists { id: String },

    #[error("Salmon {id} doesn't exist")]
    SalmonNotFound { id: String },

    #[error("Stored record at key [{key}] is malformed: {explanation}")]
    MalformedRecord { key: String, explanation: String },

    #[error("Failed to encode salmon {id}: {explanation}")]
    RecordEncoding { id: String, explanation: String },

    #[error("Cannot get salmon {key}. Error: {explanation}")]
    LedgerRead { key: String, explanation: String },

    #[error("Cannot put salmon {key}. Error: {explanation}")]
    LedgerWrite { key: String, explanation: String },

    #[error("Cannot scan the ledger. Error: {explanation}")]
    LedgerScan { explanation: String },

    #[error("No such {function} function")]
    UnknownFunction { function: String },

    #[error("Function [{function}] mutates the ledger and cannot be invoked as a query")]
    MutatingFunctionInQuery { function: String },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },
}
impl ContractError {
    pub fn invalid_field<S1: Into<String>, S2: Into<String>>(field: S1, reason: S2) -> Self {
        ContractError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn ledger_read<S1: Into<String>, S2: ToString>(key: S1, cause: S2) -> Self {
        ContractError::LedgerRead {
            key: key.into(),
            explanation: cause.to_string(),
        }
    }

    pub fn ledger_write<S1: Into<String>, S2: ToString>(key: S1, cause: S2) -> Self {
        ContractError::LedgerWrite {
            key: key.into(),
            explanation: cause.to_string(),
        }
    }

    pub fn malformed_record<S1: Into<String>, S2: ToString>(key: S1, cause: S2) -> Self {
        ContractError::MalformedRecord {
            key: key.into(),
            explanation: cause.to_string(),
        }
    }
}
