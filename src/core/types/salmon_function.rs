use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Every function that can be invoked on the contract by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SalmonFunction {
    RecordSalmon,
    ChangeSalmonHolder,
    QuerySalmon,
    QueryAllSalmon,
    InitLedger,
}

/// Name to function lookup, built once from [SalmonFunction::ALL].
static FUNCTIONS_BY_NAME: Lazy<BTreeMap<&'static str, SalmonFunction>> = Lazy::new(|| {
    SalmonFunction::ALL
        .iter()
        .map(|function| (function.name(), *function))
        .collect()
});

impl SalmonFunction {
    pub const ALL: [SalmonFunction; 5] = [
        SalmonFunction::RecordSalmon,
        SalmonFunction::ChangeSalmonHolder,
        SalmonFunction::QuerySalmon,
        SalmonFunction::QueryAllSalmon,
        SalmonFunction::InitLedger,
    ];

    /// The name external callers use to invoke this function.
    pub fn name(&self) -> &'static str {
        match self {
            SalmonFunction::RecordSalmon => "recordSalmon",
            SalmonFunction::ChangeSalmonHolder => "changeSalmonHolder",
            SalmonFunction::QuerySalmon => "querySalmon",
            SalmonFunction::QueryAllSalmon => "queryAllSalmon",
            SalmonFunction::InitLedger => "initLedger",
        }
    }

    /// Read-only functions never write to the ledger and may be served by the query entrypoint.
    pub fn is_read_only(&self) -> bool {
        match self {
            SalmonFunction::QuerySalmon | SalmonFunction::QueryAllSalmon => true,
            SalmonFunction::RecordSalmon
            | SalmonFunction::ChangeSalmonHolder
            | SalmonFunction::InitLedger => false,
        }
    }

    /// Resolves a function by its invocation name.
    ///
    /// # Parameters
    ///
    /// * `name` The exact, case-sensitive function name supplied by the caller.
    pub fn from_name<S: AsRef<str>>(name: S) -> AssetResult<Self> {
        match FUNCTIONS_BY_NAME.get(name.as_ref()) {
            Some(function) => function.to_owned().to_ok(),
            None => ContractError::UnknownFunction {
                function: name.as_ref().to_string(),
            }
            .to_err(),
        }
    }
}
impl FromStr for SalmonFunction {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SalmonFunction::from_name(s)
    }
}
impl Display for SalmonFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::core::error::ContractError;

    use super::{SalmonFunction, FUNCTIONS_BY_NAME};

    #[test]
    fn test_name_table_covers_every_function_exactly_once() {
        assert_eq!(
            SalmonFunction::ALL.len(),
            FUNCTIONS_BY_NAME.len(),
            "every function should have a distinct name in the lookup table",
        );
        let distinct = SalmonFunction::ALL.iter().collect::<HashSet<_>>();
        assert_eq!(
            SalmonFunction::ALL.len(),
            distinct.len(),
            "no function should be listed twice",
        );
        for function in SalmonFunction::ALL.iter() {
            assert_eq!(
                *function,
                SalmonFunction::from_name(function.name())
                    .expect("every function name should resolve"),
                "the name of {:?} should resolve back to the same function",
                function,
            );
        }
    }

    #[test]
    fn test_known_names_resolve() {
        assert_eq!(
            SalmonFunction::RecordSalmon,
            "recordSalmon".parse::<SalmonFunction>().unwrap()
        );
        assert_eq!(
            SalmonFunction::ChangeSalmonHolder,
            "changeSalmonHolder".parse::<SalmonFunction>().unwrap()
        );
        assert_eq!(
            SalmonFunction::QuerySalmon,
            "querySalmon".parse::<SalmonFunction>().unwrap()
        );
        assert_eq!(
            SalmonFunction::QueryAllSalmon,
            "queryAllSalmon".parse::<SalmonFunction>().unwrap()
        );
        assert_eq!(
            SalmonFunction::InitLedger,
            "initLedger".parse::<SalmonFunction>().unwrap()
        );
    }

    #[test]
    fn test_unknown_name_is_rejected_with_the_offending_name() {
        let error = SalmonFunction::from_name("RecordSalmon").unwrap_err();
        match error {
            ContractError::UnknownFunction { function } => assert_eq!(
                "RecordSalmon", function,
                "names are case sensitive and the original name should be reported",
            ),
            _ => panic!("unexpected error encountered: {:?}", error),
        };
    }

    #[test]
    fn test_only_queries_are_read_only() {
        let read_only = SalmonFunction::ALL
            .iter()
            .filter(|function| function.is_read_only())
            .collect::<Vec<_>>();
        assert_eq!(
            vec![&SalmonFunction::QuerySalmon, &SalmonFunction::QueryAllSalmon],
            read_only,
        );
    }
}
