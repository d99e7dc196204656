//! Contains every route that writes to the ledger, used by the [contract file](crate::contract).

/// Contains the functionality used by the [changeSalmonHolder](crate::core::types::salmon_function::SalmonFunction::ChangeSalmonHolder)
/// function when invoked via the [execute](crate::contract::execute) function.
pub mod change_salmon_holder;
/// Contains the functionality used by the [initLedger](crate::core::types::salmon_function::SalmonFunction::InitLedger)
/// function when invoked via the [execute](crate::contract::execute) function, or during
/// [instantiation](crate::contract::instantiate) when sample seeding is requested.
pub mod init_ledger;
/// Contains the functionality used by the [recordSalmon](crate::core::types::salmon_function::SalmonFunction::RecordSalmon)
/// function when invoked via the [execute](crate::contract::execute) function.
pub mod record_salmon;
