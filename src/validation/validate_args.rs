use crate::core::error::ContractError;
use crate::core::types::salmon_function::SalmonFunction;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// Ensures a function received exactly the number of positional arguments it requires.
///
/// # Parameters
///
/// * `function` The function being invoked.  Used to describe the failure.
/// * `args` The positional arguments supplied by the caller.
/// * `expected` The exact argument count the function requires.
pub fn validate_arg_count(
    function: SalmonFunction,
    args: &[String],
    expected: usize,
) -> AssetResult<()> {
    if args.len() != expected {
        ContractError::InvalidArgumentCount {
            function: function.name().to_string(),
            expected,
            actual: args.len(),
        }
        .to_err()
    } else {
        Ok(())
    }
}

/// Ensures that a named string argument is not empty.
pub fn validate_required_field(field: &str, value: &str) -> AssetResult<()> {
    if value.is_empty() {
        ContractError::invalid_field(field, "must be a non-empty string").to_err()
    } else {
        Ok(())
    }
}
