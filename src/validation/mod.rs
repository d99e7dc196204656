//! Functionality used to ensure the logical integrity of received external values.

/// Validates the positional arguments supplied to an invoked contract function.
pub mod validate_args;
/// Validates the integrity of an intercepted [InitMsg](crate::core::msg::InitMsg).
pub mod validate_init_msg;
