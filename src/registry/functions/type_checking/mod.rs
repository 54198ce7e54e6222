//! Type checking functions

mod is_string;

pub use is_string::IsStringFunction;

use crate::registry::function::FunctionRegistry;

/// Register all type checking functions
pub fn register_type_checking_functions(registry: &mut FunctionRegistry) {
    registry.register(IsStringFunction);
}
