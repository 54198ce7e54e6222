//! Function registry for name-based dispatch
//!
//! Each string operation is wrapped in a type implementing [`StringFunction`],
//! which carries its signature so arguments can be checked before evaluation.

#![warn(missing_docs)]

pub mod cache;
pub mod function;
pub mod functions;
pub mod signature;

pub use cache::{CacheConfig, CacheStats};
pub use function::{FunctionError, FunctionRegistry, FunctionResult, StringFunction};
pub use signature::{FunctionSignature, ParameterInfo};

/// Create a registry with all built-in functions and the default cache settings
pub fn create_standard_registry() -> FunctionRegistry {
    create_registry_with_config(CacheConfig::default())
}

/// Create a registry with all built-in functions and custom cache settings
pub fn create_registry_with_config(config: CacheConfig) -> FunctionRegistry {
    let mut functions = FunctionRegistry::with_config(config);
    functions::register_builtin_functions(&mut functions);
    functions
}
