//! Playing card functions

mod card_index;

pub use card_index::CardIndexFunction;

use crate::registry::function::FunctionRegistry;

/// Register all card functions
pub fn register_card_functions(registry: &mut FunctionRegistry) {
    registry.register(CardIndexFunction);
}
