//! String manipulation functions

mod concatenate;
mod extract_name;
mod first_char;
mod greet;
mod length;
mod remove_first_occurrence;
mod render_rectangle;
mod repeat;
mod rot13;
mod split_emails;
mod trim;
mod unbracket_tag;
mod upper;

pub use concatenate::ConcatenateFunction;
pub use extract_name::ExtractNameFunction;
pub use first_char::FirstCharFunction;
pub use greet::GreetFunction;
pub use length::LengthFunction;
pub use remove_first_occurrence::RemoveFirstOccurrenceFunction;
pub use render_rectangle::RenderRectangleFunction;
pub use repeat::RepeatFunction;
pub use rot13::Rot13Function;
pub use split_emails::SplitEmailsFunction;
pub use trim::TrimFunction;
pub use unbracket_tag::UnbracketTagFunction;
pub use upper::UpperFunction;

use crate::registry::function::FunctionRegistry;

/// Register all string functions
pub fn register_string_functions(registry: &mut FunctionRegistry) {
    registry.register(ConcatenateFunction);
    registry.register(LengthFunction);
    registry.register(GreetFunction);
    registry.register(ExtractNameFunction);
    registry.register(FirstCharFunction);
    registry.register(TrimFunction);
    registry.register(RepeatFunction);
    registry.register(RemoveFirstOccurrenceFunction);
    registry.register(UnbracketTagFunction);
    registry.register(UpperFunction);
    registry.register(SplitEmailsFunction);
    registry.register(RenderRectangleFunction);
    registry.register(Rot13Function);
}
