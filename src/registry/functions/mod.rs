//! Built-in function implementations

pub mod cards;
pub mod string;
pub mod type_checking;

use crate::error::StringTaskError;
use crate::model::Value;
use crate::registry::function::{FunctionError, FunctionRegistry, FunctionResult};

/// Register every built-in function
pub fn register_builtin_functions(registry: &mut FunctionRegistry) {
    string::register_string_functions(registry);
    type_checking::register_type_checking_functions(registry);
    cards::register_card_functions(registry);
}

/// Borrow argument `index` as a string slice
pub(crate) fn string_arg<'a>(
    name: &str,
    args: &'a [Value],
    index: usize,
) -> FunctionResult<&'a str> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s.as_str()),
        other => Err(FunctionError::InvalidArgumentType {
            name: name.to_string(),
            index,
            expected: "String".to_string(),
            actual: other.map_or("nothing", Value::type_name).to_string(),
        }),
    }
}

/// Read argument `index` as a non-negative count
pub(crate) fn count_arg(name: &str, args: &[Value], index: usize) -> FunctionResult<usize> {
    let value = match args.get(index) {
        Some(Value::Integer(i)) => *i,
        other => {
            return Err(FunctionError::InvalidArgumentType {
                name: name.to_string(),
                index,
                expected: "Integer".to_string(),
                actual: other.map_or("nothing", Value::type_name).to_string(),
            });
        }
    };

    usize::try_from(value).map_err(|_| FunctionError::InvalidArgumentValue {
        name: name.to_string(),
        index,
        message: format!("expected a non-negative integer, got {value}"),
    })
}

/// Convert a usize result into an integer value
pub(crate) fn integer_value(name: &str, value: usize) -> FunctionResult<Value> {
    i64::try_from(value)
        .map(Value::Integer)
        .map_err(|_| FunctionError::ResultOutOfRange {
            name: name.to_string(),
            value,
        })
}

/// Wrap an operation error with the name of the function that raised it
pub(crate) fn evaluation_error(name: &str) -> impl FnOnce(StringTaskError) -> FunctionError + '_ {
    move |source| FunctionError::Evaluation {
        name: name.to_string(),
        source,
    }
}
