//! removeFirstOccurrence() function - deletes the first match of a substring

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::string_arg;
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// removeFirstOccurrence() function - deletes the first match of a substring
pub struct RemoveFirstOccurrenceFunction;

impl StringFunction for RemoveFirstOccurrenceFunction {
    fn name(&self) -> &str {
        "removeFirstOccurrence"
    }
    fn human_friendly_name(&self) -> &str {
        "Remove First Occurrence"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "removeFirstOccurrence",
                vec![
                    ParameterInfo::required("value", TypeInfo::String),
                    ParameterInfo::required("needle", TypeInfo::String),
                ],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Removes the first occurrence of the needle. The string is returned unchanged when the needle is absent."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let value = string_arg(self.name(), args, 0)?;
        let needle = string_arg(self.name(), args, 1)?;
        Ok(Value::String(strings::remove_first_occurrence(value, needle)))
    }
}
