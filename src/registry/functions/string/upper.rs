//! toUpperCase() function - converts a string to uppercase

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::string_arg;
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// toUpperCase() function - converts a string to uppercase
pub struct UpperFunction;

impl StringFunction for UpperFunction {
    fn name(&self) -> &str {
        "toUpperCase"
    }
    fn human_friendly_name(&self) -> &str {
        "To Upper Case"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "toUpperCase",
                vec![ParameterInfo::required("value", TypeInfo::String)],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Converts every character to its uppercase form, e.g. 'straße' becomes 'STRASSE'."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let value = string_arg(self.name(), args, 0)?;
        Ok(Value::String(strings::to_upper_case(value)))
    }
}
