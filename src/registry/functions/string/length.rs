//! length() function - string length in UTF-16 code units

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::{integer_value, string_arg};
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// length() function - string length in UTF-16 code units
pub struct LengthFunction;

impl StringFunction for LengthFunction {
    fn name(&self) -> &str {
        "length"
    }
    fn human_friendly_name(&self) -> &str {
        "Length"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "length",
                vec![ParameterInfo::required("value", TypeInfo::String)],
                TypeInfo::Integer,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns the number of UTF-16 code units in the string."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let value = string_arg(self.name(), args, 0)?;
        integer_value(self.name(), strings::length(value))
    }
}
