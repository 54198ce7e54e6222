//! repeat() function - repeats a string a number of times

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::{count_arg, evaluation_error, string_arg};
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// repeat() function - repeats a string a number of times
pub struct RepeatFunction;

impl StringFunction for RepeatFunction {
    fn name(&self) -> &str {
        "repeat"
    }
    fn human_friendly_name(&self) -> &str {
        "Repeat"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "repeat",
                vec![
                    ParameterInfo::required("value", TypeInfo::String),
                    ParameterInfo::required("count", TypeInfo::Integer),
                ],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns the string repeated count times. A count of 0 gives the empty string."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let value = string_arg(self.name(), args, 0)?;
        let count = count_arg(self.name(), args, 1)?;
        strings::repeat(value, count)
            .map(Value::String)
            .map_err(evaluation_error(self.name()))
    }
}
