//! firstChar() function - first character of a string

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::{evaluation_error, string_arg};
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// firstChar() function - first character of a string
pub struct FirstCharFunction;

impl StringFunction for FirstCharFunction {
    fn name(&self) -> &str {
        "firstChar"
    }
    fn human_friendly_name(&self) -> &str {
        "First Character"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "firstChar",
                vec![ParameterInfo::required("value", TypeInfo::String)],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns the first character of the string. Fails on the empty string."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let value = string_arg(self.name(), args, 0)?;
        strings::first_char(value)
            .map(Value::String)
            .map_err(evaluation_error(self.name()))
    }
}
