//! concatenate() function - joins two strings without a separator

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::string_arg;
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// concatenate() function - joins two strings without a separator
pub struct ConcatenateFunction;

impl StringFunction for ConcatenateFunction {
    fn name(&self) -> &str {
        "concatenate"
    }
    fn human_friendly_name(&self) -> &str {
        "Concatenate"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "concatenate",
                vec![
                    ParameterInfo::required("first", TypeInfo::String),
                    ParameterInfo::required("second", TypeInfo::String),
                ],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns the first string followed by the second."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let first = string_arg(self.name(), args, 0)?;
        let second = string_arg(self.name(), args, 1)?;
        Ok(Value::String(strings::concatenate(first, second)))
    }
}
