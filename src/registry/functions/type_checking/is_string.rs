//! isStringType() function - checks whether a value is a string

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// isStringType() function - checks whether a value is a string
pub struct IsStringFunction;

impl StringFunction for IsStringFunction {
    fn name(&self) -> &str {
        "isStringType"
    }
    fn human_friendly_name(&self) -> &str {
        "Is String"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "isStringType",
                vec![ParameterInfo::required("value", TypeInfo::Any)],
                TypeInfo::Boolean,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns true for string values and false for everything else, including null."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        Ok(Value::Boolean(strings::is_string(&args[0])))
    }
}
