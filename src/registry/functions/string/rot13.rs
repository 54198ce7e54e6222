//! rot13() function - ROT13 cipher

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::string_arg;
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// rot13() function - ROT13 cipher
pub struct Rot13Function;

impl StringFunction for Rot13Function {
    fn name(&self) -> &str {
        "rot13"
    }
    fn human_friendly_name(&self) -> &str {
        "ROT13"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "rot13",
                vec![ParameterInfo::required("value", TypeInfo::String)],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Shifts ASCII letters 13 places within their case and leaves all other characters unchanged."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let value = string_arg(self.name(), args, 0)?;
        Ok(Value::String(strings::rot13(value)))
    }
}
