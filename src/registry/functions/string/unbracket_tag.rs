//! unbracketTag() function - strips the angle brackets from a tag

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::string_arg;
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// unbracketTag() function - strips the angle brackets from a tag
pub struct UnbracketTagFunction;

impl StringFunction for UnbracketTagFunction {
    fn name(&self) -> &str {
        "unbracketTag"
    }
    fn human_friendly_name(&self) -> &str {
        "Unbracket Tag"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "unbracketTag",
                vec![ParameterInfo::required("tag", TypeInfo::String)],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Removes the first '<' and the first '>' from the string, e.g. '<div>' becomes 'div'."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let tag = string_arg(self.name(), args, 0)?;
        Ok(Value::String(strings::unbracket_tag(tag)))
    }
}
