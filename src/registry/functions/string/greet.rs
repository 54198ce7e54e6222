//! greet() function - fills the `Hello, {first} {last}!` template

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::string_arg;
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// greet() function - fills the greeting template
pub struct GreetFunction;

impl StringFunction for GreetFunction {
    fn name(&self) -> &str {
        "greet"
    }
    fn human_friendly_name(&self) -> &str {
        "Greet"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "greet",
                vec![
                    ParameterInfo::required("firstName", TypeInfo::String),
                    ParameterInfo::required("lastName", TypeInfo::String),
                ],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns 'Hello, {firstName} {lastName}!'."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let first = string_arg(self.name(), args, 0)?;
        let last = string_arg(self.name(), args, 1)?;
        Ok(Value::String(strings::greet(first, last)))
    }
}
