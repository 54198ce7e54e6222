//! extractName() function - pulls the name back out of a greeting

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::{evaluation_error, string_arg};
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// extractName() function - inverse of greet()
pub struct ExtractNameFunction;

impl StringFunction for ExtractNameFunction {
    fn name(&self) -> &str {
        "extractName"
    }
    fn human_friendly_name(&self) -> &str {
        "Extract Name"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "extractName",
                vec![ParameterInfo::required("greeting", TypeInfo::String)],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Extracts 'First Last' from 'Hello, First Last!'. Fails on any other shape."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let greeting = string_arg(self.name(), args, 0)?;
        strings::extract_name(greeting)
            .map(Value::from)
            .map_err(evaluation_error(self.name()))
    }
}
