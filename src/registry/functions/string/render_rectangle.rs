//! renderRectangle() function - draws a box with box-drawing characters

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::{count_arg, evaluation_error};
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// renderRectangle() function - draws a box with box-drawing characters
pub struct RenderRectangleFunction;

impl StringFunction for RenderRectangleFunction {
    fn name(&self) -> &str {
        "renderRectangle"
    }
    fn human_friendly_name(&self) -> &str {
        "Render Rectangle"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "renderRectangle",
                vec![
                    ParameterInfo::required("width", TypeInfo::Integer),
                    ParameterInfo::required("height", TypeInfo::Integer),
                ],
                TypeInfo::String,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Renders a width x height rectangle, one newline-terminated line per row. Both dimensions must be at least 2."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let width = count_arg(self.name(), args, 0)?;
        let height = count_arg(self.name(), args, 1)?;
        strings::render_rectangle(width, height)
            .map(Value::String)
            .map_err(evaluation_error(self.name()))
    }
}
