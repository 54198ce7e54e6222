//! splitEmails() function - splits a `;`-delimited e-mail list

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::string_arg;
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// splitEmails() function - splits a `;`-delimited e-mail list
pub struct SplitEmailsFunction;

impl StringFunction for SplitEmailsFunction {
    fn name(&self) -> &str {
        "splitEmails"
    }
    fn human_friendly_name(&self) -> &str {
        "Split E-mails"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "splitEmails",
                vec![ParameterInfo::required("emails", TypeInfo::String)],
                TypeInfo::collection(TypeInfo::String),
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Splits the string on ';'. Entries are returned as-is, without trimming or validation."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let emails = string_arg(self.name(), args, 0)?;
        Ok(Value::strings(strings::split_emails(emails)))
    }
}
