//! cardIndex() function - position of a card in a fresh deck

use crate::model::{TypeInfo, Value};
use crate::registry::function::{FunctionResult, StringFunction};
use crate::registry::functions::{evaluation_error, integer_value, string_arg};
use crate::registry::signature::{FunctionSignature, ParameterInfo};
use crate::strings;
use std::sync::LazyLock;

/// cardIndex() function - position of a card in a fresh deck
pub struct CardIndexFunction;

impl StringFunction for CardIndexFunction {
    fn name(&self) -> &str {
        "cardIndex"
    }
    fn human_friendly_name(&self) -> &str {
        "Card Index"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "cardIndex",
                vec![ParameterInfo::required("card", TypeInfo::String)],
                TypeInfo::Integer,
            )
        });
        &SIG
    }
    fn documentation(&self) -> &str {
        "Returns the zero-based index of a card such as 'A♣' or '10♥' in a deck ordered \
         clubs, diamonds, hearts, spades with ranks A, 2..10, J, Q, K."
    }
    fn is_pure(&self) -> bool {
        true
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        self.validate_args(args)?;
        let card = string_arg(self.name(), args, 0)?;
        let index = strings::card_index(card).map_err(evaluation_error(self.name()))?;
        integer_value(self.name(), index)
    }
}
