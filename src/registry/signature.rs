//! Function signatures for arity and type checking

use crate::model::TypeInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Function signature used to validate arguments before evaluation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Function name
    pub name: String,
    /// Parameter types
    pub parameters: Vec<ParameterInfo>,
    /// Return type
    pub return_type: TypeInfo,
    /// Minimum number of arguments
    pub min_arity: usize,
    /// Maximum number of arguments
    pub max_arity: usize,
}

/// Parameter information for functions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name
    pub name: String,
    /// Parameter type
    pub param_type: TypeInfo,
    /// Whether this parameter is optional
    pub optional: bool,
}

impl FunctionSignature {
    /// Create a new function signature
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<ParameterInfo>,
        return_type: TypeInfo,
    ) -> Self {
        let required_params = parameters.iter().filter(|p| !p.optional).count();
        let max_arity = parameters.len();

        Self {
            name: name.into(),
            parameters,
            return_type,
            min_arity: required_params,
            max_arity,
        }
    }
}

impl ParameterInfo {
    /// Create a required parameter
    pub fn required(name: impl Into<String>, param_type: TypeInfo) -> Self {
        Self {
            name: name.into(),
            param_type,
            optional: false,
        }
    }

    /// Create an optional parameter
    pub fn optional(name: impl Into<String>, param_type: TypeInfo) -> Self {
        Self {
            name: name.into(),
            param_type,
            optional: true,
        }
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", param.name, param.param_type)?;
            if param.optional {
                write!(f, "?")?;
            }
        }
        write!(f, ") -> {}", self.return_type)
    }
}
