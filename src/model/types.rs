//! Type tags for dynamic values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type information for [`Value`](super::Value)s and function parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeInfo {
    /// Any type (used for polymorphic parameters)
    Any,
    /// The null value
    Null,
    /// Boolean value (true/false)
    Boolean,
    /// Integer numeric value
    Integer,
    /// Floating point numeric value
    Decimal,
    /// String value
    String,
    /// Collection type with element type
    Collection(Box<TypeInfo>),
    /// Key/value object
    Object,
}

impl TypeInfo {
    /// Check if a value of type `other` may be passed where `self` is expected
    pub fn is_compatible_with(&self, other: &TypeInfo) -> bool {
        match (self, other) {
            (TypeInfo::Any, _) | (_, TypeInfo::Any) => true,
            (TypeInfo::Collection(a), TypeInfo::Collection(b)) => a.is_compatible_with(b),
            // Integers widen to decimals
            (TypeInfo::Decimal, TypeInfo::Integer) => true,
            _ => self == other,
        }
    }

    /// Create a collection type
    pub fn collection(element_type: TypeInfo) -> Self {
        TypeInfo::Collection(Box::new(element_type))
    }

    /// Get the type name as it appears in signatures and error messages
    pub fn type_name(&self) -> String {
        match self {
            TypeInfo::Any => "Any".to_string(),
            TypeInfo::Null => "Null".to_string(),
            TypeInfo::Boolean => "Boolean".to_string(),
            TypeInfo::Integer => "Integer".to_string(),
            TypeInfo::Decimal => "Decimal".to_string(),
            TypeInfo::String => "String".to_string(),
            TypeInfo::Collection(elem) => format!("Collection<{}>", elem.type_name()),
            TypeInfo::Object => "Object".to_string(),
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_compatibility() {
        assert!(TypeInfo::String.is_compatible_with(&TypeInfo::String));
        assert!(TypeInfo::Any.is_compatible_with(&TypeInfo::Integer));
        assert!(TypeInfo::Integer.is_compatible_with(&TypeInfo::Any));
        assert!(TypeInfo::Decimal.is_compatible_with(&TypeInfo::Integer));
        assert!(!TypeInfo::Integer.is_compatible_with(&TypeInfo::Decimal));
        assert!(!TypeInfo::String.is_compatible_with(&TypeInfo::Null));
    }

    #[test]
    fn test_collection_types() {
        let strings = TypeInfo::collection(TypeInfo::String);
        assert!(strings.is_compatible_with(&TypeInfo::collection(TypeInfo::Any)));
        assert!(!strings.is_compatible_with(&TypeInfo::collection(TypeInfo::Integer)));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(TypeInfo::Integer.to_string(), "Integer");
        assert_eq!(
            TypeInfo::collection(TypeInfo::String).to_string(),
            "Collection<String>"
        );
    }
}
