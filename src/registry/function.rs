//! Function trait, errors and the name-based registry

use crate::error::StringTaskError;
use crate::model::Value;
use crate::registry::cache::{
    CacheConfig, CacheStats, FunctionResultCache, generate_result_cache_key,
};
use crate::registry::signature::FunctionSignature;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for function operations
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Function evaluation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// No function is registered under the name
    #[error("Unknown function '{name}'")]
    UnknownFunction {
        /// Function name
        name: String,
    },

    /// Invalid number of arguments
    #[error("Function '{name}' expects {min}-{max} arguments, got {actual}")]
    InvalidArity {
        /// Function name
        name: String,
        /// Minimum arguments
        min: usize,
        /// Maximum arguments
        max: usize,
        /// Actual arguments provided
        actual: usize,
    },

    /// Invalid argument type
    #[error("Function '{name}' argument {index} expects {expected}, got {actual}")]
    InvalidArgumentType {
        /// Function name
        name: String,
        /// Argument index
        index: usize,
        /// Expected type
        expected: String,
        /// Actual type
        actual: String,
    },

    /// Argument has the right type but an unusable value
    #[error("Function '{name}' argument {index} is invalid: {message}")]
    InvalidArgumentValue {
        /// Function name
        name: String,
        /// Argument index
        index: usize,
        /// Error message
        message: String,
    },

    /// The result cannot be represented as a [`Value`]
    #[error("Function '{name}' result {value} does not fit in an Integer")]
    ResultOutOfRange {
        /// Function name
        name: String,
        /// Result that was out of range
        value: usize,
    },

    /// The underlying string operation rejected its input
    #[error("Function '{name}' evaluation error: {source}")]
    Evaluation {
        /// Function name
        name: String,
        /// Operation error
        #[source]
        source: StringTaskError,
    },
}

/// Trait for functions callable through the [`FunctionRegistry`]
pub trait StringFunction: Send + Sync {
    /// Get the function name
    fn name(&self) -> &str;

    /// Get the human-friendly name for the function (for listings and documentation)
    fn human_friendly_name(&self) -> &str;

    /// Get the function signature
    fn signature(&self) -> &FunctionSignature;

    /// Evaluate the function with given arguments
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value>;

    /// Get function documentation
    fn documentation(&self) -> &str {
        ""
    }

    /// Check if this function is pure (deterministic with no side effects)
    /// Pure functions can be safely cached based on their arguments
    fn is_pure(&self) -> bool {
        false // Default to non-pure for safety
    }

    /// Validate arguments before evaluation (both arity and types)
    fn validate_args(&self, args: &[Value]) -> FunctionResult<()> {
        let sig = self.signature();
        let arg_count = args.len();

        if arg_count < sig.min_arity || arg_count > sig.max_arity {
            return Err(FunctionError::InvalidArity {
                name: self.name().to_string(),
                min: sig.min_arity,
                max: sig.max_arity,
                actual: arg_count,
            });
        }

        for (i, arg) in args.iter().enumerate() {
            if let Some(param) = sig.parameters.get(i) {
                let arg_type = arg.to_type_info();
                if !param.param_type.is_compatible_with(&arg_type) {
                    return Err(FunctionError::InvalidArgumentType {
                        name: self.name().to_string(),
                        index: i,
                        expected: param.param_type.to_string(),
                        actual: arg_type.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Registry of functions addressable by name
#[derive(Clone)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, Arc<dyn StringFunction>>,
    result_cache: FunctionResultCache,
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("function_count", &self.functions.len())
            .field("result_cache", &self.result_cache)
            .finish()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a new registry with custom cache configuration
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            functions: FxHashMap::default(),
            result_cache: FunctionResultCache::new(&config),
        }
    }

    /// Register a function, replacing any function with the same name
    pub fn register<F: StringFunction + 'static>(&mut self, function: F) {
        let name = function.name().to_string();
        log::debug!("Registering function {}", function.signature());
        if self.functions.insert(name, Arc::new(function)).is_some() {
            // Cached results may belong to the replaced implementation
            self.result_cache.clear();
        }
    }

    /// Get a function by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn StringFunction>> {
        self.functions.get(name)
    }

    /// Check if a function exists
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry has no functions
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Get all registered function names, sorted
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get all signatures, sorted by function name
    pub fn signatures(&self) -> Vec<&FunctionSignature> {
        self.function_names()
            .into_iter()
            .filter_map(|name| self.functions.get(name))
            .map(|function| function.signature())
            .collect()
    }

    /// Current result cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.result_cache.stats()
    }

    /// Clear the result cache
    pub fn clear_cache(&self) {
        self.result_cache.clear();
    }

    /// Evaluate a function by name
    ///
    /// Arguments are validated against the function signature first. Results of
    /// pure functions are served from the result cache when caching is enabled.
    pub fn evaluate_function(&self, name: &str, args: &[Value]) -> FunctionResult<Value> {
        let function = self
            .get(name)
            .ok_or_else(|| FunctionError::UnknownFunction {
                name: name.to_string(),
            })?;

        function.validate_args(args)?;
        log::trace!("Evaluating {name} with {} argument(s)", args.len());

        let cache_key = if function.is_pure() && self.result_cache.is_enabled() {
            generate_result_cache_key(name, args)
        } else {
            None
        };

        let Some(key) = cache_key else {
            return function.evaluate(args);
        };

        if let Some(cached) = self.result_cache.get(&key) {
            log::debug!("Result cache hit for {name}");
            return Ok(cached);
        }

        let result = function.evaluate(args)?;
        self.result_cache.insert(key, result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeInfo;
    use crate::registry::signature::ParameterInfo;
    use std::sync::LazyLock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts its evaluations so tests can observe caching
    struct CountingFunction {
        calls: Arc<AtomicUsize>,
        pure: bool,
    }

    impl StringFunction for CountingFunction {
        fn name(&self) -> &str {
            "count"
        }
        fn human_friendly_name(&self) -> &str {
            "Count"
        }
        fn signature(&self) -> &FunctionSignature {
            static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
                FunctionSignature::new(
                    "count",
                    vec![ParameterInfo::required("value", TypeInfo::String)],
                    TypeInfo::Integer,
                )
            });
            &SIG
        }
        fn is_pure(&self) -> bool {
            self.pure
        }
        fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
            self.validate_args(args)?;
            self.calls.fetch_add(1, Ordering::SeqCst);
            let text = args[0].as_str().unwrap_or_default();
            Ok(Value::Integer(text.len() as i64))
        }
    }

    fn registry_with_counter(config: CacheConfig, pure: bool) -> (FunctionRegistry, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = FunctionRegistry::with_config(config);
        registry.register(CountingFunction {
            calls: calls.clone(),
            pure,
        });
        (registry, calls)
    }

    #[test]
    fn test_unknown_function() {
        let registry = FunctionRegistry::new();
        assert_eq!(
            registry.evaluate_function("missing", &[]),
            Err(FunctionError::UnknownFunction {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_arity_and_type_validation() {
        let (registry, calls) = registry_with_counter(CacheConfig::testing(), true);

        let err = registry.evaluate_function("count", &[]).unwrap_err();
        assert_eq!(
            err,
            FunctionError::InvalidArity {
                name: "count".to_string(),
                min: 1,
                max: 1,
                actual: 0,
            }
        );
        assert_eq!(err.to_string(), "Function 'count' expects 1-1 arguments, got 0");

        let err = registry
            .evaluate_function("count", &[Value::Integer(1)])
            .unwrap_err();
        assert_eq!(
            err,
            FunctionError::InvalidArgumentType {
                name: "count".to_string(),
                index: 0,
                expected: "String".to_string(),
                actual: "Integer".to_string(),
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_pure_results_are_cached() {
        let (registry, calls) = registry_with_counter(CacheConfig::testing(), true);
        let args = [Value::from("abc")];

        assert_eq!(registry.evaluate_function("count", &args), Ok(Value::Integer(3)));
        assert_eq!(registry.evaluate_function("count", &args), Ok(Value::Integer(3)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(registry.cache_stats().hits, 1);

        registry.clear_cache();
        assert_eq!(registry.evaluate_function("count", &args), Ok(Value::Integer(3)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_impure_results_are_not_cached() {
        let (registry, calls) = registry_with_counter(CacheConfig::testing(), false);
        let args = [Value::from("abc")];

        registry.evaluate_function("count", &args).unwrap();
        registry.evaluate_function("count", &args).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(registry.cache_stats().size, 0);
    }

    #[test]
    fn test_disabled_cache_always_evaluates() {
        let (registry, calls) = registry_with_counter(CacheConfig::disabled(), true);
        let args = [Value::from("abc")];

        registry.evaluate_function("count", &args).unwrap();
        registry.evaluate_function("count", &args).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_registry_lookup() {
        let (registry, _) = registry_with_counter(CacheConfig::testing(), true);
        assert!(registry.contains("count"));
        assert!(!registry.contains("Count"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.function_names(), vec!["count"]);
        assert_eq!(registry.signatures()[0].name, "count");
        assert_eq!(registry.get("count").map(|f| f.human_friendly_name()), Some("Count"));
    }
}
