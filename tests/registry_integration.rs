//! Integration tests for calling string functions through the registry
//!
//! These tests use only the public API and exercise every built-in function by name.

use pretty_assertions::assert_eq;
use rstest::rstest;
use string_tasks::registry::{CacheConfig, FunctionError, create_registry_with_config};
use string_tasks::{MAX_RESULT_BYTES, StringTaskError, Value, create_standard_registry};

fn s(value: &str) -> Value {
    Value::from(value)
}

#[rstest]
#[case("concatenate", vec![s("aa"), s("bb")], s("aabb"))]
#[case("length", vec![s("aaaaa")], Value::Integer(5))]
#[case("length", vec![s("")], Value::Integer(0))]
#[case("greet", vec![s("John"), s("Doe")], s("Hello, John Doe!"))]
#[case("extractName", vec![s("Hello, Chuck Norris!")], s("Chuck Norris"))]
#[case("firstChar", vec![s("cat")], s("c"))]
#[case("trim", vec![s("\tHello, World! ")], s("Hello, World!"))]
#[case("repeat", vec![s("cat"), Value::Integer(3)], s("catcatcat"))]
#[case("removeFirstOccurrence", vec![s("To be or not to be"), s("not")], s("To be or  to be"))]
#[case("unbracketTag", vec![s("<span>")], s("span"))]
#[case("toUpperCase", vec![s("Thunderstruck")], s("THUNDERSTRUCK"))]
#[case("renderRectangle", vec![Value::Integer(2), Value::Integer(2)], s("┌┐\n└┘\n"))]
#[case("rot13", vec![s("hello")], s("uryyb"))]
#[case("isStringType", vec![s("test")], Value::Boolean(true))]
#[case("isStringType", vec![Value::Null], Value::Boolean(false))]
#[case("cardIndex", vec![s("Q♠")], Value::Integer(50))]
fn test_builtin_functions(#[case] name: &str, #[case] args: Vec<Value>, #[case] expected: Value) {
    let registry = create_standard_registry();
    assert_eq!(registry.evaluate_function(name, &args), Ok(expected));
}

#[test]
fn test_split_emails_through_registry() {
    let registry = create_standard_registry();
    let result = registry
        .evaluate_function(
            "splitEmails",
            &[s("angus.young@gmail.com;brian.johnson@hotmail.com;bon.scott@yahoo.com")],
        )
        .unwrap();

    assert_eq!(
        result,
        Value::strings([
            "angus.young@gmail.com",
            "brian.johnson@hotmail.com",
            "bon.scott@yahoo.com",
        ])
    );
}

#[test]
fn test_operation_errors_are_wrapped() {
    let registry = create_standard_registry();

    assert_eq!(
        registry.evaluate_function("firstChar", &[s("")]),
        Err(FunctionError::Evaluation {
            name: "firstChar".to_string(),
            source: StringTaskError::EmptyInput {
                operation: "first_char"
            },
        })
    );

    assert_eq!(
        registry.evaluate_function("cardIndex", &[s("1♣")]),
        Err(FunctionError::Evaluation {
            name: "cardIndex".to_string(),
            source: StringTaskError::InvalidCard("1♣".to_string()),
        })
    );

    assert_eq!(
        registry.evaluate_function("renderRectangle", &[Value::Integer(1), Value::Integer(4)]),
        Err(FunctionError::Evaluation {
            name: "renderRectangle".to_string(),
            source: StringTaskError::InvalidRectangle {
                width: 1,
                height: 4
            },
        })
    );
}

#[rstest]
#[case("repeat", vec![s("ab"), Value::Integer(i64::MAX)], "repeat")]
#[case("repeat", vec![s("x"), Value::Integer(1 << 40)], "repeat")]
#[case("renderRectangle", vec![Value::Integer(i64::MAX), Value::Integer(3)], "render_rectangle")]
#[case("renderRectangle", vec![Value::Integer(3), Value::Integer(i64::MAX)], "render_rectangle")]
fn test_oversized_results_are_errors(
    #[case] name: &str,
    #[case] args: Vec<Value>,
    #[case] operation: &'static str,
) {
    let registry = create_standard_registry();
    assert_eq!(
        registry.evaluate_function(name, &args),
        Err(FunctionError::Evaluation {
            name: name.to_string(),
            source: StringTaskError::ResultTooLarge {
                operation,
                limit: MAX_RESULT_BYTES,
            },
        })
    );
}

#[test]
fn test_argument_validation() {
    let registry = create_standard_registry();

    assert!(matches!(
        registry.evaluate_function("concatenate", &[s("a")]),
        Err(FunctionError::InvalidArity {
            min: 2,
            max: 2,
            actual: 1,
            ..
        })
    ));

    assert!(matches!(
        registry.evaluate_function("rot13", &[Value::Integer(13)]),
        Err(FunctionError::InvalidArgumentType { index: 0, .. })
    ));

    assert!(matches!(
        registry.evaluate_function("renderRectangle", &[Value::Integer(-3), Value::Integer(4)]),
        Err(FunctionError::InvalidArgumentValue { index: 0, .. })
    ));

    assert_eq!(
        registry.evaluate_function("getCardId", &[s("A♣")]),
        Err(FunctionError::UnknownFunction {
            name: "getCardId".to_string()
        })
    );
}

#[test]
fn test_error_messages_name_the_function() {
    let registry = create_standard_registry();
    let err = registry
        .evaluate_function("extractName", &[s("Hi there")])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Function 'extractName' evaluation error: 'Hi there' is not a greeting of the form 'Hello, <first> <last>!'"
    );
}

#[test]
fn test_repeated_calls_hit_the_cache() {
    let registry = create_registry_with_config(CacheConfig::testing());
    let args = [s("Why did the chicken cross the road?")];

    let first = registry.evaluate_function("rot13", &args).unwrap();
    let second = registry.evaluate_function("rot13", &args).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, s("Jul qvq gur puvpxra pebff gur ebnq?"));
    let stats = registry.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.size, 1);
}

#[test]
fn test_failed_calls_are_not_cached() {
    let registry = create_registry_with_config(CacheConfig::testing());
    assert!(registry.evaluate_function("firstChar", &[s("")]).is_err());
    assert_eq!(registry.cache_stats().size, 0);
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(create_standard_registry());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                let text = format!("thread {i}");
                let encoded = registry.evaluate_function("rot13", &[Value::from(text.clone())])?;
                registry.evaluate_function("rot13", &[encoded]).map(|decoded| (text, decoded))
            })
        })
        .collect();

    for handle in handles {
        let (text, decoded) = handle.join().unwrap().unwrap();
        assert_eq!(decoded, Value::from(text));
    }
}
