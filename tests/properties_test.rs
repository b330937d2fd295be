//! Property tests over generated JSON values.

use mustbe::{is, kind, Assertion, Is, ValuePath};
use proptest::prelude::*;
use serde_json::Value;

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        (-1.0e9f64..1.0e9).prop_map(|f| serde_json::json!(f)),
        "[a-zA-Z0-9_ ]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Checks that a primitive accepts `value` exactly when `matches` holds.
fn check_kind<A: Assertion>(
    assertion: &A,
    value: &Value,
    expected_kind: &str,
    matches: bool,
) -> Result<(), TestCaseError> {
    match is(value, assertion, "x") {
        Ok(_) => {
            prop_assert!(matches, "accepted {}", value);
        }
        Err(err) => {
            prop_assert!(!matches, "rejected {}", value);
            let failure = err.as_assertion().expect("validation failure");
            prop_assert_eq!(failure.kind.as_str(), expected_kind);
            prop_assert_eq!(failure.path.to_string(), "x");
            prop_assert_eq!(&failure.value, value);
        }
    }
    Ok(())
}

proptest! {
    /// Every boolean passes the boolean assertion unchanged.
    #[test]
    fn boolean_returns_input(b in any::<bool>()) {
        prop_assert_eq!(is(&Value::Bool(b), &Is::boolean(), "x").ok(), Some(b));
    }

    /// Each primitive accepts exactly its own JSON kind.
    #[test]
    fn primitives_match_their_kind(value in json_value()) {
        check_kind(&Is::boolean(), &value, kind::BOOLEAN, value.is_boolean())?;
        check_kind(&Is::number(), &value, kind::NUMBER, value.is_number())?;
        check_kind(&Is::string(), &value, kind::STRING, value.is_string())?;
        check_kind(&Is::array(), &value, kind::ARRAY, value.is_array())?;
        check_kind(&Is::object(), &value, kind::OBJECT, value.is_object())?;
    }

    /// Validation never alters its input.
    #[test]
    fn validation_does_not_mutate(value in json_value()) {
        let snapshot = value.clone();
        let schema = Is::either(
            Is::object_of(Is::maybe(Is::string())),
            Is::array_of(Is::number()),
        );
        let _ = is(&value, &schema, "v");
        prop_assert_eq!(value, snapshot);
    }

    /// `maybe` accepts whatever its inner assertion accepts, plus null.
    #[test]
    fn maybe_widens_inner(value in json_value()) {
        let inner = Is::number().assert(&value, &ValuePath::named("m")).is_ok();
        let wrapped = Is::maybe(Is::number()).assert(&value, &ValuePath::named("m")).is_ok();
        prop_assert_eq!(wrapped, inner || value.is_null());
    }

    /// Re-validating validated output succeeds and yields the same value.
    #[test]
    fn array_of_is_idempotent(items in prop::collection::vec(any::<i32>(), 0..16)) {
        let schema = Is::array_of(Is::number());
        let path = ValuePath::named("xs");
        let input = serde_json::json!(items);

        let once = schema.assert_to_value(&input, &path).unwrap();
        let twice = schema.assert_to_value(&once, &path).unwrap();
        prop_assert_eq!(&once, &input);
        prop_assert_eq!(once, twice);
    }

    /// Object outputs keep the input's key set.
    #[test]
    fn object_of_keeps_keys(
        map in prop::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..8)
    ) {
        let input = Value::Object(
            map.iter().map(|(k, v)| (k.clone(), Value::Bool(*v))).collect(),
        );
        let out = is(&input, &Is::object_of(Is::boolean()), "o").unwrap();
        let keys: Vec<&String> = out.keys().collect();
        let expected: Vec<&String> = map.keys().collect();
        prop_assert_eq!(keys, expected);
    }
}
