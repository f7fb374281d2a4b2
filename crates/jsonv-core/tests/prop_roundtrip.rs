/// Property-Based Roundtrip Tests
///
/// Uses `proptest` to build random `Value` trees and check that
/// `parse(to_text(v)) == v` holds, and that the canonical text is a fixed
/// point of parse → to_text.
///
/// Strategies generate:
/// - Arbitrary Unicode strings (control characters included)
/// - Finite `f32` numbers across the whole range
/// - Booleans and null
/// - Nested lists and maps up to 4 levels deep
///
/// NaN and infinities are excluded: they have no JSON spelling and
/// `to_text` rejects them.
use jsonv_core::{parse, Map, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_finite_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        any::<f32>().prop_filter("must be finite", |f| f.is_finite()),
        (-1_000_000i32..1_000_000i32).prop_map(|n| n as f32),
        (-10_000i32..10_000i32).prop_map(|n| n as f32 / 100.0),
    ]
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        any::<String>(),
        Just("\"quoted\"".to_string()),
        Just("back\\slash/forward".to_string()),
        Just("\u{0}\u{1f}\u{7f}".to_string()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_finite_f32().prop_map(Value::Number),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::List),
            prop::collection::vec((arb_string(), inner), 0..8)
                .prop_map(|entries| Value::Map(entries.into_iter().collect::<Map>())),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_value_roundtrips(value in arb_value()) {
        let text = value.to_text().unwrap();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed, value, "text: {}", text);
    }

    #[test]
    fn prop_canonical_text_is_fixed_point(value in arb_value()) {
        let once = value.to_text().unwrap();
        let twice = parse(&once).unwrap().to_text().unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_numbers_roundtrip_exactly(n in arb_finite_f32()) {
        let text = Value::Number(n).to_text().unwrap();
        let parsed = parse(&text).unwrap().as_number().unwrap();
        prop_assert_eq!(parsed, n, "text: {}", text);
    }

    #[test]
    fn prop_canonical_text_is_valid_json(value in arb_value()) {
        let text = value.to_text().unwrap();
        prop_assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok(), "text: {}", text);
    }

    #[test]
    fn prop_parse_never_panics(input in "\\PC{0,64}") {
        let _ = parse(&input);
    }
}
