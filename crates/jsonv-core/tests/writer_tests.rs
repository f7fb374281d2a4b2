use jsonv_core::{parse, Value, ValueError};

fn text(value: &Value) -> String {
    value.to_text().expect("value should serialize")
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn write_literals() {
    assert_eq!(text(&Value::Null), "null");
    assert_eq!(text(&Value::Bool(true)), "true");
    assert_eq!(text(&Value::Bool(false)), "false");
}

#[test]
fn write_integral_numbers_without_fraction() {
    assert_eq!(text(&Value::Number(0.0)), "0");
    assert_eq!(text(&Value::Number(42.0)), "42");
    assert_eq!(text(&Value::Number(-7.0)), "-7");
}

#[test]
fn write_fractional_numbers() {
    assert_eq!(text(&Value::Number(0.5)), "0.5");
    assert_eq!(text(&Value::Number(3.14)), "3.14");
    assert_eq!(text(&Value::Number(-0.25)), "-0.25");
}

#[test]
fn write_large_number_without_exponent() {
    let v = parse("123456789012").unwrap();
    assert_eq!(text(&v), "123456790000");
    assert_eq!(text(&Value::Number(1e20)), "100000000000000000000");
}

#[test]
fn write_small_number_without_exponent() {
    assert_eq!(text(&Value::Number(1e-5)), "0.00001");
}

#[test]
fn non_finite_numbers_are_malformed() {
    for n in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let err = Value::Number(n).to_text().unwrap_err();
        assert!(matches!(err, ValueError::Malformed(_)), "{err}");
    }
}

#[test]
fn malformed_number_inside_container_fails_whole_write() {
    let mut list = Value::new_list();
    list.add_number(1.0).unwrap();
    list.add_number(f32::NAN).unwrap();
    assert!(list.to_text().is_err());
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn write_plain_string() {
    assert_eq!(text(&Value::new_string("hello")), r#""hello""#);
}

#[test]
fn write_escapes_quote_and_backslash() {
    assert_eq!(
        text(&Value::new_string(r#"say "hi" \ bye"#)),
        r#""say \"hi\" \\ bye""#
    );
}

#[test]
fn write_control_character_escapes() {
    assert_eq!(
        text(&Value::new_string("\u{08}\u{0C}\n\r\t")),
        r#""\b\f\n\r\t""#
    );
}

#[test]
fn write_other_control_characters_as_hex() {
    assert_eq!(text(&Value::new_string("\u{01}")), "\"\\u0001\"");
    assert_eq!(text(&Value::new_string("\u{1f}")), "\"\\u001f\"");
}

#[test]
fn write_slash_and_unicode_literally() {
    assert_eq!(
        text(&Value::new_string("a/b caf\u{e9} \u{1F600}")),
        "\"a/b caf\u{e9} \u{1F600}\""
    );
}

#[test]
fn escaped_newline_and_tab_reescape_to_same_form() {
    let source = r#""a\n\tb""#;
    let v = parse(source).unwrap();
    assert_eq!(v.as_string().unwrap(), "a\n\tb");
    assert_eq!(text(&v), source);
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn write_empty_containers() {
    assert_eq!(text(&Value::new_list()), "[]");
    assert_eq!(text(&Value::new_map()), "{}");
}

#[test]
fn write_list_with_separators() {
    let v = parse("[1,true,null]").unwrap();
    assert_eq!(text(&v), "[1, true, null]");
}

#[test]
fn write_map_with_separators_in_insertion_order() {
    let mut m = Value::new_map();
    m.set_string("name", "com.example.tools").unwrap();
    m.set_string("version", "0.1.0").unwrap();
    m.set_bool("hidden", false).unwrap();
    assert_eq!(
        text(&m),
        r#"{"name" : "com.example.tools", "version" : "0.1.0", "hidden" : false}"#
    );
}

#[test]
fn write_escapes_map_keys() {
    let mut m = Value::new_map();
    m.set_number("a\"b", 1.0).unwrap();
    assert_eq!(text(&m), r#"{"a\"b" : 1}"#);
}

#[test]
fn write_nested_structure() {
    let v = parse(r#"{"a":[{"b":[]},{}],"c":{"d":"e"}}"#).unwrap();
    assert_eq!(
        text(&v),
        r#"{"a" : [{"b" : []}, {}], "c" : {"d" : "e"}}"#
    );
}

#[test]
fn canonical_text_is_a_fixed_point() {
    let v = parse(r#"{ "x" :[ 1 , 2.5 ,"s" ] , "y":{ } }"#).unwrap();
    let once = text(&v);
    let twice = text(&parse(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn canonical_text_is_valid_json() {
    let v = parse(r#"{"list":[1,2.5,"x\n",null,true],"m":{"k":{}}}"#).unwrap();
    let out = text(&v);
    let reparsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        reparsed,
        serde_json::json!({"list": [1, 2.5, "x\n", null, true], "m": {"k": {}}})
    );
}
