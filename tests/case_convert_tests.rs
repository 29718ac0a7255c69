//! Behaviour of the public conversion API on the documented scenarios.

use camelsnake::{CaseConverter, CaseMode, convert};

#[test]
fn test_documented_camel_scenarios() {
    assert_eq!(convert("hello_world", CaseMode::ToCamel), "helloWorld");
    assert_eq!(convert("a_1", CaseMode::ToCamel), "a_1");
    assert_eq!(convert("_leading", CaseMode::ToCamel), "_leading");
}

#[test]
fn test_documented_snake_scenarios() {
    assert_eq!(convert("helloWorld", CaseMode::ToSnake), "hello_world");
    assert_eq!(convert("HelloWorld", CaseMode::ToSnake), "Hello_world");
    assert_eq!(convert("already_snake", CaseMode::ToSnake), "already_snake");
}

#[test]
fn test_empty_input() {
    for mode in CaseMode::all() {
        assert_eq!(convert("", *mode), "");
    }
}

#[test]
fn test_not_a_fixed_point() {
    let once = convert("foo_bar_baz", CaseMode::ToCamel).into_owned();
    assert_eq!(once, "fooBarBaz");

    let once = convert("x_y_z", CaseMode::ToCamel).into_owned();
    let twice = convert(&once, CaseMode::ToCamel).into_owned();
    assert_eq!(once, "xY_z");
    assert_eq!(twice, "xYZ");
}

#[test]
fn test_source_snippet_to_camel() {
    let source = "\
fn parse_key_combo(raw_input: &str) -> Result<KeyCombo, ParseError> {
    let trimmed_input = raw_input.trim();
    let _unused = MAX_LEN;
}
";
    let expected = "\
fn parseKeyCombo(rawInput: &str) -> Result<KeyCombo, ParseError> {
    let trimmedInput = rawInput.trim();
    let _unused = MAX_LEN;
}
";
    assert_eq!(convert(source, CaseMode::ToCamel), expected);
}

#[test]
fn test_source_snippet_to_snake() {
    let source = "const userName = getUserName(userId);\n";
    let expected = "const user_name = get_user_name(user_id);\n";
    assert_eq!(convert(source, CaseMode::ToSnake), expected);
}

#[test]
fn test_converter_holds_mode_between_calls() {
    let mut converter = CaseConverter::new(CaseMode::ToSnake);
    assert_eq!(converter.convert("oneTwo"), "one_two");
    assert_eq!(converter.convert("threeFour"), "three_four");

    converter.set_mode(CaseMode::ToCamel);
    assert_eq!(converter.convert("one_two"), "oneTwo");
}
