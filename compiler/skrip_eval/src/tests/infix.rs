use pretty_assertions::assert_eq;

use super::eval_ok;
use crate::Value;

#[test]
fn logical_and_coerces_to_boolean() {
    let cases = [
        ("1 && 2", true),
        ("3.3 && 4.4", true),
        ("\"foo\" && \"bar\"", true),
        ("[] && []", false),
        ("[1, 2] && []", false),
        ("[1, 2] && [3, 4]", true),
        ("{} && {}", false),
        ("{1: \"a\"} && {}", false),
        ("{1: \"a\"} && {\"b\": 2}", true),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_ok(source), Value::Bool(expected), "source {source:?}");
    }
}

#[test]
fn logical_or_coerces_to_boolean() {
    let cases = [
        ("1 || 2", true),
        ("3.3 || 4.4", true),
        ("\"foo\" || \"bar\"", true),
        ("[] || []", false),
        ("[1, 2] || []", true),
        ("{} || {}", false),
        ("{1: \"a\"} || {}", true),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_ok(source), Value::Bool(expected), "source {source:?}");
    }
}

#[test]
fn integer_with_integer() {
    assert_eq!(eval_ok("1 + 2"), Value::Int(3));
    assert_eq!(eval_ok("1 - 2"), Value::Int(-1));
    assert_eq!(eval_ok("3 * 2"), Value::Int(6));
    assert_eq!(eval_ok("6 / 2"), Value::Int(3));
    assert_eq!(eval_ok("7 / 2"), Value::Int(3));

    assert_eq!(eval_ok("1 < 2"), Value::Bool(true));
    assert_eq!(eval_ok("1 > 2"), Value::Bool(false));
    assert_eq!(eval_ok("1 >= 2"), Value::Bool(false));
    assert_eq!(eval_ok("1 <= 2"), Value::Bool(true));
    assert_eq!(eval_ok("1 == 1"), Value::Bool(true));
    assert_eq!(eval_ok("1 != 2"), Value::Bool(true));
}

#[test]
fn integer_with_float_promotes_and_normalises() {
    assert_eq!(eval_ok("1 + 2.2"), Value::Float(3.2));
    assert_eq!(eval_ok("1 - 2.3"), Value::Float(-1.3));
    assert_eq!(eval_ok("3 * 2.3"), Value::Float(6.9));
    assert_eq!(eval_ok("6 / 2.5"), Value::Float(2.4));

    assert_eq!(eval_ok("1 < 2.2"), Value::Bool(true));
    assert_eq!(eval_ok("1 > 2.3"), Value::Bool(false));
    assert_eq!(eval_ok("1 >= 0.4"), Value::Bool(true));
    assert_eq!(eval_ok("1 <= 1.5"), Value::Bool(true));
    assert_eq!(eval_ok("1 == 1.0"), Value::Bool(true));
    assert_eq!(eval_ok("1 != 2.7"), Value::Bool(true));
}

#[test]
fn float_with_float_normalises_arithmetic() {
    assert_eq!(eval_ok("1.1 + 2.2"), Value::Float(3.3));
    assert_eq!(eval_ok("1.3 - 2.3"), Value::Float(-1.0));
    assert_eq!(eval_ok("3.3 * 2.3"), Value::Float(7.59));
    assert_eq!(eval_ok("6.8 / 2.5"), Value::Float(2.72));

    assert_eq!(eval_ok("1.3 < 2.2"), Value::Bool(true));
    assert_eq!(eval_ok("1.5 > 2.3"), Value::Bool(false));
    assert_eq!(eval_ok("1.7 >= 0.4"), Value::Bool(true));
    assert_eq!(eval_ok("2.5 <= 1.5"), Value::Bool(false));
    assert_eq!(eval_ok("3.3 == 3.3"), Value::Bool(true));
    assert_eq!(eval_ok("10.5 != 2.7"), Value::Bool(true));
}

#[test]
fn float_with_integer() {
    assert_eq!(eval_ok("2.2 + 1"), Value::Float(3.2));
    assert_eq!(eval_ok("2.3 - 1"), Value::Float(1.3));
    assert_eq!(eval_ok("2.3 * 3"), Value::Float(6.9));
    assert_eq!(eval_ok("8.4 / 2"), Value::Float(4.2));

    assert_eq!(eval_ok("2.2 < 1"), Value::Bool(false));
    assert_eq!(eval_ok("2.3 > 1"), Value::Bool(true));
    assert_eq!(eval_ok("1.0 == 1"), Value::Bool(true));
    assert_eq!(eval_ok("2.7 != 1"), Value::Bool(true));
}

#[test]
fn string_with_string() {
    assert_eq!(eval_ok("\"foo\" + \"bar\""), Value::string("foobar"));
    assert_eq!(eval_ok("\"a\" < \"b\""), Value::Bool(true));
    assert_eq!(eval_ok("\"a\" > \"b\""), Value::Bool(false));
    assert_eq!(eval_ok("\"a\" <= \"b\""), Value::Bool(true));
    assert_eq!(eval_ok("\"a\" >= \"b\""), Value::Bool(false));
    assert_eq!(eval_ok("\"a\" == \"b\""), Value::Bool(false));
    assert_eq!(eval_ok("\"a\" != \"b\""), Value::Bool(true));
}

#[test]
fn array_concatenation_is_non_mutating() {
    assert_eq!(
        eval_ok("[1, 2.2] + [\"foo\", \"bar\"]").inspect(),
        "[1, 2.2, foo, bar]"
    );
    assert_eq!(
        eval_ok("let a = [1]; let b = a + [2]; a").inspect(),
        "[1]"
    );
}

#[test]
fn array_equality_is_recursive() {
    let cases = [
        ("[1, 2] == [1, 2, 3]", false),
        ("[1, 2] == [1, 2]", true),
        ("[1, 2] == [3, 2]", false),
        ("[1, 2] == [1, 3]", false),
        ("[1, 2.2, \"foo\"] == [1, 2.2, \"foo\"]", true),
        ("[0.1] == [0.1]", true),
        ("[0.1] == [0.2]", false),
        ("[\"foo\"] == [\"foo\"]", true),
        ("[\"foo\"] == [\"bar\"]", false),
        ("[[1, 2]] == [[1, 2]]", true),
        ("[1, 2] != [1, 2, 3]", true),
        ("[1, 2] != [1, 2]", false),
        ("[1, 2.2, \"foo\"] != [1, 2.2, \"foo\"]", false),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_ok(source), Value::Bool(expected), "source {source:?}");
    }
}

#[test]
fn hash_merge_preserves_left_order_then_appends() {
    let value = eval_ok("let keys = []; for k, v in {\"a\": 1, \"b\": 2} + {\"c\": 3, \"a\": 9} { keys = keys + [k] }; keys");
    assert_eq!(value.inspect(), "[a, b, c]");

    assert_eq!(
        eval_ok("({\"a\": 1} + {\"a\": 9, \"b\": 2}).a"),
        Value::Int(9)
    );
}

#[test]
fn hash_equality_is_structural() {
    let cases = [
        ("{\"a\": 1} == {\"a\": 1}", true),
        ("{\"a\": 1, \"b\": 2} == {\"b\": 2, \"a\": 1}", true),
        ("{\"a\": 1} == {\"a\": 2}", false),
        ("{\"a\": 1} == {\"b\": 1}", false),
        ("{\"a\": 1} == {\"a\": 1, \"b\": 2}", false),
        ("{1: \"x\"} == {1.0: \"x\"}", false),
        ("{\"a\": 1} != {\"a\": 2}", true),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_ok(source), Value::Bool(expected), "source {source:?}");
    }
}

#[test]
fn cross_type_equality_is_false() {
    assert_eq!(eval_ok("\"1\" == 1"), Value::Bool(false));
    assert_eq!(eval_ok("\"1\" != 1"), Value::Bool(true));
    assert_eq!(eval_ok("nil == 0"), Value::Bool(false));
    assert_eq!(eval_ok("nil == nil"), Value::Bool(true));
    assert_eq!(eval_ok("true == 1"), Value::Bool(false));
}

#[test]
fn prefix_bang_follows_truthiness() {
    let cases = [
        ("!1", false),
        ("!0", true),
        ("!1.1", false),
        ("!0.0", true),
        ("!\"foo\"", false),
        ("!\"\"", true),
        ("![1,2]", false),
        ("![]", true),
        ("!{1:\"a\", 2:\"b\"}", false),
        ("!{}", true),
        ("!!\"\"", false),
        ("!!!\"\"", true),
        ("!!0", false),
        ("!!!1", false),
        ("!!0.0", false),
        ("!!!1.1", false),
        ("!nil", true),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_ok(source), Value::Bool(expected), "source {source:?}");
    }
}

#[test]
fn prefix_minus_negates_numbers() {
    assert_eq!(eval_ok("-5"), Value::Int(-5));
    assert_eq!(eval_ok("-10"), Value::Int(-10));
    assert_eq!(eval_ok("-5.5"), Value::Float(-5.5));
    assert_eq!(eval_ok("-10.10"), Value::Float(-10.10));
}

#[test]
fn prefix_plus_is_identity() {
    assert_eq!(eval_ok("+5"), Value::Int(5));
    assert_eq!(eval_ok("+10.10"), Value::Float(10.10));
    // Non-numeric operands pass through unchanged.
    assert_eq!(eval_ok("+\"foo\""), Value::string("foo"));
}
