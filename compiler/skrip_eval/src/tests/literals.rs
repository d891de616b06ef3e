use pretty_assertions::assert_eq;

use super::{eval_err, eval_ok, eval_source_with_env};
use crate::{register_builtin, Env, Value};

#[test]
fn integer_literals() {
    assert_eq!(eval_ok("5"), Value::Int(5));
    assert_eq!(eval_ok("10"), Value::Int(10));
}

#[test]
fn float_literals() {
    assert_eq!(eval_ok("5.0"), Value::Float(5.0));
    assert_eq!(eval_ok("10.3"), Value::Float(10.3));
}

#[test]
fn string_literals() {
    assert_eq!(eval_ok("\"foo\""), Value::string("foo"));
    assert_eq!(eval_ok("\"foobar\""), Value::string("foobar"));
    assert_eq!(eval_ok("\"\""), Value::string(""));
}

#[test]
fn boolean_and_nil_literals() {
    assert_eq!(eval_ok("true"), Value::Bool(true));
    assert_eq!(eval_ok("false"), Value::Bool(false));
    assert_eq!(eval_ok("nil"), Value::Nil);
}

#[test]
fn unknown_identifiers_error() {
    assert_eq!(eval_err("foo"), "Identifier not found: foo");
    assert_eq!(eval_err("foobar"), "Identifier not found: foobar");
}

#[test]
fn identifiers_resolve_from_a_prepared_environment() {
    let env = Env::new();
    env.set("foo", Value::string("fooString"));
    env.set("bar", Value::Int(5));

    assert_eq!(
        eval_source_with_env("foo", &env),
        Ok(Value::string("fooString"))
    );
    assert_eq!(eval_source_with_env("bar", &env), Ok(Value::Int(5)));
}

#[test]
fn registered_builtins_resolve_after_the_lexical_chain() {
    fn foo_function(_env: &Env, _arguments: &[Value]) -> crate::EvalResult {
        Ok(Value::string("foo function"))
    }
    register_builtin("fooFunction", foo_function);

    assert!(matches!(eval_ok("fooFunction"), Value::Builtin(_)));
    assert_eq!(eval_ok("fooFunction()"), Value::string("foo function"));

    // A lexical binding shadows the builtin.
    let env = Env::new();
    env.set("fooFunction", Value::Int(1));
    assert_eq!(eval_source_with_env("fooFunction", &env), Ok(Value::Int(1)));
}

#[test]
fn let_statements_evaluate_to_the_bound_value() {
    assert_eq!(eval_ok("let a = 5;"), Value::Int(5));
    assert_eq!(eval_ok("let b = 5.5;"), Value::Float(5.5));
    assert_eq!(eval_ok("let c = \"foo\";"), Value::string("foo"));
    assert_eq!(eval_ok("let a = 1; let b = 2;"), Value::Int(2));
}

#[test]
fn program_value_is_the_last_statement() {
    assert_eq!(eval_ok("let a = \"foo\"; return a;"), Value::string("foo"));
    assert_eq!(eval_ok("let x = 5; let y = 10; x + y"), Value::Int(15));
}
