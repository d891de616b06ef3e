//! Behavioural tests driving the full lex -> parse -> eval pipeline.

mod infix;
mod literals;

use skrip_lexer::Lexer;
use skrip_parse::parse;

use crate::{eval_program, ControlAction, Env, EvalResult, Value};

/// Evaluate a source string in a fresh environment.
pub(crate) fn eval_source(source: &str) -> EvalResult {
    eval_source_with_env(source, &Env::new())
}

pub(crate) fn eval_source_with_env(source: &str, env: &Env) -> EvalResult {
    let (program, errors) = parse(Lexer::new(source));
    assert!(
        errors.is_empty(),
        "unexpected parse errors for {source:?}: {errors:?}"
    );
    eval_program(&program, env)
}

/// Evaluate and unwrap, panicking on runtime errors.
pub(crate) fn eval_ok(source: &str) -> Value {
    match eval_source(source) {
        Ok(value) => value,
        Err(action) => panic!("evaluation of {source:?} failed: {action:?}"),
    }
}

/// Evaluate a source expected to fail; returns the bare error message.
pub(crate) fn eval_err(source: &str) -> String {
    match eval_source(source) {
        Err(ControlAction::Failure(error)) => error.message,
        other => panic!("expected a runtime error for {source:?}, got {other:?}"),
    }
}
