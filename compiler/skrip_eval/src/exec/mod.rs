//! Tree-walking evaluation.
//!
//! `eval_program` drives statements in order. Non-local outcomes ride the
//! `Err` channel: `?` propagates them out of nested evaluation, loops
//! intercept `Break`/`Continue`, and the function-call boundary in
//! [`expr::apply_function`] unwraps `Return` exactly once. The program
//! boundary unwraps a stray `Return` and quietly turns a stray
//! `break`/`continue` into `nil`.

mod control;
mod expr;

pub use expr::apply_function;

use skrip_ir::{Block, Expression, Program, Statement};
use tracing::trace;

use crate::environment::Env;
use crate::errors::{ControlAction, EvalResult};
use crate::operators::{evaluate_infix, evaluate_prefix};
use crate::value::{FunctionValue, Value};

/// Evaluate a program against an environment, producing the value of its
/// last statement.
pub fn eval_program(program: &Program, env: &Env) -> EvalResult {
    trace!(statements = program.statements.len(), "evaluating program");

    let mut result = Value::Nil;
    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = value,
            Err(ControlAction::Return(value)) => return Ok(value),
            Err(ControlAction::Break | ControlAction::Continue) => return Ok(Value::Nil),
            Err(failure) => return Err(failure),
        }
    }

    Ok(result)
}

/// Evaluate the statements of a block in order. Any control action
/// short-circuits and propagates unchanged - the enclosing loop or call
/// boundary decides what to do with it.
pub fn eval_block(block: &Block, env: &Env) -> EvalResult {
    let mut result = Value::Nil;
    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }
    Ok(result)
}

fn eval_statement(statement: &Statement, env: &Env) -> EvalResult {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            Ok(env.set(name.clone(), value))
        }
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Err(ControlAction::Return(value))
        }
        Statement::Function { name, function } => {
            let function = Value::Function(FunctionValue::new(function, env.clone()));
            Ok(env.set(name.clone(), function))
        }
        Statement::Expression { expression } => eval_expression(expression, env),
    }
}

/// Evaluate one expression node.
pub fn eval_expression(expression: &Expression, env: &Env) -> EvalResult {
    match expression {
        Expression::Integer(value) => Ok(Value::Int(*value)),
        Expression::Float(value) => Ok(Value::Float(*value)),
        Expression::Str(value) => Ok(Value::string(value)),
        Expression::Boolean(value) => Ok(Value::Bool(*value)),
        Expression::Nil => Ok(Value::Nil),
        Expression::Identifier(name) => expr::eval_identifier(name, env),
        Expression::Array(elements) => expr::eval_array_literal(elements, env),
        Expression::Hash(pairs) => expr::eval_hash_literal(pairs, env),
        Expression::Function(function) => {
            Ok(Value::Function(FunctionValue::new(function, env.clone())))
        }
        Expression::Prefix { operator, right } => {
            let value = eval_expression(right, env)?;
            evaluate_prefix(*operator, &value)
        }
        Expression::Infix {
            left,
            operator,
            right,
        } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            evaluate_infix(&left, *operator, &right)
        }
        Expression::Assign { target, value } => expr::eval_assign(target, value, env),
        Expression::Index { left, index } => expr::eval_index_expression(left, index, env),
        Expression::Dot { left, item } => expr::eval_dot_expression(left, item, env),
        Expression::Range { start, end } => expr::eval_range_expression(start, end, env),
        Expression::Call { callee, arguments } => expr::eval_call(callee, arguments, env),
        Expression::If {
            scenes,
            alternative,
        } => control::eval_if(scenes, alternative.as_ref(), env),
        Expression::ForEver { block } => control::eval_for_ever(block, env),
        Expression::ForEachHash {
            key_name,
            value_name,
            iterable,
            block,
        } => control::eval_for_each_hash(key_name, value_name, iterable, block, env),
        Expression::ForEachArrayOrRange {
            value_name,
            iterable,
            block,
        } => control::eval_for_each_array_or_range(value_name, iterable, block, env),
        Expression::Break => Err(ControlAction::Break),
        Expression::Continue => Err(ControlAction::Continue),
    }
}
