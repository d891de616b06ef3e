//! Expression evaluation helpers: identifiers, collection literals,
//! indexing, ranges, calls and assignment targets.

use skrip_ir::Expression;

use crate::builtins::lookup_builtin;
use crate::environment::Env;
use crate::errors::{
    identifier_not_found, index_assignment_out_of_range, index_not_supported, not_callable,
    not_hashable, range_needs_single_char, range_not_supported, wrong_arity, ControlAction,
    EvalError, EvalResult,
};
use crate::value::{HashPair, HashValue, Value};

use super::{eval_block, eval_expression};

/// Identifier lookup: the lexical chain first, registered built-ins
/// second.
pub(super) fn eval_identifier(name: &str, env: &Env) -> EvalResult {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(builtin) = lookup_builtin(name) {
        return Ok(builtin);
    }
    Err(identifier_not_found(name).into())
}

pub(super) fn eval_array_literal(elements: &[Expression], env: &Env) -> EvalResult {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        values.push(eval_expression(element, env)?);
    }
    Ok(Value::array(values))
}

pub(super) fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> EvalResult {
    let mut hash = HashValue::new();
    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env)?;
        let Some(hash_key) = key.hash_key() else {
            return Err(not_hashable(key.type_name()).into());
        };
        let value = eval_expression(value_expression, env)?;
        hash.insert(hash_key, HashPair { key, value });
    }
    Ok(Value::hash(hash))
}

pub(super) fn eval_index_expression(
    left: &Expression,
    index: &Expression,
    env: &Env,
) -> EvalResult {
    let target = eval_expression(left, env)?;
    let index = eval_expression(index, env)?;

    match (&target, &index) {
        (Value::Array(elements), Value::Int(i)) => {
            let elements = elements.borrow();
            Ok(checked_index(*i, elements.len())
                .and_then(|idx| elements.get(idx).cloned())
                .unwrap_or(Value::Nil))
        }
        (Value::Hash(hash), key) => {
            let Some(hash_key) = key.hash_key() else {
                return Err(not_hashable(key.type_name()).into());
            };
            Ok(hash
                .borrow()
                .get(&hash_key)
                .map_or(Value::Nil, |pair| pair.value.clone()))
        }
        (Value::Str(text), Value::Int(i)) => {
            // Byte indexing: one byte widened to a one-character string.
            Ok(checked_index(*i, text.len())
                .and_then(|idx| text.as_bytes().get(idx).copied())
                .map_or(Value::Nil, |byte| {
                    Value::string((byte as char).to_string())
                }))
        }
        _ => Err(index_not_supported(&index.inspect(), target.type_name()).into()),
    }
}

/// Bounds check on `[0, len)`; out-of-range is `None`, which indexing
/// reads as `nil`.
fn checked_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&idx| idx < len)
}

/// `left.item` reads the hash entry under the string key `item`.
pub(super) fn eval_dot_expression(left: &Expression, item: &str, env: &Env) -> EvalResult {
    let target = eval_expression(left, env)?;
    match &target {
        Value::Hash(hash) => {
            let key = Value::string(item);
            let Some(hash_key) = key.hash_key() else {
                return Err(not_hashable(key.type_name()).into());
            };
            Ok(hash
                .borrow()
                .get(&hash_key)
                .map_or(Value::Nil, |pair| pair.value.clone()))
        }
        other => Err(index_not_supported(item, other.type_name()).into()),
    }
}

pub(super) fn eval_range_expression(
    start: &Expression,
    end: &Expression,
    env: &Env,
) -> EvalResult {
    let start = eval_expression(start, env)?;
    let end = eval_expression(end, env)?;

    match (&start, &end) {
        // Ascending half-open [start, end); empty when start >= end.
        (Value::Int(a), Value::Int(b)) => Ok(Value::array((*a..*b).map(Value::Int).collect())),
        // Fixed step 0.1, values deliberately left unnormalised.
        (Value::Float(a), Value::Float(b)) => {
            let mut values = Vec::new();
            let mut current = *a;
            while current < *b {
                values.push(Value::Float(current));
                current += 0.1;
            }
            Ok(Value::array(values))
        }
        (Value::Str(a), Value::Str(b)) => {
            let (Some(from), Some(to)) = (single_char(a), single_char(b)) else {
                return Err(range_needs_single_char().into());
            };
            Ok(Value::array(char_range(from, to)))
        }
        _ => Err(range_not_supported(start.type_name(), end.type_name()).into()),
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

/// Half-open character range: ascending when `from < to`, descending
/// otherwise (so `"f".."a"` is `f e d c b`).
fn char_range(from: char, to: char) -> Vec<Value> {
    if from < to {
        (from..to).map(|c| Value::string(c.to_string())).collect()
    } else {
        let mut values = Vec::new();
        let mut code = from as u32;
        while code > to as u32 {
            if let Some(c) = char::from_u32(code) {
                values.push(Value::string(c.to_string()));
            }
            code -= 1;
        }
        values
    }
}

pub(super) fn eval_call(callee: &Expression, arguments: &[Expression], env: &Env) -> EvalResult {
    let function = eval_expression(callee, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    apply_function(&function, &args, env)
}

/// Invoke a callable value.
///
/// User functions check arity, bind parameters in a fresh environment
/// enclosed by the *captured* environment, and unwrap one level of
/// `Return`. Built-ins receive the caller's environment.
pub fn apply_function(function: &Value, args: &[Value], env: &Env) -> EvalResult {
    match function {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Err(wrong_arity(function.parameters.len(), args.len()).into());
            }

            let call_env = Env::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(args) {
                call_env.set(parameter.clone(), argument.clone());
            }

            match eval_block(&function.block, &call_env) {
                Err(ControlAction::Return(value)) => Ok(value),
                other => other,
            }
        }
        Value::Builtin(function) => function(env, args),
        other => Err(not_callable(other.type_name()).into()),
    }
}

/// `target = value`: rebind an identifier, replace an array slot, or
/// upsert a hash entry. Evaluates to the assigned value.
pub(super) fn eval_assign(target: &Expression, value: &Expression, env: &Env) -> EvalResult {
    let value = eval_expression(value, env)?;

    match target {
        Expression::Identifier(name) => {
            // Mutate the nearest binding; fall back to a fresh binding in
            // the current scope for unbound names.
            if !env.assign(name, value.clone()) {
                env.set(name.clone(), value.clone());
            }
            Ok(value)
        }
        Expression::Index { left, index } => {
            let target = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;

            match (&target, &index) {
                (Value::Array(elements), Value::Int(i)) => {
                    let mut elements = elements.borrow_mut();
                    let len = elements.len();
                    match checked_index(*i, len) {
                        Some(idx) => {
                            elements[idx] = value.clone();
                            Ok(value)
                        }
                        None => Err(index_assignment_out_of_range(*i).into()),
                    }
                }
                (Value::Hash(hash), key) => {
                    let Some(hash_key) = key.hash_key() else {
                        return Err(not_hashable(key.type_name()).into());
                    };
                    hash.borrow_mut().insert(
                        hash_key,
                        HashPair {
                            key: key.clone(),
                            value: value.clone(),
                        },
                    );
                    Ok(value)
                }
                _ => Err(index_not_supported(&index.inspect(), target.type_name()).into()),
            }
        }
        Expression::Dot { left, item } => {
            let target = eval_expression(left, env)?;
            match &target {
                Value::Hash(hash) => {
                    let key = Value::string(item);
                    let Some(hash_key) = key.hash_key() else {
                        return Err(not_hashable(key.type_name()).into());
                    };
                    hash.borrow_mut().insert(
                        hash_key,
                        HashPair {
                            key,
                            value: value.clone(),
                        },
                    );
                    Ok(value)
                }
                other => Err(index_not_supported(item, other.type_name()).into()),
            }
        }
        // The parser only builds the three shapes above; anything else
        // would be a parser bug.
        other => Err(EvalError::new(format!("Invalid assignment target: {other}")).into()),
    }
}
