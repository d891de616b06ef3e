//! Control flow: if/else chains and the three loop forms.
//!
//! Loop bodies evaluate in the *current* environment - a `let` inside a
//! loop rebinds the surrounding variable rather than shadowing it per
//! iteration. Only function calls introduce new scopes.

use skrip_ir::{Block, Expression, IfScene};

use crate::environment::Env;
use crate::errors::{for_not_supported, ControlAction, EvalResult};
use crate::value::Value;

use super::{eval_block, eval_expression};

/// Try each scene's condition under truthiness; the first hit runs its
/// block. Falls back to the alternative, then `nil`.
pub(super) fn eval_if(scenes: &[IfScene], alternative: Option<&Block>, env: &Env) -> EvalResult {
    for scene in scenes {
        let condition = eval_expression(&scene.condition, env)?;
        if condition.is_truthy() {
            return eval_block(&scene.block, env);
        }
    }

    match alternative {
        Some(block) => eval_block(block, env),
        None => Ok(Value::Nil),
    }
}

/// Outcome of one loop-body pass once break/continue are intercepted.
enum LoopPass {
    KeepGoing,
    Exit,
}

/// Run a loop body once: `continue` and a normal pass keep the loop
/// going, `break` exits it, `return` and errors propagate unchanged.
fn run_loop_body(block: &Block, env: &Env) -> Result<LoopPass, ControlAction> {
    match eval_block(block, env) {
        Ok(_) | Err(ControlAction::Continue) => Ok(LoopPass::KeepGoing),
        Err(ControlAction::Break) => Ok(LoopPass::Exit),
        Err(other) => Err(other),
    }
}

/// `for { block }` - loops until `break`, `return` or an error.
pub(super) fn eval_for_ever(block: &Block, env: &Env) -> EvalResult {
    loop {
        if let LoopPass::Exit = run_loop_body(block, env)? {
            return Ok(Value::Nil);
        }
    }
}

/// `for v in iterable { block }` over an array (ranges evaluate to
/// arrays before they get here).
pub(super) fn eval_for_each_array_or_range(
    value_name: &str,
    iterable: &Expression,
    block: &Block,
    env: &Env,
) -> EvalResult {
    let iterable = eval_expression(iterable, env)?;
    let Value::Array(elements) = &iterable else {
        return Err(for_not_supported(iterable.type_name()).into());
    };

    // Snapshot so body mutations of the iterated array cannot invalidate
    // the walk mid-flight.
    let items: Vec<Value> = elements.borrow().clone();
    for item in items {
        env.set(value_name.to_string(), item);
        if let LoopPass::Exit = run_loop_body(block, env)? {
            break;
        }
    }

    Ok(Value::Nil)
}

/// `for k, v in hash { block }` in key insertion order.
pub(super) fn eval_for_each_hash(
    key_name: &str,
    value_name: &str,
    iterable: &Expression,
    block: &Block,
    env: &Env,
) -> EvalResult {
    let iterable = eval_expression(iterable, env)?;
    let Value::Hash(hash) = &iterable else {
        return Err(for_not_supported(iterable.type_name()).into());
    };

    let pairs: Vec<(Value, Value)> = hash
        .borrow()
        .iter()
        .map(|pair| (pair.key.clone(), pair.value.clone()))
        .collect();

    for (key, value) in pairs {
        env.set(key_name.to_string(), key);
        env.set(value_name.to_string(), value);
        if let LoopPass::Exit = run_loop_body(block, env)? {
            break;
        }
    }

    Ok(Value::Nil)
}
