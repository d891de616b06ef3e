//! Infix and prefix operator evaluation.
//!
//! Dispatch is enum-based on the operand type pair: the type set is
//! closed, so pattern matching beats trait objects and keeps the
//! combinations exhaustively checked.
//!
//! # Human floats
//!
//! Arithmetic involving floats normalises its result by formatting with
//! six fractional digits and re-parsing, so `3 * 2.3` is `6.9` rather
//! than `6.899999999999999`. This is a documented language quirk, not a
//! bug; comparisons use the raw f64 values.

use skrip_ir::{InfixOperator, PrefixOperator};

use crate::errors::{
    division_by_zero, type_mismatch, unknown_infix_operator, unknown_prefix_operator, EvalResult,
};
use crate::value::Value;

/// Format-and-reparse normalisation for float arithmetic results.
fn human_float(value: f64) -> f64 {
    format!("{value:.6}").parse().unwrap_or(value)
}

/// Evaluate `left operator right` on already-evaluated operands.
pub fn evaluate_infix(left: &Value, operator: InfixOperator, right: &Value) -> EvalResult {
    // Logical operators coerce both sides through truthiness.
    if let InfixOperator::And = operator {
        return Ok(Value::Bool(left.is_truthy() && right.is_truthy()));
    }
    if let InfixOperator::Or = operator {
        return Ok(Value::Bool(left.is_truthy() || right.is_truthy()));
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => integer_infix(*a, operator, *b),
        (Value::Int(a), Value::Float(b)) => float_infix(to_f64(*a), operator, *b),
        (Value::Float(a), Value::Int(b)) => float_infix(*a, operator, to_f64(*b)),
        (Value::Float(a), Value::Float(b)) => float_infix(*a, operator, *b),
        (Value::Str(a), Value::Str(b)) => string_infix(a, operator, b),
        (Value::Bool(a), Value::Bool(b)) => boolean_infix(*a, operator, *b),
        (Value::Nil, Value::Nil) => nil_infix(operator),
        (Value::Array(_), Value::Array(_)) => array_infix(left, operator, right),
        (Value::Hash(_), Value::Hash(_)) => hash_infix(left, operator, right),
        _ => cross_type_infix(left, operator, right),
    }
}

/// Evaluate a prefix operator on an already-evaluated operand.
pub fn evaluate_prefix(operator: PrefixOperator, value: &Value) -> EvalResult {
    match operator {
        PrefixOperator::Bang => Ok(Value::Bool(!value.is_truthy())),
        PrefixOperator::Minus => match value {
            Value::Int(n) => Ok(Value::Int(-n)),
            Value::Float(f) => Ok(Value::Float(-f)),
            other => Err(unknown_prefix_operator("-", other.type_name()).into()),
        },
        // `+` is the identity on numbers and passes everything else
        // through unchanged.
        PrefixOperator::Plus => Ok(value.clone()),
    }
}

/// Language-level equality. Mixed numeric kinds promote and compare
/// numerically; arrays compare element-wise; hashes structurally; any
/// other cross-type pair is simply unequal.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Int(a), Value::Float(b)) => to_f64(*a) == *b,
        (Value::Float(a), Value::Int(b)) => *a == to_f64(*b),
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Nil, Value::Nil) => true,
        (Value::Array(a), Value::Array(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| values_equal(x, y))
        }
        (Value::Hash(a), Value::Hash(b)) => a.borrow().structural_eq(&b.borrow()),
        _ => false,
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "numeric promotion is the documented language semantics"
)]
fn to_f64(value: i64) -> f64 {
    value as f64
}

fn integer_infix(a: i64, operator: InfixOperator, b: i64) -> EvalResult {
    let value = match operator {
        InfixOperator::Plus => Value::Int(a.wrapping_add(b)),
        InfixOperator::Minus => Value::Int(a.wrapping_sub(b)),
        InfixOperator::Asterisk => Value::Int(a.wrapping_mul(b)),
        InfixOperator::Slash => {
            if b == 0 {
                return Err(division_by_zero().into());
            }
            // Truncates toward zero.
            Value::Int(a.wrapping_div(b))
        }
        InfixOperator::Lt => Value::Bool(a < b),
        InfixOperator::LtEq => Value::Bool(a <= b),
        InfixOperator::Gt => Value::Bool(a > b),
        InfixOperator::GtEq => Value::Bool(a >= b),
        InfixOperator::Eq => Value::Bool(a == b),
        InfixOperator::NotEq => Value::Bool(a != b),
        InfixOperator::And | InfixOperator::Or => unreachable!("handled before dispatch"),
    };
    Ok(value)
}

fn float_infix(a: f64, operator: InfixOperator, b: f64) -> EvalResult {
    let value = match operator {
        InfixOperator::Plus => Value::Float(human_float(a + b)),
        InfixOperator::Minus => Value::Float(human_float(a - b)),
        InfixOperator::Asterisk => Value::Float(human_float(a * b)),
        InfixOperator::Slash => Value::Float(human_float(a / b)),
        // Comparisons stay raw f64.
        InfixOperator::Lt => Value::Bool(a < b),
        InfixOperator::LtEq => Value::Bool(a <= b),
        InfixOperator::Gt => Value::Bool(a > b),
        InfixOperator::GtEq => Value::Bool(a >= b),
        InfixOperator::Eq => Value::Bool(a == b),
        InfixOperator::NotEq => Value::Bool(a != b),
        InfixOperator::And | InfixOperator::Or => unreachable!("handled before dispatch"),
    };
    Ok(value)
}

fn string_infix(a: &str, operator: InfixOperator, b: &str) -> EvalResult {
    let value = match operator {
        InfixOperator::Plus => Value::string(format!("{a}{b}")),
        InfixOperator::Lt => Value::Bool(a < b),
        InfixOperator::LtEq => Value::Bool(a <= b),
        InfixOperator::Gt => Value::Bool(a > b),
        InfixOperator::GtEq => Value::Bool(a >= b),
        InfixOperator::Eq => Value::Bool(a == b),
        InfixOperator::NotEq => Value::Bool(a != b),
        _ => return Err(unknown_infix_operator("STRING", operator.as_str(), "STRING").into()),
    };
    Ok(value)
}

fn boolean_infix(a: bool, operator: InfixOperator, b: bool) -> EvalResult {
    match operator {
        InfixOperator::Eq => Ok(Value::Bool(a == b)),
        InfixOperator::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(unknown_infix_operator("BOOLEAN", operator.as_str(), "BOOLEAN").into()),
    }
}

fn nil_infix(operator: InfixOperator) -> EvalResult {
    match operator {
        InfixOperator::Eq => Ok(Value::Bool(true)),
        InfixOperator::NotEq => Ok(Value::Bool(false)),
        _ => Err(unknown_infix_operator("NIL", operator.as_str(), "NIL").into()),
    }
}

fn array_infix(left: &Value, operator: InfixOperator, right: &Value) -> EvalResult {
    let (Value::Array(a), Value::Array(b)) = (left, right) else {
        unreachable!("caller matched both operands as arrays");
    };
    match operator {
        // Allocates a fresh array; neither operand is mutated.
        InfixOperator::Plus => {
            let mut elements = a.borrow().clone();
            elements.extend(b.borrow().iter().cloned());
            Ok(Value::array(elements))
        }
        InfixOperator::Eq => Ok(Value::Bool(values_equal(left, right))),
        InfixOperator::NotEq => Ok(Value::Bool(!values_equal(left, right))),
        _ => Err(unknown_infix_operator("ARRAY", operator.as_str(), "ARRAY").into()),
    }
}

fn hash_infix(left: &Value, operator: InfixOperator, right: &Value) -> EvalResult {
    let (Value::Hash(a), Value::Hash(b)) = (left, right) else {
        unreachable!("caller matched both operands as hashes");
    };
    match operator {
        // Left order wins; keys only on the right append in their own
        // insertion order.
        InfixOperator::Plus => Ok(Value::hash(a.borrow().merged(&b.borrow()))),
        InfixOperator::Eq => Ok(Value::Bool(values_equal(left, right))),
        InfixOperator::NotEq => Ok(Value::Bool(!values_equal(left, right))),
        _ => Err(unknown_infix_operator("HASH", operator.as_str(), "HASH").into()),
    }
}

/// Operands of different kinds: equality is decidedly false, everything
/// else is a type mismatch.
fn cross_type_infix(left: &Value, operator: InfixOperator, right: &Value) -> EvalResult {
    match operator {
        InfixOperator::Eq => Ok(Value::Bool(false)),
        InfixOperator::NotEq => Ok(Value::Bool(true)),
        _ => Err(type_mismatch(left.type_name(), operator.as_str(), right.type_name()).into()),
    }
}
