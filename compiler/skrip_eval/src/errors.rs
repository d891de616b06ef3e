//! Evaluation results, control-flow signals and error constructors.
//!
//! `return`, `break` and `continue` travel through the `Err` channel of
//! [`EvalResult`] as [`ControlAction`] variants, so block evaluators can
//! test a tag and `?` does the propagation - no host-stack unwinding.
//! The loop evaluators intercept `Break`/`Continue`; function-call
//! boundaries unwrap `Return` exactly once; `Failure` propagates to the
//! driver.

use std::error::Error;
use std::fmt;

use crate::value::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, ControlAction>;

/// A runtime error. `message` is the bare text; `Display` adds the
/// user-facing `[Error]` prefix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvalError {
    pub message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        EvalError {
            message: message.into(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Error] {}", self.message)
    }
}

impl Error for EvalError {}

/// Non-local outcome of a sub-evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// `return value` - unwrapped exactly once at the function-call
    /// boundary.
    Return(Value),
    /// `break` - intercepted by the nearest loop.
    Break,
    /// `continue` - intercepted by the nearest loop.
    Continue,
    /// A runtime error, propagated all the way out.
    Failure(EvalError),
}

impl From<EvalError> for ControlAction {
    fn from(error: EvalError) -> Self {
        ControlAction::Failure(error)
    }
}

// Error constructors. Centralised so message wording lives in one place.

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::new(format!("Identifier not found: {name}"))
}

#[cold]
pub fn type_mismatch(left: &str, operator: &str, right: &str) -> EvalError {
    EvalError::new(format!("Type mismatch: {left} {operator} {right}"))
}

#[cold]
pub fn unknown_infix_operator(left: &str, operator: &str, right: &str) -> EvalError {
    EvalError::new(format!("Unknown operator: {left} {operator} {right}"))
}

#[cold]
pub fn unknown_prefix_operator(operator: &str, operand: &str) -> EvalError {
    EvalError::new(format!("Unknown operator: {operator}{operand}"))
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new("Division by zero")
}

#[cold]
pub fn not_hashable(type_name: &str) -> EvalError {
    EvalError::new(format!("Cannot use {type_name} as hash key"))
}

#[cold]
pub fn wrong_arity(expected: usize, got: usize) -> EvalError {
    EvalError::new(format!(
        "Wrong number of arguments. Expected {expected}, got {got}"
    ))
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::new(format!("Not a function: {type_name}"))
}

#[cold]
pub fn index_not_supported(index: &str, target_type: &str) -> EvalError {
    EvalError::new(format!(
        "Index operator not support for {index} on {target_type}"
    ))
}

#[cold]
pub fn index_assignment_out_of_range(index: i64) -> EvalError {
    EvalError::new(format!("Index assignment out of range: {index}"))
}

#[cold]
pub fn range_not_supported(left: &str, right: &str) -> EvalError {
    EvalError::new(format!("Range operator not support for {left}..{right}"))
}

#[cold]
pub fn range_needs_single_char() -> EvalError {
    EvalError::new("Range operands must be single character strings")
}

#[cold]
pub fn for_not_supported(type_name: &str) -> EvalError {
    EvalError::new(format!("For loop not support for {type_name}"))
}
