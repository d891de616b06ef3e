//! Process-wide built-in function registry.
//!
//! Hosts register named callables once at startup; identifier resolution
//! consults the registry only after the lexical chain misses, so script
//! bindings shadow built-ins. The table is guarded by an `RwLock` for
//! init-time writes - concurrent registration during evaluation is
//! unsupported by contract.

use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::value::{BuiltinFunction, Value};

static REGISTRY: OnceLock<RwLock<FxHashMap<String, BuiltinFunction>>> = OnceLock::new();

fn registry() -> &'static RwLock<FxHashMap<String, BuiltinFunction>> {
    REGISTRY.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// Register a built-in under `name`, replacing any previous registration.
pub fn register_builtin(name: impl Into<String>, function: BuiltinFunction) {
    registry().write().insert(name.into(), function);
}

/// Look up a registered built-in as a callable value.
pub fn lookup_builtin(name: &str) -> Option<Value> {
    registry().read().get(name).copied().map(Value::Builtin)
}
