//! Lexically scoped environments.
//!
//! An [`Env`] is a shared handle to one scope; scopes chain to their
//! parent. `get` walks the chain outward, `set` always binds in the
//! current scope (`let` semantics), and `assign` mutates the nearest
//! existing binding so `=` updates outer variables instead of shadowing
//! them.
//!
//! Function values hold the `Env` they were defined in, so a closure and
//! its defining scope observe each other's mutations for as long as
//! either is alive.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::shared::Shared;
use crate::value::Value;

/// One scope: its bindings plus an optional parent.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Env>,
}

/// Shared handle to a scope.
#[derive(Clone, Default)]
pub struct Env(Shared<Scope>);

impl Env {
    /// A fresh top-level environment.
    pub fn new() -> Self {
        Env::default()
    }

    /// A child environment whose lookups fall through to `parent`.
    pub fn new_enclosed(parent: &Env) -> Self {
        Env(Shared::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent.clone()),
        }))
    }

    /// Look a name up, walking the parent chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Some(value.clone());
        }
        scope.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Bind `name` in the current scope, shadowing any outer binding.
    /// Returns the bound value.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.0.borrow_mut().bindings.insert(name.into(), value.clone());
        value
    }

    /// Mutate the nearest existing binding of `name` on the chain.
    /// Returns `false` when no scope binds the name.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut scope = self.0.borrow_mut();
        if let Some(slot) = scope.bindings.get_mut(name) {
            *slot = value;
            return true;
        }
        match &scope.parent {
            Some(parent) => parent.assign(name, value),
            None => false,
        }
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Binding names only: values can reach back into this very
        // environment through closures.
        let scope = self.0.borrow();
        let mut names: Vec<&String> = scope.bindings.keys().collect();
        names.sort();
        f.debug_struct("Env")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_walks_the_parent_chain() {
        let outer = Env::new();
        outer.set("a", Value::Int(1));

        let inner = Env::new_enclosed(&outer);
        inner.set("b", Value::Int(2));

        assert_eq!(inner.get("a"), Some(Value::Int(1)));
        assert_eq!(inner.get("b"), Some(Value::Int(2)));
        assert_eq!(outer.get("b"), None);
        assert_eq!(inner.get("missing"), None);
    }

    #[test]
    fn set_binds_in_the_current_scope_only() {
        let outer = Env::new();
        outer.set("a", Value::Int(1));

        let inner = Env::new_enclosed(&outer);
        inner.set("a", Value::Int(2));

        assert_eq!(inner.get("a"), Some(Value::Int(2)));
        assert_eq!(outer.get("a"), Some(Value::Int(1)));
    }

    #[test]
    fn assign_mutates_the_nearest_existing_binding() {
        let outer = Env::new();
        outer.set("a", Value::Int(1));

        let inner = Env::new_enclosed(&outer);
        assert!(inner.assign("a", Value::Int(10)));

        assert_eq!(outer.get("a"), Some(Value::Int(10)));
        assert_eq!(inner.get("a"), Some(Value::Int(10)));
    }

    #[test]
    fn assign_to_unbound_name_reports_false() {
        let env = Env::new();
        assert!(!env.assign("missing", Value::Int(1)));
    }

    #[test]
    fn sibling_scopes_share_their_parent() {
        let outer = Env::new();
        outer.set("counter", Value::Int(0));

        let first = Env::new_enclosed(&outer);
        let second = Env::new_enclosed(&outer);

        first.assign("counter", Value::Int(1));
        assert_eq!(second.get("counter"), Some(Value::Int(1)));
    }
}
