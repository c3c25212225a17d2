use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A handle to one frame in a parent-linked chain of scopes.
///
/// Cloning an `Env` clones the handle, not the frame: every clone sees the
/// same bindings. Function values capture the handle of their declaration
/// site, which is what lets recursive top-level functions resolve themselves
/// through the shared global frame.
#[derive(Clone)]
pub struct Env {
    frame: Rc<RefCell<Frame>>,
}

struct Frame {
    bindings: HashMap<String, Value>,
    parent:   Option<Env>,
}

impl Env {
    /// Creates a root frame with no parent.
    #[must_use]
    pub fn global() -> Self {
        Self { frame: Rc::new(RefCell::new(Frame { bindings: HashMap::new(),
                                                   parent:   None, })), }
    }

    /// Creates a fresh frame whose lookups fall through to `parent`.
    #[must_use]
    pub fn child(parent: &Self) -> Self {
        Self { frame: Rc::new(RefCell::new(Frame { bindings: HashMap::new(),
                                                   parent:   Some(parent.clone()), })), }
    }

    /// Creates a new binding in this frame, shadowing any outer binding of
    /// the same name.
    pub fn define(&self, name: &str, value: Value) {
        self.frame
            .borrow_mut()
            .bindings
            .insert(name.to_string(), value);
    }

    /// Looks a name up, walking from this frame outward.
    ///
    /// # Example
    /// ```
    /// use shark::interpreter::{env::Env, value::core::Value};
    ///
    /// let global = Env::global();
    /// global.define("x", Value::Int(10));
    ///
    /// let inner = Env::child(&global);
    /// assert_eq!(inner.get("x"), Some(Value::Int(10)));
    /// assert_eq!(inner.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let frame = self.frame.borrow();
        if let Some(value) = frame.bindings.get(name) {
            return Some(value.clone());
        }
        frame.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Updates the binding in the nearest frame that contains `name`.
    ///
    /// Returns `false` when no frame in the chain contains the name; the
    /// caller reports that as a `NameError` (assignment never creates a
    /// binding).
    #[must_use]
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut frame = self.frame.borrow_mut();
        if let Some(slot) = frame.bindings.get_mut(name) {
            *slot = value;
            return true;
        }
        frame.parent
             .as_ref()
             .is_some_and(|parent| parent.assign(name, value))
    }

    /// Clones this frame's own binding map, ignoring parents.
    ///
    /// Used by the REPL to checkpoint the global frame before each top-level
    /// statement.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.frame.borrow().bindings.clone()
    }

    /// Replaces this frame's own binding map with a previously taken
    /// snapshot, discarding any mutations made since.
    pub fn restore(&self, snapshot: HashMap<String, Value>) {
        self.frame.borrow_mut().bindings = snapshot;
    }
}

impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Frames can be cyclic through captured function values.
        let frame = self.frame.borrow();
        f.debug_struct("Env")
         .field("names", &frame.bindings.keys().collect::<Vec<_>>())
         .field("has_parent", &frame.parent.is_some())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Env;
    use crate::interpreter::value::core::Value;

    #[test]
    fn define_shadows_and_assign_updates_nearest() {
        let global = Env::global();
        global.define("x", Value::Int(1));

        let inner = Env::child(&global);
        inner.define("x", Value::Int(2));
        assert_eq!(inner.get("x"), Some(Value::Int(2)));
        assert_eq!(global.get("x"), Some(Value::Int(1)));

        assert!(inner.assign("x", Value::Int(3)));
        assert_eq!(inner.get("x"), Some(Value::Int(3)));
        assert_eq!(global.get("x"), Some(Value::Int(1)));
    }

    #[test]
    fn assign_to_unbound_name_reports_failure() {
        let global = Env::global();
        assert!(!global.assign("missing", Value::Unit));
        assert_eq!(global.get("missing"), None);
    }

    #[test]
    fn snapshot_restores_pre_statement_state() {
        let global = Env::global();
        global.define("kept", Value::Int(1));

        let checkpoint = global.snapshot();
        global.define("dropped", Value::Int(2));
        global.define("kept", Value::Int(99));

        global.restore(checkpoint);
        assert_eq!(global.get("kept"), Some(Value::Int(1)));
        assert_eq!(global.get("dropped"), None);
    }
}
