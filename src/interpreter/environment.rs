use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Stores the runtime state of one program execution.
///
/// The environment is a stack of scopes. Each scope holds the variables bound
/// in it and its own output buffer; looking a name up walks the stack from
/// the innermost scope outward. Blocks and loop bodies push a fresh scope on
/// entry and pop it on exit, which is what makes `bhai_sun` declarations
/// shadow outer bindings and disappear when their block ends.
///
/// ## Usage
///
/// Create one `Environment` per program execution (or keep one alive across
/// several executions to carry top-level bindings over, as a REPL would).
/// Environments are plain values with no interior locking; concurrent
/// executions must each use their own instance.
pub struct Environment {
    scopes: Vec<Scope>,
}

/// One level of the scope stack: its variable bindings plus the output text
/// printed while the scope was innermost.
struct Scope {
    bindings: HashMap<String, Value>,
    output:   String,
}

impl Scope {
    fn new() -> Self {
        Self { bindings: HashMap::new(),
               output:   String::new(), }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates a fresh top-level execution scope with no bindings and an
    /// empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::new()] }
    }

    /// Pushes a new innermost scope. Called when a block starts executing.
    pub(crate) fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pops the innermost scope, discarding its bindings. The scope's output
    /// is appended to the parent's buffer so printed text survives the scope
    /// in temporal order. The root scope is never popped.
    pub(crate) fn pop_scope(&mut self) {
        if self.scopes.len() > 1
           && let Some(scope) = self.scopes.pop()
           && let Some(parent) = self.scopes.last_mut()
        {
            parent.output.push_str(&scope.output);
        }
    }

    /// Looks a variable up, walking the scope stack from the innermost scope
    /// outward. Returns `None` when the name is bound nowhere.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(name))
    }

    /// Binds a name in the current (innermost) scope, shadowing any outer
    /// binding of the same name. This is what `bhai_sun` does.
    pub fn declare(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.bindings.insert(name.to_string(), value);
        }
    }

    /// Assigns to the nearest enclosing scope already holding `name`. When no
    /// scope holds it, the name is created in the current scope instead —
    /// plain assignment never fails on an unknown name, only reads do.
    pub fn assign(&mut self, name: &str, value: Value) {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.bindings.get_mut(name) {
                *slot = value;
                return;
            }
        }

        self.declare(name, value);
    }

    /// Appends one printed rendering plus a newline to the current scope's
    /// output buffer.
    pub(crate) fn emit_line(&mut self, rendered: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.output.push_str(rendered);
            scope.output.push('\n');
        }
    }

    /// Takes the accumulated output text out of the root scope, leaving the
    /// buffer empty. Call after evaluation finishes; output printed in inner
    /// scopes has been flushed outward by then.
    #[must_use]
    pub fn take_output(&mut self) -> String {
        self.scopes
            .first_mut()
            .map(|scope| std::mem::take(&mut scope.output))
            .unwrap_or_default()
    }
}
