//! Nesting context stack.

use crate::State;

/// One open construct: what it is and how far its body is indented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Context {
    pub kind: State,
    pub indent: usize,
}

/// Stack of open contexts over a root that is never popped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextStack {
    root: Context,
    nested: Vec<Context>,
}

impl ContextStack {
    pub(crate) fn new(kind: State, indent: usize) -> Self {
        ContextStack {
            root: Context { kind, indent },
            nested: Vec::new(),
        }
    }

    /// Innermost open context.
    pub fn current(&self) -> &Context {
        self.nested.last().unwrap_or(&self.root)
    }

    /// Context enclosing the innermost one, `None` at the root.
    pub fn parent(&self) -> Option<&Context> {
        self.ancestor(1)
    }

    /// The `n`th enclosing context, counting the innermost as 0.
    pub fn ancestor(&self, n: usize) -> Option<&Context> {
        let depth = self.nested.len();
        if n < depth {
            self.nested.get(depth - 1 - n)
        } else if n == depth {
            Some(&self.root)
        } else {
            None
        }
    }

    /// Number of open contexts, root included.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    /// Contexts from innermost to root.
    pub fn iter(&self) -> impl Iterator<Item = &Context> + '_ {
        self.nested.iter().rev().chain(std::iter::once(&self.root))
    }

    pub(crate) fn push(&mut self, kind: State, indent: usize) {
        self.nested.push(Context { kind, indent });
    }

    /// Close the innermost context. The root stays put.
    pub(crate) fn pop(&mut self) -> bool {
        self.nested.pop().is_some()
    }
}

#[cfg(test)]
mod tests;
