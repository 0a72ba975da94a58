//! Scope stack for closure-parameter bindings
//!
//! Tracks the names bound by enclosing closures during graph construction.
//! The innermost binding of a name wins, so a parameter reusing an outer
//! name shadows it until its frame is popped.

/// Stack of `name -> value` bindings grouped into frames
#[derive(Debug, Clone)]
pub struct ScopeStack<T> {
    bindings: Vec<(String, T)>,
    frames: Vec<usize>,
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScopeStack<T> {
    /// Create an empty scope stack
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Open a frame holding `bindings`
    pub fn push_frame(&mut self, bindings: impl IntoIterator<Item = (String, T)>) {
        self.frames.push(self.bindings.len());
        self.bindings.extend(bindings);
    }

    /// Close the innermost frame, dropping its bindings
    pub fn pop_frame(&mut self) {
        if let Some(start) = self.frames.pop() {
            self.bindings.truncate(start);
        }
    }

    /// Innermost binding for `name`
    pub fn resolve(&self, name: &str) -> Option<&T> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// Number of open frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run `f` with an extra frame, popping it afterwards even when `f` fails
    pub fn with_frame<C, R>(
        &mut self,
        context: &mut C,
        bindings: impl IntoIterator<Item = (String, T)>,
        f: impl FnOnce(&mut C, &mut Self) -> R,
    ) -> R {
        self.push_frame(bindings);
        let result = f(context, self);
        self.pop_frame();
        result
    }
}
