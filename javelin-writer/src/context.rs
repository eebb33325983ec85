//! Scope tracking for name resolution during rendering.

use indexmap::IndexSet;

use crate::name::ClassName;

/// The set of names renderable without qualification at a position in the
/// writer tree.
///
/// Contexts are derived, never mutated: each composite writer creates one
/// child context incorporating its own nested declarations before rendering
/// its members, and passes it down the recursion by reference. Resolution is
/// deterministic: the same context and name always yield the same text.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    visible: IndexSet<ClassName>,
}

impl RenderContext {
    /// Create an empty top-level context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with the given names already in scope.
    pub fn with_visible(names: impl IntoIterator<Item = ClassName>) -> Self {
        Self {
            visible: names.into_iter().collect(),
        }
    }

    /// Derive a child scope: the union of this context's visibility set and
    /// the newly visible names. The receiver is left untouched.
    pub fn subcontext(&self, newly_visible: impl IntoIterator<Item = ClassName>) -> Self {
        let mut visible = self.visible.clone();
        visible.extend(newly_visible);
        Self { visible }
    }

    pub fn is_visible(&self, name: &ClassName) -> bool {
        self.visible.contains(name)
    }

    /// Resolve a name to source text: the simple name when the name is in
    /// scope, or when its simple name collides with nothing bound here;
    /// otherwise the fully qualified canonical form.
    ///
    /// Deliberately one-level conservative: only names explicitly unioned
    /// into this scope chain count as visible.
    pub fn resolve(&self, name: &ClassName) -> String {
        if self.visible.contains(name) {
            return name.simple_name().to_string();
        }
        let collides = self
            .visible
            .iter()
            .any(|visible| visible.simple_name() == name.simple_name());
        if collides {
            name.canonical_name()
        } else {
            name.simple_name().to_string()
        }
    }
}
