//! The writer capability shared by every node in the tree.

use indexmap::IndexSet;

use crate::context::RenderContext;
use crate::error::Result;
use crate::name::ClassName;
use crate::sink::Sink;

/// A node that can render itself into a sink under a scope context, and
/// report the qualified names it references.
///
/// Rendering is a pure read of the node: it only appends to the sink and may
/// be invoked any number of times with identical results. The referenced
/// names feed an external import-assembly pass; the core never decides which
/// imports are emitted.
pub trait Writable {
    /// Render this node into `out`, resolving names against `ctx`.
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()>;

    /// Accumulate every qualified name this node mentions into `refs`.
    fn collect_references(&self, refs: &mut IndexSet<ClassName>);

    /// The set of qualified names this node mentions, recursively.
    fn referenced_classes(&self) -> IndexSet<ClassName> {
        let mut refs = IndexSet::new();
        self.collect_references(&mut refs);
        refs
    }
}

/// Render a node into a fresh string.
pub fn render_to_string(node: &dyn Writable, ctx: &RenderContext) -> Result<String> {
    let mut out = String::new();
    node.write(&mut out, ctx)?;
    Ok(out)
}

/// Write `items` separated by `separator`, wrapped in `prefix` and
/// `suffix`. Emits nothing at all when `items` is empty.
pub(crate) fn write_joined<'a, T, I>(
    items: I,
    separator: &str,
    prefix: &str,
    suffix: &str,
    out: &mut dyn Sink,
    ctx: &RenderContext,
) -> Result<()>
where
    T: Writable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return Ok(());
    }
    out.write_str(prefix)?;
    let mut first = true;
    for item in items {
        if !first {
            out.write_str(separator)?;
        }
        first = false;
        item.write(out, ctx)?;
    }
    out.write_str(suffix)
}
