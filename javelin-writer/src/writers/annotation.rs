//! Annotation renderer.

use indexmap::IndexMap;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::Result;
use crate::name::ClassName;
use crate::sink::Sink;
use crate::snippet::Snippet;
use crate::writable::Writable;

/// Renders one annotation: `@Name`, `@Name(value)` for a sole `value`
/// member, or `@Name(a = x, b = y)` with members in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationWriter {
    name: ClassName,
    members: IndexMap<String, Snippet>,
}

impl AnnotationWriter {
    pub fn new(name: ClassName) -> Self {
        Self {
            name,
            members: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    /// Set a member value. Re-setting a member keeps its original position.
    pub fn set_member(&mut self, member: impl Into<String>, value: Snippet) -> &mut Self {
        self.members.insert(member.into(), value);
        self
    }

    /// Set the sole `value` member.
    pub fn set_value(&mut self, value: Snippet) -> &mut Self {
        self.set_member("value", value)
    }

    fn sole_value(&self) -> Option<&Snippet> {
        if self.members.len() == 1 {
            self.members.get("value")
        } else {
            None
        }
    }
}

impl Writable for AnnotationWriter {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        out.write_char('@')?;
        out.write_str(&ctx.resolve(&self.name))?;
        if self.members.is_empty() {
            return Ok(());
        }
        out.write_char('(')?;
        if let Some(value) = self.sole_value() {
            value.write(out, ctx)?;
        } else {
            for (i, (member, value)) in self.members.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                out.write_str(member)?;
                out.write_str(" = ")?;
                value.write(out, ctx)?;
            }
        }
        out.write_char(')')
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        refs.insert(self.name.clone());
        for value in self.members.values() {
            value.collect_references(refs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writable::render_to_string;

    fn render(annotation: &AnnotationWriter) -> String {
        render_to_string(annotation, &RenderContext::new()).unwrap()
    }

    #[test]
    fn test_marker_annotation() {
        let annotation = AnnotationWriter::new(ClassName::top_level("java.lang", "Override"));
        assert_eq!(render(&annotation), "@Override");
    }

    #[test]
    fn test_sole_value_shorthand() {
        let mut annotation =
            AnnotationWriter::new(ClassName::top_level("java.lang", "SuppressWarnings"));
        annotation.set_value(Snippet::new("\"unchecked\""));
        assert_eq!(render(&annotation), "@SuppressWarnings(\"unchecked\")");
    }

    #[test]
    fn test_named_members_in_insertion_order() {
        let mut annotation =
            AnnotationWriter::new(ClassName::top_level("com.example", "Generated"));
        annotation
            .set_member("by", Snippet::new("\"javelin\""))
            .set_member("date", Snippet::new("\"2026\""));
        assert_eq!(
            render(&annotation),
            "@Generated(by = \"javelin\", date = \"2026\")"
        );
    }

    #[test]
    fn test_references_include_annotation_type_and_member_types() {
        let runnable = ClassName::top_level("java.lang", "Runnable");
        let mut annotation =
            AnnotationWriter::new(ClassName::top_level("com.example", "Binds"));
        annotation.set_value(Snippet::typed(
            "$T.class",
            [crate::types::TypeName::class(runnable.clone())],
        ));

        let refs = annotation.referenced_classes();
        assert!(refs.contains(annotation.name()));
        assert!(refs.contains(&runnable));
    }
}
