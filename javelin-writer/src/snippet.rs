//! Opaque code fragments for constructor, method, and initializer bodies.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::name::ClassName;
use crate::sink::Sink;
use crate::types::TypeName;
use crate::writable::Writable;

/// A fragment of body text the core does not parse.
///
/// The text may contain `$T` placeholders, each consuming one type argument
/// resolved through the rendering context, so bodies can mention classes
/// that feed the referenced-name set. `$$` escapes a literal dollar sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    format: String,
    args: Vec<TypeName>,
}

impl Snippet {
    /// A plain snippet with no placeholders.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            format: text.into(),
            args: Vec::new(),
        }
    }

    /// A snippet whose `$T` placeholders consume `args` in order.
    pub fn typed(format: impl Into<String>, args: impl IntoIterator<Item = TypeName>) -> Self {
        Self {
            format: format.into(),
            args: args.into_iter().collect(),
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> Error {
        Error::Snippet {
            format: self.format.clone(),
            reason: reason.into(),
        }
    }
}

impl Writable for Snippet {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        let mut args = self.args.iter();
        let mut chars = self.format.chars();
        while let Some(c) = chars.next() {
            if c != '$' {
                out.write_char(c)?;
                continue;
            }
            match chars.next() {
                Some('T') => {
                    let arg = args
                        .next()
                        .ok_or_else(|| self.malformed("'$T' has no matching type argument"))?;
                    arg.write(out, ctx)?;
                }
                Some('$') => out.write_char('$')?,
                Some(other) => {
                    return Err(self.malformed(format!("unsupported placeholder '${other}'")))
                }
                None => return Err(self.malformed("dangling '$' at end of snippet")),
            }
        }
        if args.next().is_some() {
            return Err(self.malformed("unused type arguments"));
        }
        Ok(())
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        for arg in &self.args {
            arg.collect_references(refs);
        }
    }
}

/// An ordered sequence of snippets, one per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    snippets: Vec<Snippet>,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain line of body text.
    pub fn add_snippet(&mut self, text: impl Into<String>) -> &mut Self {
        self.snippets.push(Snippet::new(text));
        self
    }

    /// Append a line of body text with `$T` type placeholders.
    pub fn add_typed_snippet(
        &mut self,
        format: impl Into<String>,
        args: impl IntoIterator<Item = TypeName>,
    ) -> &mut Self {
        self.snippets.push(Snippet::typed(format, args));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl Writable for CodeBlock {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        for snippet in &self.snippets {
            snippet.write(out, ctx)?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        for snippet in &self.snippets {
            snippet.collect_references(refs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writable::render_to_string;

    #[test]
    fn test_plain_snippet() {
        let snippet = Snippet::new("return x;");
        let out = render_to_string(&snippet, &RenderContext::new()).unwrap();
        assert_eq!(out, "return x;");
    }

    #[test]
    fn test_type_placeholder_resolves_through_context() {
        let list = ClassName::top_level("java.util", "List");
        let snippet = Snippet::typed("return new $T<>();", [TypeName::class(list.clone())]);

        let out = render_to_string(&snippet, &RenderContext::new()).unwrap();
        assert_eq!(out, "return new List<>();");

        let colliding = RenderContext::with_visible([ClassName::top_level("a", "List")]);
        let out = render_to_string(&snippet, &colliding).unwrap();
        assert_eq!(out, "return new java.util.List<>();");
    }

    #[test]
    fn test_dollar_escape() {
        let snippet = Snippet::new("price = \"$$5\";");
        let out = render_to_string(&snippet, &RenderContext::new()).unwrap();
        assert_eq!(out, "price = \"$5\";");
    }

    #[test]
    fn test_arity_mismatch_is_an_error() {
        let missing = Snippet::typed("new $T();", []);
        assert!(matches!(
            render_to_string(&missing, &RenderContext::new()),
            Err(Error::Snippet { .. })
        ));

        let unused = Snippet::typed("done();", [TypeName::string()]);
        assert!(matches!(
            render_to_string(&unused, &RenderContext::new()),
            Err(Error::Snippet { .. })
        ));
    }

    #[test]
    fn test_unknown_placeholder_is_an_error() {
        let snippet = Snippet::new("bad $X here");
        assert!(render_to_string(&snippet, &RenderContext::new()).is_err());
    }

    #[test]
    fn test_code_block_lines_and_references() {
        let widget = ClassName::top_level("com.example", "Widget");
        let mut block = CodeBlock::new();
        assert!(block.is_empty());
        block
            .add_snippet("int total = 0;")
            .add_typed_snippet("$T widget = build();", [TypeName::class(widget.clone())]);
        assert!(!block.is_empty());

        let out = render_to_string(&block, &RenderContext::new()).unwrap();
        assert_eq!(out, "int total = 0;\nWidget widget = build();\n");
        assert!(block.referenced_classes().contains(&widget));
    }
}
