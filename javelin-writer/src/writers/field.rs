//! Field renderer.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::Result;
use crate::modifier::{write_modifiers, Modifier};
use crate::name::ClassName;
use crate::sink::Sink;
use crate::snippet::Snippet;
use crate::types::TypeName;
use crate::writable::Writable;
use crate::writers::{write_doc, AnnotationWriter};

/// Renders one field declaration:
/// doc → annotations → modifiers → type → name → optional initializer → `;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWriter {
    doc: Option<String>,
    annotations: Vec<AnnotationWriter>,
    modifiers: BTreeSet<Modifier>,
    ty: TypeName,
    name: String,
    initializer: Option<Snippet>,
}

impl FieldWriter {
    pub(crate) fn new(ty: TypeName, name: String) -> Self {
        Self {
            doc: None,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            ty,
            name,
            initializer: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }

    pub fn set_doc(&mut self, doc: impl Into<String>) -> &mut Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn add_modifier(&mut self, modifier: Modifier) -> &mut Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn add_modifiers(&mut self, modifiers: impl IntoIterator<Item = Modifier>) -> &mut Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn add_annotation(&mut self, name: ClassName) -> &mut AnnotationWriter {
        self.annotations.push(AnnotationWriter::new(name));
        let last = self.annotations.len() - 1;
        &mut self.annotations[last]
    }

    pub fn set_initializer(&mut self, initializer: Snippet) -> &mut Self {
        self.initializer = Some(initializer);
        self
    }
}

impl Writable for FieldWriter {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        write_doc(self.doc.as_deref(), out)?;
        for annotation in &self.annotations {
            annotation.write(out, ctx)?;
            out.write_char('\n')?;
        }
        write_modifiers(&self.modifiers, out)?;
        self.ty.write(out, ctx)?;
        out.write_char(' ')?;
        out.write_str(&self.name)?;
        if let Some(initializer) = &self.initializer {
            out.write_str(" = ")?;
            initializer.write(out, ctx)?;
        }
        out.write_str(";\n")
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        for annotation in &self.annotations {
            annotation.collect_references(refs);
        }
        self.ty.collect_references(refs);
        if let Some(initializer) = &self.initializer {
            initializer.collect_references(refs);
        }
    }
}
