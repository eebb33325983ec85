//! Method and constructor renderers.

use std::collections::BTreeSet;

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::modifier::{write_modifiers, Modifier};
use crate::name::ClassName;
use crate::sink::{Indenter, Sink};
use crate::snippet::CodeBlock;
use crate::types::TypeName;
use crate::writable::{write_joined, Writable};
use crate::writers::{write_doc, AnnotationWriter};

/// One formal parameter: inline annotations, type, name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    annotations: Vec<AnnotationWriter>,
    ty: TypeName,
    name: String,
}

impl Parameter {
    fn new(ty: TypeName, name: String) -> Self {
        Self {
            annotations: Vec::new(),
            ty,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }

    pub fn add_annotation(&mut self, name: ClassName) -> &mut AnnotationWriter {
        self.annotations.push(AnnotationWriter::new(name));
        let last = self.annotations.len() - 1;
        &mut self.annotations[last]
    }
}

impl Writable for Parameter {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        for annotation in &self.annotations {
            annotation.write(out, ctx)?;
            out.write_char(' ')?;
        }
        self.ty.write(out, ctx)?;
        out.write_char(' ')?;
        out.write_str(&self.name)
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        for annotation in &self.annotations {
            annotation.collect_references(refs);
        }
        self.ty.collect_references(refs);
    }
}

fn add_parameter<'a>(
    parameters: &'a mut IndexMap<String, Parameter>,
    owner: &str,
    ty: TypeName,
    name: &str,
) -> Result<&'a mut Parameter> {
    match parameters.entry(name.to_string()) {
        Entry::Occupied(_) => Err(Error::DuplicateParameter {
            owner: owner.to_string(),
            parameter: name.to_string(),
        }),
        Entry::Vacant(entry) => Ok(entry.insert(Parameter::new(ty, name.to_string()))),
    }
}

/// Renders one method declaration.
///
/// An abstract method renders `;` after the parameter list; a non-abstract
/// method with an empty body renders ` {}` on the declaration line; bodies
/// are emitted verbatim through one extra indentation level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodWriter {
    doc: Option<String>,
    annotations: Vec<AnnotationWriter>,
    modifiers: BTreeSet<Modifier>,
    return_type: TypeName,
    name: String,
    parameters: IndexMap<String, Parameter>,
    body: CodeBlock,
}

impl MethodWriter {
    pub(crate) fn new(return_type: TypeName, name: String) -> Self {
        Self {
            doc: None,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            return_type,
            name,
            parameters: IndexMap::new(),
            body: CodeBlock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
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

    /// Append a parameter; parameter names are unique per method.
    pub fn add_parameter(&mut self, ty: TypeName, name: &str) -> Result<&mut Parameter> {
        add_parameter(&mut self.parameters, &self.name, ty, name)
    }

    pub fn body(&self) -> &CodeBlock {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut CodeBlock {
        &mut self.body
    }
}

impl Writable for MethodWriter {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        write_doc(self.doc.as_deref(), out)?;
        for annotation in &self.annotations {
            annotation.write(out, ctx)?;
            out.write_char('\n')?;
        }
        write_modifiers(&self.modifiers, out)?;
        self.return_type.write(out, ctx)?;
        out.write_char(' ')?;
        out.write_str(&self.name)?;
        out.write_char('(')?;
        write_joined(self.parameters.values(), ", ", "", "", out, ctx)?;
        out.write_char(')')?;
        if self.modifiers.contains(&Modifier::Abstract) {
            out.write_str(";\n")
        } else if self.body.is_empty() {
            out.write_str(" {}\n")
        } else {
            out.write_str(" {\n")?;
            self.body.write(&mut Indenter::new(&mut *out), ctx)?;
            out.write_str("}\n")
        }
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        for annotation in &self.annotations {
            annotation.collect_references(refs);
        }
        self.return_type.collect_references(refs);
        for parameter in self.parameters.values() {
            parameter.collect_references(refs);
        }
        self.body.collect_references(refs);
    }
}

/// Renders one constructor declaration: a method head carrying the
/// enclosing type's simple name and no return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorWriter {
    doc: Option<String>,
    annotations: Vec<AnnotationWriter>,
    modifiers: BTreeSet<Modifier>,
    name: String,
    parameters: IndexMap<String, Parameter>,
    body: CodeBlock,
}

impl ConstructorWriter {
    pub(crate) fn new(name: String) -> Self {
        Self {
            doc: None,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            name,
            parameters: IndexMap::new(),
            body: CodeBlock::new(),
        }
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

    /// Append a parameter; parameter names are unique per constructor.
    pub fn add_parameter(&mut self, ty: TypeName, name: &str) -> Result<&mut Parameter> {
        add_parameter(&mut self.parameters, &self.name, ty, name)
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn body(&self) -> &CodeBlock {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut CodeBlock {
        &mut self.body
    }
}

impl Writable for ConstructorWriter {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        write_doc(self.doc.as_deref(), out)?;
        for annotation in &self.annotations {
            annotation.write(out, ctx)?;
            out.write_char('\n')?;
        }
        write_modifiers(&self.modifiers, out)?;
        out.write_str(&self.name)?;
        out.write_char('(')?;
        write_joined(self.parameters.values(), ", ", "", "", out, ctx)?;
        out.write_char(')')?;
        if self.body.is_empty() {
            out.write_str(" {}\n")
        } else {
            out.write_str(" {\n")?;
            self.body.write(&mut Indenter::new(&mut *out), ctx)?;
            out.write_str("}\n")
        }
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        for annotation in &self.annotations {
            annotation.collect_references(refs);
        }
        for parameter in self.parameters.values() {
            parameter.collect_references(refs);
        }
        self.body.collect_references(refs);
    }
}
