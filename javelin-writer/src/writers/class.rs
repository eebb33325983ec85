//! The composite class renderer.

use std::collections::BTreeSet;

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::modifier::{visibility_of, write_modifiers, Modifier};
use crate::name::{ClassName, TypeVariableName};
use crate::sink::{Indenter, Sink};
use crate::types::TypeName;
use crate::writable::{render_to_string, write_joined, Writable};
use crate::writers::{write_doc, AnnotationWriter, ConstructorWriter, FieldWriter, MethodWriter};

/// Renders one class declaration block: header (doc, annotations,
/// modifiers, type parameters, `extends`, `implements`) followed by fields,
/// constructors, methods, and nested classes, each category in append
/// order, members separated by single blank lines.
///
/// Writers are built imperatively through the `add_*` methods, each handing
/// back the added child for further configuration, and then rendered any
/// number of times; rendering reads the tree and only appends to the sink,
/// so independent renders of one unmodified tree are safe from any thread.
///
/// A constructor whose visibility equals the class's own visibility and
/// whose body is empty adds no information beyond the implicit default
/// constructor and is elided from the output entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassWriter {
    name: ClassName,
    doc: Option<String>,
    annotations: Vec<AnnotationWriter>,
    modifiers: BTreeSet<Modifier>,
    type_parameters: Vec<TypeVariableName>,
    supertype: Option<TypeName>,
    implemented: IndexSet<TypeName>,
    fields: IndexMap<String, FieldWriter>,
    constructors: Vec<ConstructorWriter>,
    methods: Vec<MethodWriter>,
    nested: Vec<ClassWriter>,
}

impl ClassWriter {
    pub fn new(name: ClassName) -> Self {
        Self {
            name,
            doc: None,
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            type_parameters: Vec::new(),
            supertype: None,
            implemented: IndexSet::new(),
            fields: IndexMap::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    pub fn set_doc(&mut self, doc: impl Into<String>) -> &mut Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn add_annotation(&mut self, name: ClassName) -> &mut AnnotationWriter {
        self.annotations.push(AnnotationWriter::new(name));
        let last = self.annotations.len() - 1;
        &mut self.annotations[last]
    }

    pub fn add_modifier(&mut self, modifier: Modifier) -> &mut Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn add_modifiers(&mut self, modifiers: impl IntoIterator<Item = Modifier>) -> &mut Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn add_type_parameter(&mut self, type_parameter: TypeVariableName) -> &mut Self {
        self.type_parameters.push(type_parameter);
        self
    }

    pub fn type_parameters(&self) -> &[TypeVariableName] {
        &self.type_parameters
    }

    pub fn set_supertype(&mut self, supertype: impl Into<TypeName>) -> &mut Self {
        self.supertype = Some(supertype.into());
        self
    }

    pub fn add_implements(&mut self, interface: impl Into<TypeName>) -> &mut Self {
        self.implemented.insert(interface.into());
        self
    }

    /// Append a field; field names are unique within one class.
    pub fn add_field(&mut self, ty: TypeName, name: &str) -> Result<&mut FieldWriter> {
        match self.fields.entry(name.to_string()) {
            Entry::Occupied(_) => Err(Error::DuplicateField {
                class: self.name.simple_name().to_string(),
                field: name.to_string(),
            }),
            Entry::Vacant(entry) => Ok(entry.insert(FieldWriter::new(ty, name.to_string()))),
        }
    }

    pub fn add_constructor(&mut self) -> &mut ConstructorWriter {
        self.constructors
            .push(ConstructorWriter::new(self.name.simple_name().to_string()));
        let last = self.constructors.len() - 1;
        &mut self.constructors[last]
    }

    pub fn add_method(&mut self, return_type: TypeName, name: impl Into<String>) -> &mut MethodWriter {
        self.methods.push(MethodWriter::new(return_type, name.into()));
        let last = self.methods.len() - 1;
        &mut self.methods[last]
    }

    /// Append a nested class; its qualified name is derived from this
    /// writer's own name.
    pub fn add_nested_class(&mut self, simple_name: &str) -> &mut ClassWriter {
        self.nested.push(ClassWriter::new(self.name.nested(simple_name)));
        let last = self.nested.len() - 1;
        &mut self.nested[last]
    }

    /// Render this declaration into a fresh string under a fresh top-level
    /// context.
    pub fn to_source(&self) -> Result<String> {
        render_to_string(self, &RenderContext::new())
    }

    fn is_default_constructor(&self, constructor: &ConstructorWriter) -> bool {
        visibility_of(constructor.modifiers()) == visibility_of(&self.modifiers)
            && constructor.body().is_empty()
    }
}

impl Writable for ClassWriter {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        // Members below see this level's nested type names by simple name.
        let ctx = ctx.subcontext(self.nested.iter().map(|nested| nested.name.clone()));
        write_doc(self.doc.as_deref(), out)?;
        for annotation in &self.annotations {
            annotation.write(out, &ctx)?;
            out.write_char('\n')?;
        }
        write_modifiers(&self.modifiers, out)?;
        out.write_str("class ")?;
        out.write_str(self.name.simple_name())?;
        write_joined(self.type_parameters.iter(), ", ", "<", ">", out, &ctx)?;
        if let Some(supertype) = &self.supertype {
            out.write_str(" extends ")?;
            supertype.write(out, &ctx)?;
        }
        write_joined(self.implemented.iter(), ", ", " implements ", "", out, &ctx)?;
        out.write_str(" {")?;
        if !self.fields.is_empty() {
            out.write_char('\n')?;
        }
        for field in self.fields.values() {
            field.write(&mut Indenter::new(&mut *out), &ctx)?;
        }
        for constructor in &self.constructors {
            if self.is_default_constructor(constructor) {
                continue;
            }
            out.write_char('\n')?;
            constructor.write(&mut Indenter::new(&mut *out), &ctx)?;
        }
        for method in &self.methods {
            out.write_char('\n')?;
            method.write(&mut Indenter::new(&mut *out), &ctx)?;
        }
        for nested in &self.nested {
            out.write_char('\n')?;
            nested.write(&mut Indenter::new(&mut *out), &ctx)?;
        }
        out.write_str("}\n")
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        for nested in &self.nested {
            nested.collect_references(refs);
        }
        for field in self.fields.values() {
            field.collect_references(refs);
        }
        for constructor in &self.constructors {
            constructor.collect_references(refs);
        }
        for method in &self.methods {
            method.collect_references(refs);
        }
        for interface in &self.implemented {
            interface.collect_references(refs);
        }
        if let Some(supertype) = &self.supertype {
            supertype.collect_references(refs);
        }
        for annotation in &self.annotations {
            annotation.collect_references(refs);
        }
        for type_parameter in &self.type_parameters {
            type_parameter.collect_references(refs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> ClassWriter {
        ClassWriter::new(ClassName::top_level("", "Foo"))
    }

    #[test]
    fn test_empty_class_renders_one_line() {
        assert_eq!(foo().to_source().unwrap(), "class Foo {}\n");
    }

    #[test]
    fn test_default_constructor_is_elided() {
        let mut class = foo();
        class.add_field(TypeName::int(), "x").unwrap();
        class.add_constructor();
        class.add_method(TypeName::int(), "getX").body_mut().add_snippet("return x;");

        assert_eq!(
            class.to_source().unwrap(),
            "class Foo {\n  int x;\n\n  int getX() {\n    return x;\n  }\n}\n"
        );
    }

    #[test]
    fn test_constructor_with_body_is_kept() {
        let mut class = foo();
        class.add_field(TypeName::int(), "x").unwrap();
        let constructor = class.add_constructor();
        constructor.add_parameter(TypeName::int(), "x").unwrap();
        constructor.body_mut().add_snippet("this.x = x;");
        class.add_method(TypeName::int(), "getX").body_mut().add_snippet("return x;");

        assert_eq!(
            class.to_source().unwrap(),
            "class Foo {\n  int x;\n\n  Foo(int x) {\n    this.x = x;\n  }\n\n  int getX() {\n    return x;\n  }\n}\n"
        );
    }

    #[test]
    fn test_constructor_with_differing_visibility_is_kept() {
        let mut class = foo();
        class.add_constructor().add_modifier(Modifier::Private);
        assert_eq!(class.to_source().unwrap(), "class Foo {\n  private Foo() {}\n}\n");
    }

    #[test]
    fn test_constructor_matching_class_visibility_is_elided() {
        let mut class = foo();
        class.add_modifier(Modifier::Public);
        class.add_constructor().add_modifier(Modifier::Public);
        assert_eq!(class.to_source().unwrap(), "public class Foo {}\n");
    }

    #[test]
    fn test_type_parameters() {
        let mut one = ClassWriter::new(ClassName::top_level("", "Box"));
        one.add_type_parameter(TypeVariableName::new("T"));
        assert_eq!(one.to_source().unwrap(), "class Box<T> {}\n");

        let mut two = ClassWriter::new(ClassName::top_level("", "Pair"));
        two.add_type_parameter(TypeVariableName::new("T"));
        two.add_type_parameter(TypeVariableName::bounded(
            "U",
            [
                ClassName::top_level("java.lang", "Comparable"),
                ClassName::top_level("java.io", "Serializable"),
            ],
        ));
        assert_eq!(
            two.to_source().unwrap(),
            "class Pair<T, U extends Comparable & Serializable> {}\n"
        );
    }

    #[test]
    fn test_supertype_and_interfaces() {
        let mut class = ClassWriter::new(ClassName::top_level("com.example", "Widget"));
        class.set_supertype(ClassName::top_level("com.example.base", "AbstractWidget"));
        class.add_implements(ClassName::top_level("java.io", "Serializable"));
        class.add_implements(TypeName::parameterized(
            ClassName::top_level("java.lang", "Comparable"),
            [TypeName::class(ClassName::top_level("com.example", "Widget"))],
        ));

        assert_eq!(
            class.to_source().unwrap(),
            "class Widget extends AbstractWidget implements Serializable, Comparable<Widget> {}\n"
        );
    }

    #[test]
    fn test_annotations_and_modifiers_on_class() {
        let mut class = foo();
        class.add_annotation(ClassName::top_level("java.lang", "Deprecated"));
        class.add_modifiers([Modifier::Final, Modifier::Public]);
        assert_eq!(class.to_source().unwrap(), "@Deprecated\npublic final class Foo {}\n");
    }

    #[test]
    fn test_fields_render_in_append_order() {
        let mut class = foo();
        class.add_field(TypeName::int(), "b").unwrap();
        class.add_field(TypeName::int(), "a").unwrap();
        assert_eq!(class.to_source().unwrap(), "class Foo {\n  int b;\n  int a;\n}\n");
    }

    #[test]
    fn test_duplicate_field_fails_fast() {
        let mut class = foo();
        class.add_field(TypeName::int(), "x").unwrap();
        let err = class.add_field(TypeName::long(), "x").unwrap_err();
        assert!(matches!(err, Error::DuplicateField { .. }));
    }

    #[test]
    fn test_nested_sibling_resolves_unqualified() {
        let mut outer = ClassWriter::new(ClassName::top_level("com.example", "Outer"));
        let inner2_name = outer.name().nested("Inner2");
        let inner1 = outer.add_nested_class("Inner1");
        inner1
            .add_method(TypeName::class(inner2_name.clone()), "create")
            .body_mut()
            .add_typed_snippet("return new $T();", [TypeName::class(inner2_name)]);
        outer.add_nested_class("Inner2");

        assert_eq!(
            outer.to_source().unwrap(),
            "class Outer {\n  class Inner1 {\n    Inner2 create() {\n      return new Inner2();\n    }\n  }\n\n  class Inner2 {}\n}\n"
        );
    }

    #[test]
    fn test_nested_class_context_does_not_leak_to_uncle() {
        // A type nested two levels down is only in scope inside its own
        // enclosing class, not in the grandparent's other children.
        let mut outer = ClassWriter::new(ClassName::top_level("com.example", "Outer"));
        let deep_name = outer.name().nested("Inner1").nested("Deep");
        let inner1 = outer.add_nested_class("Inner1");
        inner1.add_nested_class("Deep");
        let inner2 = outer.add_nested_class("Inner2");
        inner2
            .add_method(TypeName::class(deep_name), "deep")
            .body_mut()
            .add_snippet("return null;");

        let source = outer.to_source().unwrap();
        // Inner2's method sees no `Deep` binding, and nothing collides, so
        // the conservative resolution falls back to the simple name.
        assert!(source.contains("Deep deep()"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut class = foo();
        class.add_field(TypeName::int(), "x").unwrap();
        class.add_method(TypeName::int(), "getX").body_mut().add_snippet("return x;");
        assert_eq!(class.to_source().unwrap(), class.to_source().unwrap());
    }

    #[test]
    fn test_referenced_classes_union() {
        let supertype = ClassName::top_level("com.example.base", "Base");
        let serializable = ClassName::top_level("java.io", "Serializable");
        let deprecated = ClassName::top_level("java.lang", "Deprecated");
        let comparable = ClassName::top_level("java.lang", "Comparable");
        let list = ClassName::top_level("java.util", "List");
        let collections = ClassName::top_level("java.util", "Collections");

        let mut class = ClassWriter::new(ClassName::top_level("com.example", "Widget"));
        class.add_annotation(deprecated.clone());
        class.add_type_parameter(TypeVariableName::bounded("T", [comparable.clone()]));
        class.set_supertype(supertype.clone());
        class.add_implements(serializable.clone());
        class
            .add_field(TypeName::parameterized(list.clone(), [TypeName::variable("T")]), "items")
            .unwrap();
        class
            .add_method(TypeName::void(), "clear")
            .body_mut()
            .add_typed_snippet("items = $T.emptyList();", [TypeName::class(collections.clone())]);
        class
            .add_nested_class("Sorter")
            .add_field(TypeName::int(), "passes")
            .unwrap();

        let refs = class.referenced_classes();
        for expected in [&supertype, &serializable, &deprecated, &comparable, &list, &collections] {
            assert!(refs.contains(expected), "missing {expected}");
        }
        // The class's own name and its nested names are declarations, not
        // references.
        assert!(!refs.contains(class.name()));
    }
}
