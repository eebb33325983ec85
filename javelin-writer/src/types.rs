//! Type references appearing in declarations.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::Result;
use crate::name::ClassName;
use crate::sink::Sink;
use crate::writable::{write_joined, Writable};

/// A primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    /// Get the source-text keyword for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }
}

/// A reference to a type as it appears in a declaration: field types,
/// return types, parameter types, supertypes, and type arguments.
///
/// Class references resolve through the rendering context; everything else
/// renders positionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeName {
    /// A primitive type: `int`, `boolean`, `void`, ...
    Primitive(PrimitiveType),
    /// A class or interface reference.
    Class(ClassName),
    /// A generic type with type arguments: `Map<String, Integer>`.
    Parameterized { raw: ClassName, args: Vec<TypeName> },
    /// A reference to a type variable in scope: `T`.
    Variable(String),
    /// An array type: `T[]`.
    Array(Box<TypeName>),
}

impl TypeName {
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    pub fn class(name: ClassName) -> Self {
        Self::Class(name)
    }

    pub fn parameterized(raw: ClassName, args: impl IntoIterator<Item = TypeName>) -> Self {
        Self::Parameterized {
            raw,
            args: args.into_iter().collect(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn array(component: TypeName) -> Self {
        Self::Array(Box::new(component))
    }

    /// Convenience: `boolean`.
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    /// Convenience: `int`.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// Convenience: `long`.
    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    /// Convenience: `double`.
    pub fn double() -> Self {
        Self::Primitive(PrimitiveType::Double)
    }

    /// Convenience: `void`.
    pub fn void() -> Self {
        Self::Primitive(PrimitiveType::Void)
    }

    /// Convenience: `java.lang.String`.
    pub fn string() -> Self {
        Self::Class(ClassName::top_level("java.lang", "String"))
    }

    /// Convenience: `java.lang.Object`.
    pub fn object() -> Self {
        Self::Class(ClassName::top_level("java.lang", "Object"))
    }
}

impl From<ClassName> for TypeName {
    fn from(name: ClassName) -> Self {
        Self::Class(name)
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }
}

impl Writable for TypeName {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        match self {
            TypeName::Primitive(ty) => out.write_str(ty.as_str()),
            TypeName::Class(name) => out.write_str(&ctx.resolve(name)),
            TypeName::Parameterized { raw, args } => {
                out.write_str(&ctx.resolve(raw))?;
                write_joined(args.iter(), ", ", "<", ">", out, ctx)
            }
            TypeName::Variable(name) => out.write_str(name),
            TypeName::Array(component) => {
                component.write(out, ctx)?;
                out.write_str("[]")
            }
        }
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        match self {
            TypeName::Primitive(_) | TypeName::Variable(_) => {}
            TypeName::Class(name) => {
                refs.insert(name.clone());
            }
            TypeName::Parameterized { raw, args } => {
                refs.insert(raw.clone());
                for arg in args {
                    arg.collect_references(refs);
                }
            }
            TypeName::Array(component) => component.collect_references(refs),
        }
    }
}
