//! Composable writers for generating Java class declarations.
//!
//! A writer tree is built imperatively (append-only) and then rendered into
//! an output sink, resolving qualified names to the shortest unambiguous
//! form for the position in the tree where they appear. A bottom-up
//! traversal of the same tree reports every externally referenced name for
//! a downstream import-assembly pass.
//!
//! # Module Organization
//!
//! - [`name`] - Qualified names and type variables
//! - [`types`] - Type references ([`TypeName`], [`PrimitiveType`])
//! - [`modifier`] - Declaration modifiers in canonical emission order
//! - [`context`] - Scope tracking for name resolution
//! - [`sink`] - Output sinks and the indentation decorator
//! - [`snippet`] - Opaque body fragments with `$T` type placeholders
//! - [`writable`] - The render/collect-references capability
//! - [`writers`] - The writer family (class, field, constructor, method,
//!   annotation)
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use javelin_writer::{ClassName, ClassWriter, TypeName};
//!
//! let mut class = ClassWriter::new(ClassName::top_level("", "Foo"));
//! class.add_field(TypeName::int(), "x").unwrap();
//! class
//!     .add_method(TypeName::int(), "getX")
//!     .body_mut()
//!     .add_snippet("return x;");
//!
//! assert_eq!(
//!     class.to_source().unwrap(),
//!     "class Foo {\n  int x;\n\n  int getX() {\n    return x;\n  }\n}\n"
//! );
//! ```

pub mod context;
pub mod error;
pub mod modifier;
pub mod name;
pub mod sink;
pub mod snippet;
pub mod types;
pub mod writable;
pub mod writers;

pub use context::RenderContext;
pub use error::{Error, Result};
pub use modifier::Modifier;
pub use name::{ClassName, TypeVariableName};
pub use sink::{Indenter, IoSink, Sink};
pub use snippet::{CodeBlock, Snippet};
pub use types::{PrimitiveType, TypeName};
pub use writable::{render_to_string, Writable};
pub use writers::{
    AnnotationWriter, ClassWriter, ConstructorWriter, FieldWriter, MethodWriter, Parameter,
};
