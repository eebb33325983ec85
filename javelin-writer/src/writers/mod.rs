//! The writer family: declaration renderers for class members and whole
//! class blocks.

mod annotation;
mod class;
mod field;
mod method;

pub use annotation::AnnotationWriter;
pub use class::ClassWriter;
pub use field::FieldWriter;
pub use method::{ConstructorWriter, MethodWriter, Parameter};

use crate::error::Result;
use crate::sink::Sink;

/// Emit an optional `/** ... */` doc comment, one `*` line per text line.
pub(crate) fn write_doc(doc: Option<&str>, out: &mut dyn Sink) -> Result<()> {
    let Some(text) = doc else {
        return Ok(());
    };
    if text.contains('\n') {
        out.write_str("/**\n")?;
        for line in text.lines() {
            out.write_str(" * ")?;
            out.write_str(line)?;
            out.write_char('\n')?;
        }
        out.write_str(" */\n")
    } else {
        out.write_str("/** ")?;
        out.write_str(text)?;
        out.write_str(" */\n")
    }
}
