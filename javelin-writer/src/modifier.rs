//! Declaration modifiers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sink::Sink;

/// A declaration modifier.
///
/// Declaration order is the canonical emission order (visibility first), so
/// a `BTreeSet<Modifier>` iterates in the order modifiers must appear on the
/// page regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// Get the source-text keyword for this modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
        }
    }

    /// Returns true for the visibility trio: public, protected, private.
    pub fn is_visibility(&self) -> bool {
        matches!(self, Modifier::Public | Modifier::Protected | Modifier::Private)
    }
}

/// The visibility modifier of a set, if any: the intersection of the set
/// with {public, protected, private}.
pub fn visibility_of(modifiers: &BTreeSet<Modifier>) -> Option<Modifier> {
    modifiers.iter().copied().find(Modifier::is_visibility)
}

/// Emit modifiers in canonical order, each followed by a space.
pub(crate) fn write_modifiers(modifiers: &BTreeSet<Modifier>, out: &mut dyn Sink) -> Result<()> {
    for modifier in modifiers {
        out.write_str(modifier.as_str())?;
        out.write_char(' ')?;
    }
    Ok(())
}
