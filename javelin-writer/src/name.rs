//! Qualified type names and type variables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::sink::Sink;
use crate::writable::{write_joined, Writable};
use indexmap::IndexSet;

/// The full identity of a type: package path, enclosing-type chain, and
/// simple name.
///
/// Immutable value with structural equality over all three attributes, so
/// it can serve as a map or set key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassName {
    package: Vec<String>,
    enclosing: Vec<String>,
    simple_name: String,
}

impl ClassName {
    /// Create a top-level class name in the given dotted package.
    ///
    /// An empty package string means the default package.
    pub fn top_level(package: &str, simple_name: impl Into<String>) -> Self {
        let simple_name = simple_name.into();
        debug_assert!(!simple_name.is_empty());
        Self {
            package: package
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
            enclosing: Vec::new(),
            simple_name,
        }
    }

    /// Derive the name of a type nested directly inside this one.
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut enclosing = self.enclosing.clone();
        enclosing.push(self.simple_name.clone());
        Self {
            package: self.package.clone(),
            enclosing,
            simple_name: simple_name.into(),
        }
    }

    /// Derive a sibling name with the same package and enclosing chain.
    pub fn peer(&self, simple_name: impl Into<String>) -> Self {
        Self {
            package: self.package.clone(),
            enclosing: self.enclosing.clone(),
            simple_name: simple_name.into(),
        }
    }

    /// Split a canonical dotted name into package, enclosing chain, and
    /// simple name by convention: leading lowercase segments form the
    /// package, capitalized segments form the type chain.
    pub fn best_guess(name: &str) -> Result<Self> {
        let segments: Vec<&str> = name.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(Error::InvalidName {
                name: name.to_string(),
                reason: "empty segment".to_string(),
            });
        }
        let first_type = segments
            .iter()
            .position(|segment| segment.chars().next().is_some_and(char::is_uppercase));
        let Some(first_type) = first_type else {
            return Err(Error::InvalidName {
                name: name.to_string(),
                reason: "no capitalized type segment".to_string(),
            });
        };
        let Some((simple_name, enclosing)) = segments[first_type..].split_last() else {
            return Err(Error::InvalidName {
                name: name.to_string(),
                reason: "missing simple name".to_string(),
            });
        };
        Ok(Self {
            package: segments[..first_type].iter().map(|s| s.to_string()).collect(),
            enclosing: enclosing.iter().map(|s| s.to_string()).collect(),
            simple_name: simple_name.to_string(),
        })
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The dotted package path, empty for the default package.
    pub fn package_name(&self) -> String {
        self.package.join(".")
    }

    pub fn enclosing_simple_names(&self) -> &[String] {
        &self.enclosing
    }

    pub fn is_top_level(&self) -> bool {
        self.enclosing.is_empty()
    }

    /// The fully qualified dotted form, e.g. `java.util.Map.Entry`.
    pub fn canonical_name(&self) -> String {
        let mut parts: Vec<&str> = self.package.iter().map(String::as_str).collect();
        parts.extend(self.enclosing.iter().map(String::as_str));
        parts.push(&self.simple_name);
        parts.join(".")
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl Writable for ClassName {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        out.write_str(&ctx.resolve(self))
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        refs.insert(self.clone());
    }
}

/// A type parameter: a name plus zero or more upper bounds.
///
/// Renders as `T` or `T extends Bound1 & Bound2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeVariableName {
    name: String,
    bounds: Vec<ClassName>,
}

impl TypeVariableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded(name: impl Into<String>, bounds: impl IntoIterator<Item = ClassName>) -> Self {
        Self {
            name: name.into(),
            bounds: bounds.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[ClassName] {
        &self.bounds
    }
}

impl Writable for TypeVariableName {
    fn write(&self, out: &mut dyn Sink, ctx: &RenderContext) -> Result<()> {
        out.write_str(&self.name)?;
        write_joined(self.bounds.iter(), " & ", " extends ", "", out, ctx)
    }

    fn collect_references(&self, refs: &mut IndexSet<ClassName>) {
        for bound in &self.bounds {
            bound.collect_references(refs);
        }
    }
}
