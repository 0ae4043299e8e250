//! Type-erased values produced by format adapters.

use std::any::{self, Any};
use std::fmt;

/// Opt-in emptiness capability for composite model types.
///
/// A type that implements this can report that it carries no meaningful
/// populated fields, which lets the engine elide hollow nested objects that
/// matched the raw data structurally but carried no real values.
pub trait ReportsEmpty {
    fn is_empty(&self) -> bool;
}

/// A constructed value flowing from a format adapter to the engine.
///
/// Carries the concrete type name for diagnostics and, when the type opted
/// in via [`ReportsEmpty`], the emptiness report captured at construction.
pub struct ChildValue {
    value: Box<dyn Any>,
    type_name: &'static str,
    emptiness: Option<bool>,
}

impl ChildValue {
    /// Wraps a value that does not support the emptiness query.
    pub fn new<V: Any>(value: V) -> Self {
        Self {
            value: Box::new(value),
            type_name: any::type_name::<V>(),
            emptiness: None,
        }
    }

    /// Wraps a value and captures its emptiness report.
    pub fn reporting<V: Any + ReportsEmpty>(value: V) -> Self {
        let emptiness = Some(value.is_empty());
        Self {
            value: Box::new(value),
            type_name: any::type_name::<V>(),
            emptiness,
        }
    }

    /// Concrete type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Three-way emptiness outcome: `None` when the type does not support
    /// the query, otherwise the report captured at construction.
    pub fn emptiness(&self) -> Option<bool> {
        self.emptiness
    }

    /// Recovers the wrapped value, returning `self` unchanged on a type
    /// mismatch.
    pub fn downcast<V: Any>(self) -> Result<V, Self> {
        let Self {
            value,
            type_name,
            emptiness,
        } = self;
        match value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self {
                value,
                type_name,
                emptiness,
            }),
        }
    }
}

impl fmt::Debug for ChildValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildValue")
            .field("type_name", &self.type_name)
            .field("emptiness", &self.emptiness)
            .finish_non_exhaustive()
    }
}
