//! The collaborator seam between the engine and a concrete raw-data format.

use std::any::Any;

use transit_model::{ChildValue, Locale, PropertyDescriptor};

use crate::engine::MappingEngine;
use crate::error::Result;
use crate::schema::{CollectionOps, ElementInfo, PropertyKind};

/// Lazy, consumed-once sequence of constructed child values.
pub type ChildValues<'a> = Box<dyn Iterator<Item = Result<ChildValue>> + 'a>;

/// Everything an adapter needs to construct child values for one property.
pub struct ChildRequest<'a, R> {
    /// Raw-data context for the property, when one exists.
    pub raw: Option<&'a R>,
    /// Descriptor of the property being populated, inherited unchanged from
    /// the parent invocation.
    pub descriptor: &'a PropertyDescriptor,
    /// Identity of the composite or collection-element type to construct.
    pub element: ElementInfo,
    /// Shape of the property the children are destined for.
    pub kind: PropertyKind,
    /// Culture context for conversions performed while recursing.
    pub locale: &'a Locale,
}

/// Collaborator operations implemented once per raw-data format.
///
/// The engine stays free of format specifics: everything that touches the
/// raw tree or a concrete collection type goes through this trait. Only
/// [`extract_raw_value`](Self::extract_raw_value) and
/// [`build_child_values`](Self::build_child_values) are required; the
/// remaining hooks have defaults that suit most formats.
pub trait FormatAdapter: Sized {
    /// Raw-data context handle, scoped to the portion relevant to one
    /// property.
    type Raw;

    /// Pulls a single scalar string from a raw-data context, or `None` when
    /// the context carries no value.
    fn extract_raw_value(&self, raw: &Self::Raw) -> Option<String>;

    /// Produces zero or more constructed values for a collection or
    /// composite property by scanning the raw-data context.
    ///
    /// The adapter receives the engine so it can recurse through
    /// [`MappingEngine::process_property`] while constructing each child.
    /// The returned sequence is consumed exactly once, in order.
    fn build_child_values<'a>(
        &'a self,
        engine: &'a MappingEngine<Self>,
        request: ChildRequest<'a, Self::Raw>,
    ) -> Result<ChildValues<'a>>;

    /// Creates an empty, mutable instance of the concrete collection type
    /// required by the property.
    fn materialize_collection(
        &self,
        ops: &CollectionOps,
        _property: &str,
    ) -> Result<Box<dyn Any>> {
        Ok(ops.make())
    }

    /// Inserts one produced child into the materialized collection.
    fn append_to_collection(
        &self,
        ops: &CollectionOps,
        collection: &mut dyn Any,
        child: ChildValue,
    ) -> Result<()> {
        ops.append(collection, child)
    }

    /// Scopes the raw-data context down before recursing into a nested
    /// object. Defaults to the identity.
    fn narrow_for_composite<'a>(&self, raw: &'a Self::Raw) -> &'a Self::Raw {
        raw
    }
}
