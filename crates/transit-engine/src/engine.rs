//! Recursive property-processing engine.

use tracing::trace;

use transit_model::{Locale, PropertyDescriptor};

use crate::adapter::{ChildRequest, FormatAdapter};
use crate::error::{MappingError, Result};
use crate::schema::{PropertyKind, SlotBinding, TypeSchema};

/// Per-property invocation state.
///
/// Built fresh for every property (and for every recursive descent into a
/// composite or collection element) and consumed by the call that receives
/// it. The target is mutated in place; everything else is read-only.
pub struct MappingContext<'a, T, R> {
    /// Schema of the type currently being populated.
    pub schema: &'a TypeSchema<T>,
    /// The object being mutated.
    pub target: &'a mut T,
    /// Raw-data context relevant to the current property, when one exists.
    pub raw: Option<&'a R>,
    /// Mapping configuration for the current property.
    pub descriptor: &'a PropertyDescriptor,
    /// Culture context for string-to-value conversion.
    pub locale: &'a Locale,
}

impl<'a, T, R> MappingContext<'a, T, R> {
    pub fn new(
        schema: &'a TypeSchema<T>,
        target: &'a mut T,
        raw: Option<&'a R>,
        descriptor: &'a PropertyDescriptor,
        locale: &'a Locale,
    ) -> Self {
        Self {
            schema,
            target,
            raw,
            descriptor,
            locale,
        }
    }
}

/// Populates typed object graphs from hierarchical raw data, one property
/// at a time, driven by [`PropertyDescriptor`] configuration.
///
/// The engine owns no format knowledge: raw-value extraction, child
/// construction, and collection mechanics are delegated to the injected
/// [`FormatAdapter`].
pub struct MappingEngine<A: FormatAdapter> {
    adapter: A,
}

impl<A: FormatAdapter> MappingEngine<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Resolves and populates one property on the context's target.
    ///
    /// Dispatch order, first match wins: literal override, then collection,
    /// then composite, then primitive. The ordering is a contract with the
    /// configuration format, not an implementation detail. A primitive
    /// property without a raw-data context is left untouched; absence is a
    /// valid state, not a failure.
    pub fn process_property<T>(&self, ctx: MappingContext<'_, T, A::Raw>) -> Result<()> {
        let MappingContext {
            schema,
            target,
            raw,
            descriptor,
            locale,
        } = ctx;

        let slot = schema
            .slot(&descriptor.target_name)
            .ok_or_else(|| MappingError::UnknownProperty {
                type_name: schema.type_name(),
                property: descriptor.target_name.clone(),
            })?;

        if let Some(literal) = descriptor.literal.as_deref() {
            trace!(property = %descriptor.target_name, "assigning literal override");
            let SlotBinding::Primitive { assign } = slot.binding() else {
                return Err(MappingError::ShapeMismatch {
                    type_name: schema.type_name(),
                    property: descriptor.target_name.clone(),
                    expected: "primitive",
                });
            };
            return assign(target, literal, locale).map_err(|reason| {
                MappingError::Conversion {
                    property: descriptor.target_name.clone(),
                    raw: literal.to_string(),
                    reason,
                }
            });
        }

        match slot.binding() {
            SlotBinding::Collection {
                element,
                ops,
                store,
            } => {
                let mut collection = self
                    .adapter
                    .materialize_collection(ops, &descriptor.target_name)?;
                let children = self.adapter.build_child_values(
                    self,
                    ChildRequest {
                        raw,
                        descriptor,
                        element: *element,
                        kind: PropertyKind::Collection,
                        locale,
                    },
                )?;
                let mut appended = 0_usize;
                for child in children {
                    self.adapter
                        .append_to_collection(ops, collection.as_mut(), child?)?;
                    appended += 1;
                }
                trace!(property = %descriptor.target_name, appended, "collection populated");
                store(target, collection)
            }
            SlotBinding::Composite { element, assign } => {
                let narrowed = raw.map(|node| self.adapter.narrow_for_composite(node));
                let mut children = self.adapter.build_child_values(
                    self,
                    ChildRequest {
                        raw: narrowed,
                        descriptor,
                        element: *element,
                        kind: PropertyKind::Composite,
                        locale,
                    },
                )?;
                let Some(child) = children.next().transpose()? else {
                    return Ok(());
                };
                drop(children);
                if child.emptiness() == Some(true) {
                    trace!(property = %descriptor.target_name, "eliding empty composite");
                    return Ok(());
                }
                assign(target, child)
            }
            SlotBinding::Primitive { assign } => {
                // Absence is a valid state for a primitive leaf.
                let Some(node) = raw else {
                    return Ok(());
                };
                let Some(value) = self.adapter.extract_raw_value(node) else {
                    return Ok(());
                };
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    // Never overwrite an existing default with emptiness.
                    return Ok(());
                }
                let resolved = descriptor.resolve_value(trimmed);
                assign(target, resolved, locale).map_err(|reason| {
                    MappingError::Conversion {
                        property: descriptor.target_name.clone(),
                        raw: resolved.to_string(),
                        reason,
                    }
                })
            }
        }
    }
}
