//! Per-type property tables.
//!
//! A [`TypeSchema`] is built once per target type by the model author and
//! replaces runtime property lookup: each slot pairs a property name with a
//! typed mutator and the shape classification the engine dispatches on.

use std::any::{self, Any, TypeId};
use std::collections::BTreeMap;

use transit_model::{ChildValue, ConvertError, FromRaw, Locale};

use crate::error::MappingError;

/// Structural category of a target property, resolved once at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A sequence type populated element by element.
    Collection,
    /// A non-primitive object type populated by recursive construction.
    Composite,
    /// A leaf value converted from a raw string.
    Primitive,
}

/// Identity of a composite or collection-element type, given to adapters so
/// they can pick the right child constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    pub type_id: TypeId,
    pub type_name: &'static str,
}

impl ElementInfo {
    pub fn of<V: Any>() -> Self {
        Self {
            type_id: TypeId::of::<V>(),
            type_name: any::type_name::<V>(),
        }
    }

    /// True when this element is the concrete type `V`.
    pub fn is<V: Any>(&self) -> bool {
        self.type_id == TypeId::of::<V>()
    }
}

pub(crate) type PrimitiveAssign<T> =
    Box<dyn Fn(&mut T, &str, &Locale) -> Result<(), ConvertError>>;
pub(crate) type CompositeAssign<T> = Box<dyn Fn(&mut T, ChildValue) -> Result<(), MappingError>>;
pub(crate) type CollectionStore<T> =
    Box<dyn Fn(&mut T, Box<dyn Any>) -> Result<(), MappingError>>;

/// Type-erased constructor and appender for one concrete collection type.
///
/// Insertion mechanics vary per collection (list append, set add, map
/// insert), so they are captured here at registration and exposed to the
/// adapter's materialize/append hooks.
pub struct CollectionOps {
    make: Box<dyn Fn() -> Box<dyn Any>>,
    append: Box<dyn Fn(&mut dyn Any, ChildValue) -> Result<(), MappingError>>,
}

impl CollectionOps {
    pub fn new(
        make: impl Fn() -> Box<dyn Any> + 'static,
        append: impl Fn(&mut dyn Any, ChildValue) -> Result<(), MappingError> + 'static,
    ) -> Self {
        Self {
            make: Box::new(make),
            append: Box::new(append),
        }
    }

    /// Ops for a `Vec<V>` destination.
    pub fn vec_of<V: Any>() -> Self {
        Self::new(
            || Box::new(Vec::<V>::new()),
            |collection, child| {
                let items = collection.downcast_mut::<Vec<V>>().ok_or(
                    MappingError::ChildType {
                        expected: any::type_name::<Vec<V>>(),
                        found: "a mismatched collection instance",
                    },
                )?;
                let value = child
                    .downcast::<V>()
                    .map_err(|child| MappingError::ChildType {
                        expected: any::type_name::<V>(),
                        found: child.type_name(),
                    })?;
                items.push(value);
                Ok(())
            },
        )
    }

    /// Creates an empty instance of the collection type.
    pub fn make(&self) -> Box<dyn Any> {
        (self.make)()
    }

    /// Inserts one child into the collection instance.
    pub fn append(
        &self,
        collection: &mut dyn Any,
        child: ChildValue,
    ) -> Result<(), MappingError> {
        (self.append)(collection, child)
    }
}

pub(crate) enum SlotBinding<T> {
    Primitive {
        assign: PrimitiveAssign<T>,
    },
    Composite {
        element: ElementInfo,
        assign: CompositeAssign<T>,
    },
    Collection {
        element: ElementInfo,
        ops: CollectionOps,
        store: CollectionStore<T>,
    },
}

/// One named, mappable property of a target type.
pub struct PropertySlot<T> {
    name: String,
    binding: SlotBinding<T>,
}

impl<T> PropertySlot<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyKind {
        match self.binding {
            SlotBinding::Primitive { .. } => PropertyKind::Primitive,
            SlotBinding::Composite { .. } => PropertyKind::Composite,
            SlotBinding::Collection { .. } => PropertyKind::Collection,
        }
    }

    pub(crate) fn binding(&self) -> &SlotBinding<T> {
        &self.binding
    }
}

/// Table of the mappable properties of `T`, keyed by property name.
///
/// Registering the same name twice replaces the earlier slot.
pub struct TypeSchema<T> {
    type_name: &'static str,
    slots: BTreeMap<String, PropertySlot<T>>,
}

impl<T> Default for TypeSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TypeSchema<T> {
    pub fn new() -> Self {
        Self {
            type_name: any::type_name::<T>(),
            slots: BTreeMap::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Looks up the slot for a configured target name.
    pub fn slot(&self, name: &str) -> Option<&PropertySlot<T>> {
        self.slots.get(name)
    }

    /// Registers a primitive property converted via [`FromRaw`].
    pub fn primitive<V>(self, name: &str, set: impl Fn(&mut T, V) + 'static) -> Self
    where
        V: FromRaw + 'static,
    {
        let assign: PrimitiveAssign<T> = Box::new(move |target, raw, locale| {
            let value = V::from_raw(raw, locale)?;
            set(target, value);
            Ok(())
        });
        self.insert(name, SlotBinding::Primitive { assign })
    }

    /// Registers a composite property populated by recursive construction.
    pub fn composite<C>(self, name: &str, set: impl Fn(&mut T, C) + 'static) -> Self
    where
        C: Any,
    {
        let element = ElementInfo::of::<C>();
        let assign: CompositeAssign<T> = Box::new(move |target, child| {
            let value = child
                .downcast::<C>()
                .map_err(|child| MappingError::ChildType {
                    expected: element.type_name,
                    found: child.type_name(),
                })?;
            set(target, value);
            Ok(())
        });
        self.insert(name, SlotBinding::Composite { element, assign })
    }

    /// Registers a `Vec`-backed collection property with elements of `V`.
    pub fn collection<V>(self, name: &str, store: impl Fn(&mut T, Vec<V>) + 'static) -> Self
    where
        V: Any,
    {
        self.collection_with::<Vec<V>, V>(name, CollectionOps::vec_of::<V>(), store)
    }

    /// Registers a collection property backed by a custom concrete type `C`
    /// with elements of `V`, using the supplied materialize/append ops.
    pub fn collection_with<C, V>(
        self,
        name: &str,
        ops: CollectionOps,
        store: impl Fn(&mut T, C) + 'static,
    ) -> Self
    where
        C: Any,
        V: Any,
    {
        let element = ElementInfo::of::<V>();
        let store: CollectionStore<T> = Box::new(move |target, collection| {
            let collection = collection
                .downcast::<C>()
                .map_err(|_| MappingError::ChildType {
                    expected: any::type_name::<C>(),
                    found: "a mismatched collection instance",
                })?;
            store(target, *collection);
            Ok(())
        });
        self.insert(
            name,
            SlotBinding::Collection {
                element,
                ops,
                store,
            },
        )
    }

    fn insert(mut self, name: &str, binding: SlotBinding<T>) -> Self {
        self.slots.insert(
            name.to_string(),
            PropertySlot {
                name: name.to_string(),
                binding,
            },
        );
        self
    }
}
