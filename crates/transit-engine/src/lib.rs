//! Recursive, configuration-driven population of typed object graphs.
//!
//! Given a target object, a raw-data context, and a [`PropertyDescriptor`]
//! for one property, [`MappingEngine::process_property`] decides by the
//! property's registered shape (collection, composite, or primitive) how to
//! obtain, transform, and assign a value, recursing into nested objects and
//! collections through the injected [`FormatAdapter`].
//!
//! - **schema**: per-type property tables replacing runtime reflection
//! - **adapter**: the collaborator seam for concrete raw-data formats
//! - **engine**: the dispatch-plus-recursion core
//! - **error**: configuration and conversion failures
//!
//! The engine is synchronous and holds no shared mutable state; callers that
//! want parallel mapping give each unit its own target and raw context.

pub mod adapter;
pub mod engine;
pub mod error;
pub mod schema;

pub use adapter::{ChildRequest, ChildValues, FormatAdapter};
pub use engine::{MappingContext, MappingEngine};
pub use error::{MappingError, Result};
pub use schema::{CollectionOps, ElementInfo, PropertyKind, PropertySlot, TypeSchema};

pub use transit_model::PropertyDescriptor;
