//! Error types for mapping operations.

use thiserror::Error;

use transit_model::ConvertError;

/// Errors from processing a single property.
///
/// Absence of raw data is never an error: the engine leaves the property
/// untouched instead.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The configured target name does not resolve to a property on the
    /// target type.
    #[error("no property named {property:?} on {type_name}")]
    UnknownProperty {
        type_name: &'static str,
        property: String,
    },
    /// The property's shape does not support the configured mapping kind,
    /// e.g. a literal override on a collection property.
    #[error("property {property:?} on {type_name} requires a {expected} binding")]
    ShapeMismatch {
        type_name: &'static str,
        property: String,
        expected: &'static str,
    },
    /// A raw string value could not be converted to the destination type.
    #[error("cannot convert {raw:?} for property {property:?}: {reason}")]
    Conversion {
        property: String,
        raw: String,
        reason: ConvertError,
    },
    /// A constructed child's concrete type does not match the registered
    /// slot.
    #[error("expected a child of type {expected}, got {found}")]
    ChildType {
        expected: &'static str,
        found: &'static str,
    },
    /// A collaborator hook failed.
    #[error("adapter error: {0}")]
    Adapter(String),
}

impl MappingError {
    /// True for errors caused by mapping configuration rather than by the
    /// raw data itself.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownProperty { .. } | Self::ShapeMismatch { .. } | Self::ChildType { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;
