//! Per-property mapping configuration.
//!
//! Descriptors are supplied externally (typically deserialized from a
//! mapping configuration file) and are read-only to the engine.

use serde::{Deserialize, Serialize};

/// A configured substitution rule translating one raw textual value to
/// another before type conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueMapping {
    /// Raw value to match, case-insensitively. An empty source matches only
    /// an empty raw value and acts as a placeholder (see
    /// [`PropertyDescriptor::resolve_value`]).
    pub source: String,
    /// Replacement value substituted when `source` matches.
    pub target: String,
}

impl ValueMapping {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Mapping configuration for one property of a target type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Name of the property on the target type to populate.
    pub target_name: String,
    /// Raw-data element name adapters scan for. Defaults to `target_name`
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Fixed value that bypasses raw-data extraction entirely. Still subject
    /// to type conversion for the destination property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    /// Ordered substitution rules applied to extracted raw values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_mappings: Vec<ValueMapping>,
    /// Child descriptors used by adapters when constructing composite
    /// objects and collection elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDescriptor>,
}

impl PropertyDescriptor {
    /// A descriptor targeting the named property, with no overrides.
    pub fn named(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    pub fn with_mapping(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.value_mappings.push(ValueMapping::new(source, target));
        self
    }

    pub fn with_child(mut self, child: PropertyDescriptor) -> Self {
        self.properties.push(child);
        self
    }

    /// Raw-data element name for this property.
    pub fn source(&self) -> &str {
        self.source_name.as_deref().unwrap_or(&self.target_name)
    }

    /// Applies the configured value mappings to a raw value.
    ///
    /// The first mapping whose `source` matches case-insensitively wins. An
    /// entry with an empty `source` matches only an empty raw value and
    /// never substitutes: it ends the search with the raw value unchanged.
    pub fn resolve_value<'a>(&'a self, raw: &'a str) -> &'a str {
        for mapping in &self.value_mappings {
            if mapping.source.is_empty() {
                if raw.is_empty() {
                    return raw;
                }
            } else if mapping.source.eq_ignore_ascii_case(raw) {
                return &mapping.target;
            }
        }
        raw
    }
}
