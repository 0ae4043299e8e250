//! Shared raw-data format, model types, and schemas for engine tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use transit_engine::{
    ChildRequest, ChildValues, ElementInfo, FormatAdapter, MappingContext, MappingEngine,
    MappingError, PropertyKind, TypeSchema,
};
use transit_model::{ChildValue, Locale, PropertyDescriptor, ReportsEmpty};

/// A minimal hierarchical raw-data tree.
///
/// Each property's context lives under `entries` by source name; a scalar
/// context carries `value`, a collection context lists its elements in
/// `items`, and a composite context holds its fields as further entries.
#[derive(Debug, Clone, Default)]
pub struct RawNode {
    pub value: Option<String>,
    pub entries: BTreeMap<String, RawNode>,
    pub items: Vec<RawNode>,
}

impl RawNode {
    pub fn leaf(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn with_entry(mut self, name: &str, node: RawNode) -> Self {
        self.entries.insert(name.to_string(), node);
        self
    }

    pub fn with_item(mut self, node: RawNode) -> Self {
        self.items.push(node);
        self
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Record {
    pub beta: String,
    pub count: i64,
    pub amount: f64,
    pub active: bool,
    pub gamma: Option<Address>,
    pub owner: Option<Contact>,
    pub epsilon: Vec<String>,
    pub zeta: Vec<Contact>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

impl ReportsEmpty for Address {
    fn is_empty(&self) -> bool {
        self.street.is_empty() && self.city.is_empty()
    }
}

/// Deliberately does not implement [`ReportsEmpty`]: exercises the
/// capability-absent branch of the emptiness contract.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
}

pub fn record_schema() -> TypeSchema<Record> {
    TypeSchema::new()
        .primitive("Beta", |r: &mut Record, v: String| r.beta = v)
        .primitive("Count", |r: &mut Record, v: i64| r.count = v)
        .primitive("Amount", |r: &mut Record, v: f64| r.amount = v)
        .primitive("Active", |r: &mut Record, v: bool| r.active = v)
        .composite("Gamma", |r: &mut Record, v: Address| r.gamma = Some(v))
        .composite("Owner", |r: &mut Record, v: Contact| r.owner = Some(v))
        .collection("Epsilon", |r: &mut Record, v: Vec<String>| r.epsilon = v)
        .collection("Zeta", |r: &mut Record, v: Vec<Contact>| r.zeta = v)
}

pub fn address_schema() -> TypeSchema<Address> {
    TypeSchema::new()
        .primitive("Street", |a: &mut Address, v: String| a.street = v)
        .primitive("City", |a: &mut Address, v: String| a.city = v)
}

pub fn contact_schema() -> TypeSchema<Contact> {
    TypeSchema::new().primitive("Name", |c: &mut Contact, v: String| c.name = v)
}

/// Test adapter over [`RawNode`] trees.
#[derive(Debug, Default)]
pub struct TreeAdapter {
    /// Entry name composite contexts are narrowed into, when set.
    pub narrow_into: Option<String>,
}

impl FormatAdapter for TreeAdapter {
    type Raw = RawNode;

    fn extract_raw_value(&self, raw: &RawNode) -> Option<String> {
        raw.value.clone()
    }

    fn build_child_values<'a>(
        &'a self,
        engine: &'a MappingEngine<Self>,
        request: ChildRequest<'a, RawNode>,
    ) -> Result<ChildValues<'a>, MappingError> {
        let Some(raw) = request.raw else {
            return Ok(Box::new(std::iter::empty()));
        };
        let nodes: Vec<RawNode> = match request.kind {
            PropertyKind::Collection => raw.items.clone(),
            _ => vec![raw.clone()],
        };
        let ChildRequest {
            descriptor,
            element,
            locale,
            ..
        } = request;
        let iter = nodes
            .into_iter()
            .map(move |node| build_element(engine, element, &node, descriptor, locale));
        Ok(Box::new(iter))
    }

    fn narrow_for_composite<'a>(&self, raw: &'a RawNode) -> &'a RawNode {
        match &self.narrow_into {
            Some(name) => raw.entries.get(name).unwrap_or(raw),
            None => raw,
        }
    }
}

fn build_element(
    engine: &MappingEngine<TreeAdapter>,
    element: ElementInfo,
    node: &RawNode,
    descriptor: &PropertyDescriptor,
    locale: &Locale,
) -> Result<ChildValue, MappingError> {
    if element.is::<String>() {
        Ok(ChildValue::new(node.value.clone().unwrap_or_default()))
    } else if element.is::<Address>() {
        populate(engine, &address_schema(), node, descriptor, locale).map(ChildValue::reporting)
    } else if element.is::<Contact>() {
        populate(engine, &contact_schema(), node, descriptor, locale).map(ChildValue::new)
    } else {
        Err(MappingError::Adapter(format!(
            "no element builder for {}",
            element.type_name
        )))
    }
}

fn populate<T: Default>(
    engine: &MappingEngine<TreeAdapter>,
    schema: &TypeSchema<T>,
    node: &RawNode,
    descriptor: &PropertyDescriptor,
    locale: &Locale,
) -> Result<T, MappingError> {
    let mut target = T::default();
    for child in &descriptor.properties {
        let scoped = node.entries.get(child.source());
        engine.process_property(MappingContext::new(schema, &mut target, scoped, child, locale))?;
    }
    Ok(target)
}

/// Maps one [`Record`] from a raw tree, scoping each descriptor to its
/// source entry the way a concrete format caller would.
pub fn map_record(
    engine: &MappingEngine<TreeAdapter>,
    root: &RawNode,
    descriptors: &[PropertyDescriptor],
    locale: &Locale,
) -> Result<Record, MappingError> {
    let schema = record_schema();
    let mut record = Record::default();
    for descriptor in descriptors {
        let scoped = root.entries.get(descriptor.source());
        engine.process_property(MappingContext::new(
            &schema,
            &mut record,
            scoped,
            descriptor,
            locale,
        ))?;
    }
    Ok(record)
}

pub fn engine() -> MappingEngine<TreeAdapter> {
    MappingEngine::new(TreeAdapter::default())
}
