use super::diagnostics::{Diagnostics, ParseDiagnostic};
use super::element::Element;
use super::schema::{FieldDecl, FieldKind, NodeSchema};
use super::value::{Scalar, Value};
use crate::error::{Result, SevdError};
use std::borrow::Cow;

/// An instance of a declared node type.
///
/// Every declared property has one slot, in declaration order. A slot is
/// either absent, holds a nested node (or nodes) of the declared type, or
/// holds a scalar its validator accepted. Required properties may be absent
/// in memory; requiredness is only enforced by [`Node::to_xml`].
#[derive(Debug, Clone)]
pub struct Node {
    schema: &'static NodeSchema,
    tag: Cow<'static, str>,
    values: Vec<Value>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.schema.is(other.schema) && self.tag == other.tag && self.values == other.values
    }
}

impl Node {
    /// Creates a node with every property at its default (usually absent).
    pub fn new(schema: &'static NodeSchema) -> Result<Self> {
        Self::with(schema, std::iter::empty::<(&str, Value)>())
    }

    /// Creates a node from initial property values.
    ///
    /// Supplied values, declared defaults and absent values all go through
    /// the same assignment path as [`Node::set`].
    pub fn with<'a, I>(schema: &'static NodeSchema, initial: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let mut supplied: Vec<(usize, Value)> = Vec::new();
        for (property, value) in initial {
            let (index, _) = schema
                .field(property)
                .ok_or_else(|| unknown_property(schema, property))?;
            supplied.push((index, value));
        }

        let mut node = Self {
            schema,
            tag: Cow::Borrowed(schema.tag),
            values: vec![Value::Absent; schema.fields.len()],
        };
        for (index, field) in schema.fields.iter().enumerate() {
            let value = match supplied.iter().rposition(|(i, _)| *i == index) {
                Some(position) => supplied.swap_remove(position).1,
                None => Value::Absent,
            };
            // An absent value, supplied or not, takes the declared default.
            let value = match (value, field.default) {
                (Value::Absent, Some(text)) => Value::Scalar(Scalar::from(text)),
                (value, _) => value,
            };
            node.assign(index, value)?;
        }
        Ok(node)
    }

    pub fn schema(&self) -> &'static NodeSchema {
        self.schema
    }

    /// The tag this node is written as when no override is given.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Reuses the node under a different element name.
    pub fn set_tag(&mut self, tag: impl Into<Cow<'static, str>>) {
        self.tag = tag.into();
    }

    pub fn get(&self, property: &str) -> Result<&Value> {
        let (index, _) = self.field(property)?;
        Ok(&self.values[index])
    }

    /// Validates `value` against the property's declaration and stores it.
    pub fn set(&mut self, property: &str, value: impl Into<Value>) -> Result<()> {
        let (index, _) = self.field(property)?;
        self.assign(index, value.into())
    }

    /// Builder-style [`Node::set`].
    pub fn and(mut self, property: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(property, value)?;
        Ok(self)
    }

    /// Canonical text of a scalar property.
    pub fn text(&self, property: &str) -> Result<Option<String>> {
        Ok(self.get(property)?.as_scalar().map(Scalar::to_text))
    }

    /// The nested node of a property; the first one for a list.
    pub fn node(&self, property: &str) -> Result<Option<&Node>> {
        Ok(self.nodes(property)?.first())
    }

    /// Nested nodes of a property. A single node reads as a one-element list.
    pub fn nodes(&self, property: &str) -> Result<&[Node]> {
        match self.get(property)? {
            Value::Node(node) => Ok(std::slice::from_ref(node)),
            Value::Nodes(nodes) => Ok(nodes),
            _ => Ok(&[]),
        }
    }

    /// Follows nested properties and returns the text at the end of the path.
    ///
    /// Lists are entered through their first element. Absent links yield
    /// `None`; undeclared property names are errors.
    pub fn text_at(&self, path: &[&str]) -> Result<Option<String>> {
        let Some((last, links)) = path.split_last() else {
            return Ok(None);
        };
        let mut current = self;
        for link in links {
            match current.node(link)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        current.text(last)
    }

    /// Serializes the node to an element named `tag`, or the node's own tag.
    ///
    /// Children are written in declaration order. A required property that
    /// is absent fails with [`SevdError::MissingRequiredField`]. An optional
    /// nested node with nothing to write is left out.
    pub fn to_xml(&self, tag: Option<&str>) -> Result<Element> {
        let mut element = Element::new(tag.unwrap_or(self.tag.as_ref()));
        for (field, value) in self.schema.fields.iter().zip(&self.values) {
            match value {
                Value::Node(node) => {
                    if let Some(child) = write_nested(field, node)? {
                        element.push(child);
                    }
                }
                Value::Nodes(nodes) => {
                    for node in nodes {
                        if let Some(child) = write_nested(field, node)? {
                            element.push(child);
                        }
                    }
                }
                Value::Scalar(scalar) => {
                    element.push(Element::with_text(field.tag, scalar.to_text()));
                }
                Value::Absent if field.required => {
                    return Err(SevdError::MissingRequiredField {
                        tag: field.tag.to_string(),
                    });
                }
                Value::Absent => {}
            }
        }
        Ok(element)
    }

    /// Populates the node from `element`.
    ///
    /// Missing children leave their properties untouched and requiredness is
    /// not checked. Unknown children and a tag mismatch are reported in the
    /// returned diagnostics; invalid values and repeated elements against a
    /// single-valued declaration are errors.
    pub fn from_xml(&mut self, element: &Element) -> Result<Diagnostics> {
        let mut diagnostics = Diagnostics::default();
        self.read(element, &mut diagnostics)?;
        Ok(diagnostics)
    }

    fn read(&mut self, element: &Element, diagnostics: &mut Diagnostics) -> Result<()> {
        if element.name() != self.tag {
            diagnostics.push(ParseDiagnostic::tag_mismatch(element.name(), &self.tag));
        }

        let schema = self.schema;
        let children = element.children();
        let mut consumed = vec![false; children.len()];

        for (index, field) in schema.fields.iter().enumerate() {
            let matches: Vec<usize> = children
                .iter()
                .enumerate()
                .filter(|(_, child)| child.name() == field.tag)
                .map(|(position, _)| position)
                .collect();
            if matches.is_empty() {
                continue;
            }
            if matches.len() > 1 && !field.multiple() {
                return Err(SevdError::SchemaViolation {
                    tag: field.tag.to_string(),
                    count: matches.len(),
                });
            }
            for &position in &matches {
                consumed[position] = true;
            }

            let value = match field.kind {
                FieldKind::Scalar(_) => children[matches[0]]
                    .text()
                    .map_or(Value::Absent, |text| Value::Scalar(Scalar::from(text))),
                FieldKind::Nested(nested) | FieldKind::NestedMany(nested) => {
                    let mut parsed = Vec::with_capacity(matches.len());
                    for &position in &matches {
                        let child = &children[position];
                        // An empty element stands for "present, no content".
                        if nested.expects_children() && !child.has_children() {
                            continue;
                        }
                        parsed.push(Self::read_nested(nested, field, child, diagnostics)?);
                    }
                    if parsed.is_empty() {
                        continue;
                    }
                    if field.multiple() {
                        Value::Nodes(parsed)
                    } else {
                        Value::Node(parsed.remove(0))
                    }
                }
            };
            self.assign(index, value)?;
        }

        for (child, _) in children.iter().zip(&consumed).filter(|(_, seen)| !**seen) {
            diagnostics.push(ParseDiagnostic::unparsed(child.name(), element.name()));
        }
        Ok(())
    }

    fn read_nested(
        schema: &'static NodeSchema,
        field: &'static FieldDecl,
        element: &Element,
        diagnostics: &mut Diagnostics,
    ) -> Result<Node> {
        let mut node = Node::new(schema)?;
        node.set_tag(field.tag);
        node.read(element, diagnostics)?;
        Ok(node)
    }

    fn field(&self, property: &str) -> Result<(usize, &'static FieldDecl)> {
        self.schema
            .field(property)
            .ok_or_else(|| unknown_property(self.schema, property))
    }

    fn assign(&mut self, index: usize, value: Value) -> Result<()> {
        let field: &'static FieldDecl = &self.schema.fields[index];
        let stored = match (field.kind, value) {
            (FieldKind::Scalar(validator), Value::Absent) => {
                validator.check(field.property, None)?.into()
            }
            (FieldKind::Scalar(validator), Value::Scalar(scalar)) => {
                validator.check(field.property, Some(scalar))?.into()
            }
            (FieldKind::Scalar(_), other) => {
                return Err(type_mismatch(field, "a scalar value", other.kind()));
            }
            (_, Value::Absent) => Value::Absent,
            (FieldKind::Nested(schema) | FieldKind::NestedMany(schema), Value::Node(node)) => {
                if !node.schema.is(schema) {
                    return Err(type_mismatch(field, schema.name, node.schema.name));
                }
                Value::Node(node)
            }
            (FieldKind::NestedMany(schema), Value::Nodes(nodes)) => {
                if let Some(stray) = nodes.iter().find(|node| !node.schema.is(schema)) {
                    return Err(type_mismatch(field, schema.name, stray.schema.name));
                }
                Value::Nodes(nodes)
            }
            (FieldKind::Nested(schema), other) => {
                return Err(type_mismatch(field, schema.name, &other.kind()));
            }
            (FieldKind::NestedMany(schema), other) => {
                return Err(type_mismatch(field, schema.name, &other.kind()));
            }
        };
        self.values[index] = stored;
        Ok(())
    }
}

fn write_nested(field: &FieldDecl, node: &Node) -> Result<Option<Element>> {
    let child = node.to_xml(Some(field.tag))?;
    let empty = node.schema.expects_children() && !child.has_children();
    Ok((field.required || !empty).then_some(child))
}

fn unknown_property(schema: &NodeSchema, property: &str) -> SevdError {
    SevdError::UnknownProperty {
        node: schema.name.to_string(),
        property: property.to_string(),
    }
}

fn type_mismatch(field: &FieldDecl, expected: &str, found: impl Into<String>) -> SevdError {
    SevdError::TypeMismatch {
        property: field.property.to_string(),
        expected: expected.to_string(),
        found: found.into(),
    }
}
