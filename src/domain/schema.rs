use super::validators::{Text, Validator};
use std::fmt;

/// How a declared child is represented on the node.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// A text element checked by the validator.
    Scalar(&'static dyn Validator),
    /// At most one nested node of the given type.
    Nested(&'static NodeSchema),
    /// Any number of nested nodes, written as sibling elements.
    NestedMany(&'static NodeSchema),
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(validator) => f.debug_tuple("Scalar").field(validator).finish(),
            FieldKind::Nested(schema) => f.debug_tuple("Nested").field(&schema.name).finish(),
            FieldKind::NestedMany(schema) => {
                f.debug_tuple("NestedMany").field(&schema.name).finish()
            }
        }
    }
}

/// One child relationship of a node type: element tag, property name,
/// cardinality, requiredness and value check.
#[derive(Debug, Clone, Copy)]
pub struct FieldDecl {
    pub tag: &'static str,
    pub property: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Text assigned at construction when no value is supplied.
    pub default: Option<&'static str>,
}

impl FieldDecl {
    /// A plain text element.
    pub const fn text(tag: &'static str, property: &'static str) -> Self {
        Self::scalar(tag, property, &Text)
    }

    pub const fn scalar(
        tag: &'static str,
        property: &'static str,
        validator: &'static dyn Validator,
    ) -> Self {
        Self {
            tag,
            property,
            kind: FieldKind::Scalar(validator),
            required: false,
            default: None,
        }
    }

    pub const fn nested(tag: &'static str, property: &'static str, schema: &'static NodeSchema) -> Self {
        Self {
            tag,
            property,
            kind: FieldKind::Nested(schema),
            required: false,
            default: None,
        }
    }

    pub const fn many(tag: &'static str, property: &'static str, schema: &'static NodeSchema) -> Self {
        Self {
            tag,
            property,
            kind: FieldKind::NestedMany(schema),
            required: false,
            default: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    pub fn multiple(&self) -> bool {
        matches!(self.kind, FieldKind::NestedMany(_))
    }

    /// The nested node type, if this is not a scalar declaration.
    pub fn nested_schema(&self) -> Option<&'static NodeSchema> {
        match self.kind {
            FieldKind::Scalar(_) => None,
            FieldKind::Nested(schema) | FieldKind::NestedMany(schema) => Some(schema),
        }
    }
}

/// The declaration table of one node type.
///
/// Field order is document order: serialization writes children in exactly
/// this order.
#[derive(Debug)]
pub struct NodeSchema {
    /// Type name, e.g. `AddressType`.
    pub name: &'static str,
    /// Element tag used when the node is the document root.
    pub tag: &'static str,
    pub fields: &'static [FieldDecl],
}

impl NodeSchema {
    pub fn field(&self, property: &str) -> Option<(usize, &'static FieldDecl)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.property == property)
    }

    pub fn field_by_tag(&self, tag: &str) -> Option<&'static FieldDecl> {
        self.fields.iter().find(|field| field.tag == tag)
    }

    /// Whether nodes of this type carry child elements of their own.
    pub fn expects_children(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn is(&self, other: &NodeSchema) -> bool {
        std::ptr::eq(self, other)
    }
}
