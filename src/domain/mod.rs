//! Declarative object model of the gateway's XML documents.

pub mod catalog;
pub mod diagnostics;
pub mod element;
pub mod node;
pub mod ports;
pub mod schema;
pub mod validators;
pub mod value;

pub use diagnostics::{DiagnosticKind, Diagnostics, ParseDiagnostic};
pub use element::Element;
pub use node::Node;
pub use schema::{FieldDecl, FieldKind, NodeSchema};
pub use value::{Scalar, Value};
