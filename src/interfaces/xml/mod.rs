//! Text form of the gateway documents.

mod reader;
mod writer;

pub use reader::parse;
pub use writer::{to_xml_string, write_element};

use crate::domain::catalog::UI_STYLE;
use crate::domain::diagnostics::Diagnostics;
use crate::domain::node::Node;
use crate::domain::schema::NodeSchema;
use crate::error::Result;

/// Parses `text` and populates a fresh node of type `schema` from its root.
pub fn read_node(schema: &'static NodeSchema, text: &str) -> Result<(Node, Diagnostics)> {
    let element = parse(text)?;
    let mut node = Node::new(schema)?;
    let diagnostics = node.from_xml(&element)?;
    Ok((node, diagnostics))
}

/// Loads a standalone `<UIStyle>` fragment, such as a saved page style.
pub fn load_style_ui(text: &str) -> Result<(Node, Diagnostics)> {
    let element = parse(text)?;
    let mut style = Node::new(&UI_STYLE)?;
    style.set_tag("UIStyle");
    let diagnostics = style.from_xml(&element)?;
    Ok((style, diagnostics))
}
