use crate::domain::element::Element;
use crate::domain::node::Node;
use crate::error::{Result, SevdError};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

const REQUEST_ROOT: &str = "Request_v1";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Serializes a document root into the text posted to the gateway.
///
/// The text starts with the XML declaration. A `Request_v1` root also gets
/// the `xsi` and `xsd` namespace declarations.
pub fn to_xml_string(node: &Node) -> Result<String> {
    let mut element = node.to_xml(None)?;
    if element.name() == REQUEST_ROOT {
        element.set_attribute("xmlns:xsi", XSI_NAMESPACE);
        element.set_attribute("xmlns:xsd", XSD_NAMESPACE);
    }

    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| SevdError::Xml(e.to_string()))?;
    write_into(&mut writer, &element)?;

    let text = String::from_utf8(writer.into_inner()).map_err(|e| SevdError::Xml(e.to_string()))?;
    tracing::debug!(root = element.name(), bytes = text.len(), "serialized {text}");
    Ok(text)
}

/// Serializes an element tree without a declaration.
pub fn write_element(element: &Element) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_into(&mut writer, element)?;
    String::from_utf8(writer.into_inner()).map_err(|e| SevdError::Xml(e.to_string()))
}

// Empty elements are always written as an explicit start/end pair.
fn write_into(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    writer
        .write_event(Event::Start(start))
        .map_err(|e| SevdError::Xml(e.to_string()))?;

    if let Some(text) = element.text() {
        writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
            .map_err(|e| SevdError::Xml(e.to_string()))?;
    }
    for child in element.children() {
        write_into(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(|e| SevdError::Xml(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{APPLICATION, REQUEST, RESPONSE};

    #[test]
    fn test_request_envelope() {
        let application = Node::new(&APPLICATION).unwrap().and("app_id", "DEMO").unwrap();
        let request = Node::new(&REQUEST)
            .unwrap()
            .and("application", application)
            .unwrap();

        assert_eq!(
            to_xml_string(&request).unwrap(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
             <Request_v1 xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\">\
             <Application><ApplicationID>DEMO</ApplicationID><LanguageID>EN</LanguageID></Application>\
             </Request_v1>"
        );
    }

    #[test]
    fn test_other_roots_have_no_namespaces() {
        let response = Node::new(&RESPONSE).unwrap();
        assert_eq!(
            to_xml_string(&response).unwrap(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?><Response_v1></Response_v1>"
        );
    }

    #[test]
    fn test_text_escaping() {
        let element = Element::with_text("Reference1", "A & B <C> \"q\"");
        assert_eq!(
            write_element(&element).unwrap(),
            "<Reference1>A &amp; B &lt;C&gt; \"q\"</Reference1>"
        );
    }
}
