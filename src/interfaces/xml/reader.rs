use crate::domain::element::Element;
use crate::error::{Result, SevdError};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses a complete document into an element tree.
///
/// Character data is kept untrimmed. Only text that precedes an element's
/// first child is retained; text after a child element is dropped.
pub fn parse(text: &str) -> Result<Element> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = Reader::from_str(text);
    let mut buf = Vec::new();
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_error(&reader, e))?;
        match event {
            Event::Start(ref e) => {
                ensure_single_root(&root)?;
                open.push(start_element(e)?);
            }
            Event::Empty(ref e) => {
                ensure_single_root(&root)?;
                let element = start_element(e)?;
                close(element, &mut open, &mut root);
            }
            Event::Text(ref e) => {
                if let Some(current) = open.last_mut() {
                    if !current.has_children() {
                        let text = e.unescape().map_err(|e| xml_error(&reader, e))?;
                        current.append_text(&text);
                    }
                }
            }
            Event::CData(e) => {
                if let Some(current) = open.last_mut() {
                    if !current.has_children() {
                        let raw = e.into_inner();
                        let text = std::str::from_utf8(&raw)
                            .map_err(|e| SevdError::Xml(e.to_string()))?;
                        current.append_text(text);
                    }
                }
            }
            Event::End(_) => match open.pop() {
                Some(element) => close(element, &mut open, &mut root),
                None => return Err(SevdError::Xml("unexpected closing tag".to_string())),
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(SevdError::Xml(format!(
            "unexpected end of document inside <{}>",
            unclosed.name()
        )));
    }
    root.ok_or_else(|| SevdError::Xml("document has no root element".to_string()))
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| SevdError::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| SevdError::Xml(e.to_string()))?;
        element.set_attribute(key, value.into_owned());
    }
    Ok(element)
}

fn close(element: Element, open: &mut [Element], root: &mut Option<Element>) {
    match open.last_mut() {
        Some(parent) => parent.push(element),
        None => *root = Some(element),
    }
}

fn ensure_single_root(root: &Option<Element>) -> Result<()> {
    match root {
        Some(existing) => Err(SevdError::Xml(format!(
            "content after the root element <{}>",
            existing.name()
        ))),
        None => Ok(()),
    }
}

fn xml_error(reader: &Reader<&[u8]>, error: quick_xml::Error) -> SevdError {
    SevdError::Xml(format!(
        "{error} at position {}",
        reader.buffer_position()
    ))
}
