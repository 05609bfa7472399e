//! SVG parsing from XML.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ast::*;
use crate::error::PathpackError;

/// Parse an SVG string into a Document.
pub fn parse_svg(svg: &str) -> Result<Document, PathpackError> {
    let mut reader = Reader::from_str(svg);

    let mut root = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                root = Some(parse_element(&mut reader, &start)?);
                break;
            }
            Event::Empty(start) => {
                root = Some(parse_element_start(&start)?);
                break;
            }
            Event::Eof => break,
            // XML declaration, DOCTYPE, comments and whitespace before the root
            _ => {}
        }
    }

    let root = root.ok_or_else(|| PathpackError::InvalidSvg("No root element found".into()))?;

    Ok(Document { root })
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element, PathpackError> {
    let mut element = parse_element_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                element
                    .children
                    .push(Node::Element(parse_element(reader, &start)?));
            }
            Event::Empty(start) => {
                element
                    .children
                    .push(Node::Element(parse_element_start(&start)?));
            }
            Event::End(_) => {
                break;
            }
            Event::Text(text) => {
                // Whitespace between tags is dropped
                if !text.unescape()?.trim().is_empty() {
                    element.children.push(Node::Other);
                }
            }
            Event::Comment(_) | Event::CData(_) | Event::PI(_) => {
                element.children.push(Node::Other);
            }
            Event::Eof => {
                return Err(PathpackError::InvalidSvg("Unexpected end of file".into()));
            }
            _ => {}
        }
    }

    Ok(element)
}

fn parse_element_start(start: &BytesStart) -> Result<Element, PathpackError> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr =
            attr.map_err(|e| PathpackError::InvalidSvg(format!("Invalid attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element.attributes.push(Attribute {
            name: QName::parse(key),
            value: value.into_owned(),
        });
    }

    Ok(element)
}
