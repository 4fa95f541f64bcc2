use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use thiserror::Error;

use crate::tree::ConfigNode;

/// Errors that can occur while reading a configuration document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document could not be tokenized.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// A tag, attribute, or CDATA section was not valid UTF-8.
    #[error("invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// An entity reference could not be unescaped.
    #[error("failed to decode XML text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    /// The input file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The element structure is not a single well-nested tree.
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Parse an in-memory document into a [`ConfigNode`] tree.
pub fn parse(xml: &[u8]) -> Result<ConfigNode, ParseError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut open: Vec<ConfigNode> = Vec::new();
    let mut root: Option<ConfigNode> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => open.push(start_node(&e, &reader)?),
            Event::Empty(e) => {
                let node = start_node(&e, &reader)?;
                attach(&mut open, &mut root, node)?;
            }
            Event::Text(e) => {
                if let Some(current) = open.last_mut() {
                    append_text(current, &e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = open.last_mut() {
                    append_text(current, std::str::from_utf8(e.as_ref())?);
                }
            }
            Event::End(_) => {
                let node = open.pop().ok_or_else(|| {
                    ParseError::Malformed("closing tag without matching open tag".to_string())
                })?;
                attach(&mut open, &mut root, node)?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(ParseError::Malformed(format!(
            "element <{}> is not closed at end of document",
            unclosed.tag
        )));
    }

    root.ok_or_else(|| ParseError::Malformed("no root element found".to_string()))
}

/// Read and parse a configuration file.
pub fn parse_file(path: &Path) -> Result<ConfigNode, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

/// Hand a finished node to its parent, or make it the document root.
fn attach(
    open: &mut [ConfigNode],
    root: &mut Option<ConfigNode>,
    node: ConfigNode,
) -> Result<(), ParseError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(ParseError::Malformed(
            "multiple top-level elements found".to_string(),
        ));
    }
    *root = Some(node);
    Ok(())
}

fn append_text(node: &mut ConfigNode, text: &str) {
    // Indentation between child elements is not content.
    if text.trim().is_empty() {
        return;
    }
    match &mut node.text {
        Some(existing) => existing.push_str(text),
        None => node.text = Some(text.to_string()),
    }
}

fn start_node(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<ConfigNode, ParseError> {
    let mut node = ConfigNode::new(qname_to_string(e.name())?);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = qname_to_string(attr.key)?;
        let value = attr
            .decode_and_unescape_value(reader.decoder())?
            .into_owned();
        node.attributes.insert(key, value);
    }

    Ok(node)
}

fn qname_to_string(name: QName<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(name.as_ref())?.to_string())
}
